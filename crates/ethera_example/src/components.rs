//! Game-specific components

use ethera_engine::ecs::components::State;
use ethera_engine::prelude::*;

/// Life cycle of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityState {
    /// Standing still
    Idle,
    /// Moving
    Walking,
    /// Swinging an attack
    Attacking,
    /// Recovering from a hit
    Damaged,
    /// Playing the death animation
    Dying,
    /// Death animation finished, about to be removed
    Despawn,
    /// Dead and kept in the world
    Dead,
}

impl EntityState {
    /// Whether the character can still act
    pub fn is_alive(self) -> bool {
        !matches!(self, Self::Dying | Self::Despawn | Self::Dead)
    }
}

/// State component of every character
pub type CharacterState = State<EntityState>;

/// Direction a character looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    /// Looking left
    #[default]
    Left,
    /// Looking right
    Right,
}

impl Component for Facing {}

/// Marks the player character
#[derive(Debug, Clone, Copy, Default)]
pub struct Player;

impl Component for Player {}

/// Marks an enemy character
#[derive(Debug, Clone, Copy, Default)]
pub struct Enemy;

impl Component for Enemy {}

/// Melee attack
#[derive(Debug, Clone, PartialEq)]
pub struct Attack {
    /// Health removed per hit
    pub damage: f32,
    /// Reach in pixels beyond the attacker's bounds
    pub range: f32,
    /// Minimum time between two attacks
    pub cooldown_ms: u64,
    /// Distance a hit target is pushed away
    pub knockback: f32,
    /// When the last attack started
    pub last_attack_ms: Option<u64>,
    /// Set by input or AI, consumed by the combat system
    pub requested: bool,
}

impl Component for Attack {}

impl Attack {
    /// Create an attack that has never been used
    pub fn new(damage: f32, range: f32, cooldown_ms: u64, knockback: f32) -> Self {
        Self {
            damage,
            range,
            cooldown_ms,
            knockback,
            last_attack_ms: None,
            requested: false,
        }
    }

    /// Whether the cooldown has passed
    pub fn is_ready(&self, now_ms: u64) -> bool {
        self.last_attack_ms
            .map_or(true, |last| now_ms.saturating_sub(last) >= self.cooldown_ms)
    }
}

/// Hit points with a short invincibility window after each hit
#[derive(Debug, Clone, PartialEq)]
pub struct Health {
    /// Remaining hit points
    pub health: f32,
    /// Time after a hit during which further hits are ignored
    pub invincibility_ms: u64,
    /// When the last hit landed
    pub last_damage_ms: Option<u64>,
}

impl Component for Health {}

impl Health {
    /// Create full health
    pub fn new(health: f32, invincibility_ms: u64) -> Self {
        Self {
            health,
            invincibility_ms,
            last_damage_ms: None,
        }
    }

    /// Whether hits are currently ignored
    pub fn is_invincible(&self, now_ms: u64) -> bool {
        self.last_damage_ms
            .is_some_and(|last| now_ms.saturating_sub(last) < self.invincibility_ms)
    }

    /// Apply a hit unless invincible; returns whether it landed
    pub fn damage(&mut self, amount: f32, now_ms: u64) -> bool {
        if self.is_invincible(now_ms) || self.is_depleted() {
            return false;
        }
        self.health = (self.health - amount).max(0.0);
        self.last_damage_ms = Some(now_ms);
        true
    }

    /// Whether no hit points are left
    pub fn is_depleted(&self) -> bool {
        self.health <= 0.0
    }
}

/// Enemy brain: the character it chases
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnemyAi {
    /// Current target
    pub target: Option<EntityId>,
}

impl Component for EnemyAi {}

impl EnemyAi {
    /// Create an AI with the given target
    pub const fn new(target: Option<EntityId>) -> Self {
        Self { target }
    }
}

/// Characters that block and hit each other
#[derive(Debug, Clone, Copy, Default)]
pub struct Collideable;

impl Component for Collideable {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_cooldown() {
        let mut attack = Attack::new(1.0, 40.0, 400, 40.0);
        assert!(attack.is_ready(0));

        attack.last_attack_ms = Some(1_000);
        assert!(!attack.is_ready(1_399));
        assert!(attack.is_ready(1_400));
    }

    #[test]
    fn test_invincibility_window() {
        let mut health = Health::new(5.0, 1_000);

        assert!(health.damage(1.0, 100));
        assert!(!health.damage(1.0, 600));
        assert!(health.damage(1.0, 1_100));
        assert_eq!(health.health, 3.0);
    }

    #[test]
    fn test_health_never_negative() {
        let mut health = Health::new(1.0, 0);
        assert!(health.damage(5.0, 0));
        assert!(health.is_depleted());
        assert_eq!(health.health, 0.0);
        assert!(!health.damage(1.0, 10));
    }

    #[test]
    fn test_living_states() {
        assert!(EntityState::Damaged.is_alive());
        assert!(!EntityState::Dying.is_alive());
        assert!(!EntityState::Dead.is_alive());
    }
}
