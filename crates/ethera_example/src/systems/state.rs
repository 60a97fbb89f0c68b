use crate::components::{Attack, CharacterState, EntityState, Facing};
use ethera_engine::prelude::*;

/// Time a hit character is stunned before it can act again
pub const DAMAGE_RECOVERY_MS: u64 = 400;

const DEFAULT_ATTACK_MS: u64 = 400;

/// Advances character states over time and from movement
///
/// Attacks last as long as the attack cooldown and hits stun for
/// [`DAMAGE_RECOVERY_MS`]; both return to idle. Idle and walking follow
/// whether the character moves, and the facing follows its horizontal
/// direction.
#[derive(Debug, Default)]
pub struct EntityStateSystem;

impl EntityStateSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }
}

impl LogicSystem for EntityStateSystem {
    fn name(&self) -> &str {
        "EntityStateSystem"
    }

    fn update(&mut self, world: &mut World, time: FrameTime) -> Result<(), SystemError> {
        let now_ms = time.now_ms;

        for (_, entity) in world.with_component_mut::<CharacterState>() {
            let movement = entity.component::<Movement2D>().copied().unwrap_or_default();
            let attack_ms = entity.component::<Attack>().map_or(DEFAULT_ATTACK_MS, |a| a.cooldown_ms);
            let state = entity.require_mut::<CharacterState>()?;

            let current = state.state;
            match current {
                EntityState::Attacking if state.elapsed_ms(now_ms) >= attack_ms => {
                    state.set(EntityState::Idle, now_ms);
                }
                EntityState::Damaged if state.elapsed_ms(now_ms) >= DAMAGE_RECOVERY_MS => {
                    state.set(EntityState::Idle, now_ms);
                }
                EntityState::Idle | EntityState::Walking => {
                    let next = if movement.is_moving() { EntityState::Walking } else { EntityState::Idle };
                    state.set(next, now_ms);
                }
                _ => {}
            }

            if !state.state.is_alive() {
                continue;
            }
            if let Some(facing) = entity.component_mut::<Facing>() {
                if movement.vx < 0.0 {
                    *facing = Facing::Left;
                } else if movement.vx > 0.0 {
                    *facing = Facing::Right;
                }
            }
        }
        Ok(())
    }
}
