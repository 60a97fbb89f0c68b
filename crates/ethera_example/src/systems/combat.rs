use super::center;
use crate::components::{Attack, CharacterState, EntityState, Health, Player};
use ethera_engine::prelude::*;

/// Resolves attack requests into hits
///
/// A character attacks when it asked to, is alive, is not recovering from a
/// hit and its cooldown has passed. The attack reaches `range` pixels beyond
/// the attacker's bounds and hits every living character of the other side
/// inside that area.
#[derive(Debug, Default)]
pub struct CombatSystem;

struct Strike {
    attacker: EntityId,
    by_player: bool,
    origin: Vec2,
    reach: Rect,
    damage: f32,
    knockback: f32,
}

impl CombatSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }

    fn strikes(world: &mut World, now_ms: u64) -> Result<Vec<Strike>, SystemError> {
        let mut strikes = Vec::new();

        for (id, entity) in world.with_component_mut::<Attack>() {
            let attack = entity.require_mut::<Attack>()?;
            if !std::mem::take(&mut attack.requested) {
                continue;
            }

            let state = entity.require::<CharacterState>()?.state;
            if !state.is_alive() || state == EntityState::Damaged {
                continue;
            }
            if !entity.require::<Attack>()?.is_ready(now_ms) {
                continue;
            }

            let attack = entity.require_mut::<Attack>()?;
            attack.last_attack_ms = Some(now_ms);
            let (range, damage, knockback) = (attack.range, attack.damage, attack.knockback);
            entity.require_mut::<CharacterState>()?.set(EntityState::Attacking, now_ms);

            let bounds = entity.require::<Dimension>()?.bounds(entity.require::<Position>()?);
            strikes.push(Strike {
                attacker: id,
                by_player: entity.has_component::<Player>(),
                origin: bounds.center(),
                reach: Rect::new(
                    bounds.x - range,
                    bounds.y - range,
                    bounds.width + range * 2.0,
                    bounds.height + range * 2.0,
                ),
                damage,
                knockback,
            });
        }
        Ok(strikes)
    }
}

impl LogicSystem for CombatSystem {
    fn name(&self) -> &str {
        "CombatSystem"
    }

    fn update(&mut self, world: &mut World, time: FrameTime) -> Result<(), SystemError> {
        let now_ms = time.now_ms;

        for strike in Self::strikes(world, now_ms)? {
            for (id, target) in world.with_component_mut::<Health>() {
                if id == strike.attacker || target.has_component::<Player>() == strike.by_player {
                    continue;
                }
                if !target.require::<CharacterState>()?.state.is_alive() {
                    continue;
                }

                let bounds = target.require::<Dimension>()?.bounds(target.require::<Position>()?);
                if !strike.reach.intersects(&bounds) {
                    continue;
                }

                let health = target.require_mut::<Health>()?;
                if !health.damage(strike.damage, now_ms) {
                    continue;
                }
                let (depleted, remaining) = (health.is_depleted(), health.health);
                log::debug!("{} hit, {} health left", target.name().unwrap_or("entity"), remaining);

                let away = center(target)? - strike.origin;
                let direction = if away.norm() > 0.0 { away.normalize() } else { Vec2::x() };
                let position = target.require_mut::<Position>()?;
                position.x += direction.x * strike.knockback;
                position.y += direction.y * strike.knockback;

                let next = if depleted { EntityState::Dying } else { EntityState::Damaged };
                target.require_mut::<CharacterState>()?.set(next, now_ms);
            }
        }
        Ok(())
    }
}
