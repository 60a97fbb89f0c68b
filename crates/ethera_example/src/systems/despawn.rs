use crate::animations::AnimationKind;
use crate::components::{CharacterState, EntityState, Facing, Player};
use ethera_engine::prelude::*;

/// Ends dying characters once their death animation has played
///
/// Enemies are removed from the world; players stay as [`EntityState::Dead`].
#[derive(Debug, Default)]
pub struct DespawnSystem;

impl DespawnSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }
}

fn death_finished(entity: &Entity, now_ms: u64) -> bool {
    let Some(animations) = entity.component::<Animations2D>() else {
        return true;
    };
    let facing = entity.component::<Facing>().copied().unwrap_or_default();
    let dying = AnimationKind::Die.name(facing);

    if !animations.contains(dying) {
        return true;
    }
    animations.current() == dying && animations.is_current_finished(now_ms)
}

impl LogicSystem for DespawnSystem {
    fn name(&self) -> &str {
        "DespawnSystem"
    }

    fn update(&mut self, world: &mut World, time: FrameTime) -> Result<(), SystemError> {
        let now_ms = time.now_ms;
        let mut removed = Vec::new();

        for (id, entity) in world.with_component_mut::<CharacterState>() {
            let state = entity.require::<CharacterState>()?.state;
            match state {
                EntityState::Dying if death_finished(entity, now_ms) => {
                    let next = if entity.has_component::<Player>() {
                        EntityState::Dead
                    } else {
                        EntityState::Despawn
                    };
                    entity.require_mut::<CharacterState>()?.set(next, now_ms);
                }
                EntityState::Despawn => removed.push(id),
                _ => {}
            }
        }

        for id in removed {
            if let Some(entity) = world.despawn(id) {
                log::debug!("Despawned {}", entity.name().unwrap_or("entity"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Enemy;
    use image::RgbaImage;
    use std::sync::Arc;

    fn dying(now_ms: u64) -> Entity {
        let sheet = Spritesheet2D::strip(Arc::new(RgbaImage::new(30, 10)), 10, 10).unwrap();
        let mut animations = Animations2D::new(
            "die-left",
            [("die-left".to_string(), Animation2D::new(sheet, 100, false))],
            10.0,
            10.0,
        );
        animations.set_current("die-left", now_ms);

        Entity::new()
            .with(CharacterState { state: EntityState::Dying, since_ms: now_ms })
            .with(animations)
    }

    fn state(world: &World, id: EntityId) -> EntityState {
        world.get(id).unwrap().component::<CharacterState>().unwrap().state
    }

    #[test]
    fn test_enemy_is_removed_after_death_animation() {
        let mut world = World::new();
        let enemy = world.spawn(dying(0).with(Enemy));
        let mut system = DespawnSystem::new();

        system.update(&mut world, FrameTime::new(299, 16)).unwrap();
        assert_eq!(state(&world, enemy), EntityState::Dying);

        system.update(&mut world, FrameTime::new(300, 16)).unwrap();
        assert_eq!(state(&world, enemy), EntityState::Despawn);

        system.update(&mut world, FrameTime::new(316, 16)).unwrap();
        assert!(!world.contains(enemy));
    }

    #[test]
    fn test_player_stays_dead() {
        let mut world = World::new();
        let player = world.spawn(dying(0).with(Player));
        let mut system = DespawnSystem::new();

        system.update(&mut world, FrameTime::new(300, 16)).unwrap();
        system.update(&mut world, FrameTime::new(316, 16)).unwrap();

        assert_eq!(state(&world, player), EntityState::Dead);
    }
}
