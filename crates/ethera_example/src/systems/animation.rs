use crate::animations::AnimationKind;
use crate::components::{CharacterState, Facing};
use ethera_engine::prelude::*;

/// Picks the animation matching each character's state and facing
#[derive(Debug, Default)]
pub struct EntityAnimationSystem;

impl EntityAnimationSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }
}

impl LogicSystem for EntityAnimationSystem {
    fn name(&self) -> &str {
        "EntityAnimationSystem"
    }

    fn update(&mut self, world: &mut World, time: FrameTime) -> Result<(), SystemError> {
        for (_, entity) in world.with_component_mut::<Animations2D>() {
            let Some(state) = entity.component::<CharacterState>().map(|s| s.state) else {
                continue;
            };
            let facing = entity.component::<Facing>().copied().unwrap_or_default();
            let name = AnimationKind::for_state(state).name(facing);

            let animations = entity.require_mut::<Animations2D>()?;
            if animations.contains(name) {
                animations.set_current(name, time.now_ms);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::EntityState;
    use image::RgbaImage;
    use std::sync::Arc;

    fn animations() -> Animations2D {
        let sheet = Spritesheet2D::strip(Arc::new(RgbaImage::new(20, 10)), 10, 10).unwrap();
        let named = ["idle-left", "walk-right", "die-right"]
            .map(|name| (name.to_string(), Animation2D::new(sheet.clone(), 100, name != "die-right")));
        Animations2D::new("idle-left", named, 10.0, 10.0)
    }

    #[test]
    fn test_state_and_facing_select_animation() {
        let mut world = World::new();
        let id = world.spawn(
            Entity::new()
                .with(CharacterState::new(EntityState::Walking))
                .with(Facing::Right)
                .with(animations()),
        );
        let mut system = EntityAnimationSystem::new();

        system.update(&mut world, FrameTime::new(500, 16)).unwrap();
        let current = world.get(id).unwrap().component::<Animations2D>().unwrap();
        assert_eq!(current.current(), "walk-right");
        assert_eq!(current.elapsed_ms(600), 100);

        world.get_mut(id).unwrap().component_mut::<CharacterState>().unwrap().state = EntityState::Dying;
        system.update(&mut world, FrameTime::new(700, 16)).unwrap();
        let current = world.get(id).unwrap().component::<Animations2D>().unwrap();
        assert_eq!(current.current(), "die-right");
        assert!(!current.is_current_finished(800));
        assert!(current.is_current_finished(900));
    }

    #[test]
    fn test_missing_animation_keeps_current() {
        let mut world = World::new();
        let id = world.spawn(
            Entity::new()
                .with(CharacterState::new(EntityState::Attacking))
                .with(animations()),
        );

        EntityAnimationSystem::new().update(&mut world, FrameTime::new(0, 16)).unwrap();
        assert_eq!(world.get(id).unwrap().component::<Animations2D>().unwrap().current(), "idle-left");
    }
}
