use crate::components::CharacterState;
use ethera_engine::foundation::math::utils::clamp;
use ethera_engine::prelude::*;

/// Moves living characters by their direction and speed
///
/// Characters that are dying, despawning or dead stay where they are. With
/// bounds set, characters are kept fully inside them.
#[derive(Debug, Default)]
pub struct EntityPositionMovementSystem {
    bounds: Option<Rect>,
}

impl EntityPositionMovementSystem {
    /// Movement without bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Movement clamped to `bounds`
    pub fn with_bounds(bounds: Rect) -> Self {
        Self { bounds: Some(bounds) }
    }
}

impl LogicSystem for EntityPositionMovementSystem {
    fn name(&self) -> &str {
        "EntityPositionMovementSystem"
    }

    fn update(&mut self, world: &mut World, time: FrameTime) -> Result<(), SystemError> {
        let delta_seconds = time.delta_seconds();

        for (_, entity) in world.with_component_mut::<CharacterState>() {
            if !entity.has_component::<Position>() || !entity.has_component::<Movement2D>() {
                continue;
            }
            if !entity.require::<CharacterState>()?.state.is_alive() {
                continue;
            }

            let movement = *entity.require::<Movement2D>()?;
            let size = entity.component::<Dimension>().copied().unwrap_or_default();
            let position = entity.require_mut::<Position>()?;

            position.y += movement.vy * movement.speed * delta_seconds;
            position.x += movement.vx * movement.speed * delta_seconds;

            if let Some(bounds) = self.bounds {
                position.x = clamp(position.x, bounds.x, bounds.right() - size.width);
                position.y = clamp(position.y, bounds.y, bounds.bottom() - size.height);
            }
        }
        Ok(())
    }
}
