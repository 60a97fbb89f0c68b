//! Game systems and input listeners
//!
//! Registered by the game scene in this order: movement, AI, combat, state,
//! animation, despawn.

pub mod movement;
pub mod control;
pub mod ai;
pub mod combat;
pub mod state;
pub mod animation;
pub mod despawn;

pub use ai::EnemyAiSystem;
pub use animation::EntityAnimationSystem;
pub use combat::CombatSystem;
pub use control::PlayerControlListener;
pub use despawn::DespawnSystem;
pub use movement::EntityPositionMovementSystem;
pub use state::EntityStateSystem;

use ethera_engine::prelude::*;

/// Centre of an entity's body
pub(crate) fn center(entity: &Entity) -> Result<Vec2, EcsError> {
    let position = entity.require::<Position>()?;
    let dimension = entity.require::<Dimension>()?;
    Ok(dimension.bounds(position).center())
}
