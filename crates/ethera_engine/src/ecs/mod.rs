//! Entity-Component-System implementation
//!
//! Entities are component bags stored in a per-scene [`World`] arena.
//! Systems are plain trait objects run once per frame in registration order.

pub mod world;
pub mod entity;
pub mod component;
pub mod system;
pub mod components;

pub use world::World;
pub use entity::{Entity, EntityId};
pub use component::Component;
pub use system::{LogicSystem, RenderingSystem, SystemError, SystemId};

use thiserror::Error;

/// ECS errors
#[derive(Error, Debug)]
pub enum EcsError {
    /// An entity is missing a component that was expected to be present
    #[error("entity {entity} has no {component} component")]
    MissingComponent {
        /// Entity label
        entity: String,
        /// Component type name
        component: &'static str,
    },

    /// The entity id is stale or unknown
    #[error("no such entity {0:?}")]
    NoSuchEntity(EntityId),
}
