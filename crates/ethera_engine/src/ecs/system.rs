//! System traits
//!
//! Systems are invoked once per frame, sequentially, in the order they were
//! registered with their scene.

use super::{EcsError, World};
use crate::foundation::time::FrameTime;
use crate::graphics::Graphics;
use thiserror::Error;

slotmap::new_key_type! {
    /// Handle to a registered system, used to unregister it
    pub struct SystemId;
}

/// System that mutates components once per update tick
pub trait LogicSystem {
    /// Name used in logs and errors
    fn name(&self) -> &str;

    /// Run the system over the scene's entities
    fn update(&mut self, world: &mut World, time: FrameTime) -> Result<(), SystemError>;
}

/// System that reads components to draw them once per render tick
pub trait RenderingSystem {
    /// Name used in logs and errors
    fn name(&self) -> &str;

    /// Draw the scene's entities
    fn render(&mut self, world: &World, g: &mut dyn Graphics, time: FrameTime) -> Result<(), SystemError>;
}

/// Errors raised by systems
#[derive(Error, Debug)]
pub enum SystemError {
    /// An entity lacked a component the system relies on
    #[error(transparent)]
    Ecs(#[from] EcsError),

    /// Any other failure
    #[error("{0}")]
    Failed(String),
}
