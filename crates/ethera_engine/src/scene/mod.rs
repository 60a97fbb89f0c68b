//! Scenes and scene switching
//!
//! A [`Scene`] owns its entities, systems and input listeners. The
//! [`SceneManager`] keeps every registered scene and forwards update, render
//! and input calls to the current one.

mod registry;
pub mod scene;
pub mod manager;

pub use manager::SceneManager;
pub use scene::{ListenerId, Scene, SceneBehaviour};

use crate::ecs::SystemError;
use thiserror::Error;

/// Scene errors
#[derive(Error, Debug)]
pub enum SceneError {
    /// No scene is registered under that name
    #[error("unknown scene {0}")]
    UnknownScene(String),

    /// A scene with that name is already registered
    #[error("scene {0} is already registered")]
    DuplicateScene(String),

    /// A system of the scene failed
    #[error("system {system} failed: {source}")]
    System {
        /// Name of the failing system
        system: String,
        /// Underlying error
        #[source]
        source: SystemError,
    },

    /// A scene hook failed
    #[error("{0}")]
    Failed(String),
}
