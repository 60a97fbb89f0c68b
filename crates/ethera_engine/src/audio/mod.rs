//! Audio system
//!
//! [`SoundService`] keeps a cache of sound files keyed by file name and hands
//! their bytes to an [`AudioBackend`] for playback. The rodio backend is only
//! compiled with the `audio` feature; without it sounds are still loaded and
//! validated but played through the silent [`NullBackend`](backend::NullBackend).

pub mod asset;
pub mod backend;
pub mod sound_service;

pub use asset::{AudioAsset, AudioFormat};
pub use backend::{AudioBackend, NullBackend, SoundHandle};
pub use sound_service::SoundService;

use crate::assets::AssetError;
use thiserror::Error;

/// Audio errors
#[derive(Error, Debug)]
pub enum AudioError {
    /// Backend used before initialization
    #[error("Audio backend not initialized")]
    BackendNotInitialized,

    /// Backend initialization failed
    #[error("Audio backend initialization failed: {0}")]
    BackendInitFailed(String),

    /// Playback failed
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// Sound file could not be loaded
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// IO error while scanning the sound directory
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
