//! Audio backend implementations
//!
//! Platform-independent abstraction over audio playback libraries.

mod null_backend;
#[cfg(feature = "audio")]
pub mod rodio_backend;

pub use null_backend::NullBackend;

use crate::audio::AudioError;

/// Handle to a sound started by a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle {
    /// Backend-assigned id
    pub id: u64,
}

impl SoundHandle {
    /// Create a handle
    pub const fn new(id: u64) -> Self {
        Self { id }
    }
}

/// Audio backend trait for platform abstraction
///
/// Backends are single-threaded and driven from the engine loop.
pub trait AudioBackend {
    /// Initialize the audio backend
    fn initialize(&mut self) -> Result<(), AudioError>;

    /// Shutdown the audio backend
    fn shutdown(&mut self);

    /// Check if backend is initialized
    fn is_initialized(&self) -> bool;

    /// Drop finished sounds
    fn update(&mut self);

    /// Stop all playing sounds
    fn stop_all(&mut self);

    /// Play encoded sound bytes
    fn play_sound(&mut self, data: &[u8]) -> Result<SoundHandle, AudioError>;

    /// Volume applied to every new sound (0.0 = silent, 1.0 = full volume)
    fn set_master_volume(&mut self, volume: f32);
}

/// Create the playback backend for this build
///
/// With the `audio` feature this is rodio, falling back to the silent backend
/// when no output device can be opened. Without it, always the silent backend.
pub fn create_backend(enabled: bool) -> Box<dyn AudioBackend> {
    if enabled {
        #[cfg(feature = "audio")]
        {
            let mut backend = rodio_backend::RodioBackend::new();
            match backend.initialize() {
                Ok(()) => return Box::new(backend),
                Err(e) => log::warn!("Falling back to silent audio: {}", e),
            }
        }
        #[cfg(not(feature = "audio"))]
        log::info!("Built without the audio feature, sounds will be silent");
    }

    let mut backend = NullBackend::new();
    if let Err(e) = backend.initialize() {
        log::warn!("Silent audio backend failed to initialize: {}", e);
    }
    Box::new(backend)
}
