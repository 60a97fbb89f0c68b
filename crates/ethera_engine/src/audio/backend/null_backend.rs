use super::{AudioBackend, SoundHandle};
use crate::audio::AudioError;

/// Backend that plays nothing and counts what it was asked to play
#[derive(Debug, Default)]
pub struct NullBackend {
    initialized: bool,
    next_id: u64,
    played: Vec<usize>,
    volume: f32,
}

impl NullBackend {
    /// Create an uninitialized backend
    pub fn new() -> Self {
        Self {
            volume: 1.0,
            ..Self::default()
        }
    }

    /// Number of sounds played since creation
    pub fn played_count(&self) -> usize {
        self.played.len()
    }

    /// Byte length of every sound played, in order
    pub fn played_sizes(&self) -> &[usize] {
        &self.played
    }

    /// Last volume set
    pub fn master_volume(&self) -> f32 {
        self.volume
    }
}

impl AudioBackend for NullBackend {
    fn initialize(&mut self) -> Result<(), AudioError> {
        self.initialized = true;
        Ok(())
    }

    fn shutdown(&mut self) {
        self.initialized = false;
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn update(&mut self) {}

    fn stop_all(&mut self) {}

    fn play_sound(&mut self, data: &[u8]) -> Result<SoundHandle, AudioError> {
        if !self.initialized {
            return Err(AudioError::BackendNotInitialized);
        }
        self.next_id += 1;
        self.played.push(data.len());
        Ok(SoundHandle::new(self.next_id))
    }

    fn set_master_volume(&mut self, volume: f32) {
        self.volume = volume;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_without_initialization() {
        let mut backend = NullBackend::new();
        assert!(matches!(backend.play_sound(b"RIFF"), Err(AudioError::BackendNotInitialized)));
    }

    #[test]
    fn test_handles_are_unique() {
        let mut backend = NullBackend::new();
        backend.initialize().unwrap();

        let a = backend.play_sound(b"RIFF").unwrap();
        let b = backend.play_sound(b"RIFF....").unwrap();
        assert_ne!(a, b);
        assert_eq!(backend.played_sizes(), &[4, 8]);
    }
}
