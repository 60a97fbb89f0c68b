//! Rodio playback backend
//!
//! Every sound gets its own [`Sink`]; finished sinks are dropped on `update`.

use super::{AudioBackend, SoundHandle};
use crate::audio::AudioError;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::collections::HashMap;

/// Rodio-based audio backend
pub struct RodioBackend {
    _output_stream: Option<OutputStream>,
    stream_handle: Option<OutputStreamHandle>,
    active_sounds: HashMap<SoundHandle, Sink>,
    next_id: u64,
    volume: f32,
    initialized: bool,
}

impl RodioBackend {
    /// Create an uninitialized backend
    pub fn new() -> Self {
        Self {
            _output_stream: None,
            stream_handle: None,
            active_sounds: HashMap::new(),
            next_id: 0,
            volume: 1.0,
            initialized: false,
        }
    }

    fn next_handle(&mut self) -> SoundHandle {
        self.next_id += 1;
        SoundHandle::new(self.next_id)
    }
}

impl AudioBackend for RodioBackend {
    fn initialize(&mut self) -> Result<(), AudioError> {
        if self.initialized {
            return Ok(());
        }

        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| AudioError::BackendInitFailed(format!("Failed to create audio output: {}", e)))?;

        self._output_stream = Some(stream);
        self.stream_handle = Some(stream_handle);
        self.initialized = true;

        log::info!("Rodio audio backend initialized");
        Ok(())
    }

    fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }

        self.stop_all();
        self.stream_handle = None;
        self._output_stream = None;
        self.initialized = false;

        log::info!("Rodio audio backend shutdown");
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn update(&mut self) {
        self.active_sounds.retain(|_handle, sink| !sink.empty());
    }

    fn stop_all(&mut self) {
        for (_handle, sink) in self.active_sounds.drain() {
            sink.stop();
        }
    }

    fn play_sound(&mut self, data: &[u8]) -> Result<SoundHandle, AudioError> {
        let stream_handle = self.stream_handle.as_ref().ok_or(AudioError::BackendNotInitialized)?;

        let sink = Sink::try_new(stream_handle)
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to create sink: {}", e)))?;
        let source = Decoder::new(std::io::Cursor::new(data.to_vec()))
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to decode audio: {}", e)))?;

        sink.set_volume(self.volume);
        sink.append(source);

        let handle = self.next_handle();
        self.active_sounds.insert(handle, sink);
        Ok(handle)
    }

    fn set_master_volume(&mut self, volume: f32) {
        self.volume = volume;
        for sink in self.active_sounds.values() {
            sink.set_volume(volume);
        }
    }
}

impl Default for RodioBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RodioBackend {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_without_initialization() {
        let mut backend = RodioBackend::new();
        let result = backend.play_sound(&[0u8; 100]);
        assert!(matches!(result, Err(AudioError::BackendNotInitialized)));
    }

    #[test]
    fn test_double_initialization() {
        let mut backend = RodioBackend::new();

        // May fail in CI environments without an audio device
        if backend.initialize().is_ok() {
            assert!(backend.initialize().is_ok());
            backend.shutdown();
            assert!(!backend.is_initialized());
        }
    }
}
