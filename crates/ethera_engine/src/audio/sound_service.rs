//! Sound cache and playback
//!
//! Sounds are addressed by their file name inside the configured sound
//! directory. A sound is read and validated the first time it is requested and
//! served from the cache afterwards.

use super::backend::{create_backend, AudioBackend, SoundHandle};
use super::{AudioAsset, AudioError};
use crate::assets::Asset;
use crate::config::{AssetConfig, AudioConfig};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Loads, caches and plays sounds
pub struct SoundService {
    sound_dir: PathBuf,
    extension: String,
    sounds: HashMap<String, AudioAsset>,
    backend: Box<dyn AudioBackend>,
    volume: f32,
    played: usize,
}

impl SoundService {
    /// Create the service with the backend selected by the audio config
    pub fn new(assets: &AssetConfig, audio: &AudioConfig) -> Self {
        let mut service = Self::with_backend(
            assets.sound_dir.clone(),
            assets.sound_extension.clone(),
            create_backend(audio.enabled),
        );
        service.set_volume(audio.volume);
        service
    }

    /// Create the service over an explicit backend
    pub fn with_backend(sound_dir: PathBuf, extension: String, backend: Box<dyn AudioBackend>) -> Self {
        Self {
            sound_dir,
            extension,
            sounds: HashMap::new(),
            backend,
            volume: 1.0,
            played: 0,
        }
    }

    /// Preload every sound file in the sound directory
    ///
    /// Only regular files with the configured extension are loaded. A missing
    /// directory leaves the cache empty. Returns the number of sounds cached.
    ///
    /// # Errors
    /// Fails when the directory cannot be read or a sound file is invalid.
    pub fn init(&mut self) -> Result<usize, AudioError> {
        if !self.sound_dir.is_dir() {
            log::warn!("Sound directory {:?} does not exist, nothing preloaded", self.sound_dir);
            return Ok(0);
        }

        let mut keys = Vec::new();
        for entry in std::fs::read_dir(&self.sound_dir)? {
            let path = entry?.path();
            if path.is_dir() || !has_extension(&path, &self.extension) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                keys.push(name.to_string());
            }
        }
        keys.sort();

        for key in &keys {
            self.get_sound(key)?;
        }

        log::info!("Preloaded {} sounds from {:?}", self.sounds.len(), self.sound_dir);
        Ok(self.sounds.len())
    }

    /// Get a sound, loading it on first use
    ///
    /// # Errors
    /// Fails when the file cannot be read or is not a recognised sound format.
    pub fn get_sound(&mut self, key: &str) -> Result<&AudioAsset, AudioError> {
        cached(&mut self.sounds, &self.sound_dir, key)
    }

    /// Play a sound, loading it on first use
    ///
    /// # Errors
    /// Fails when the sound cannot be loaded or the backend refuses it.
    pub fn play_sound(&mut self, key: &str) -> Result<SoundHandle, AudioError> {
        let sound = cached(&mut self.sounds, &self.sound_dir, key)?;
        let handle = self.backend.play_sound(sound.data())?;
        self.played += 1;
        log::debug!("Playing sound {} ({:?})", key, handle);
        Ok(handle)
    }

    /// Whether a sound is cached
    pub fn is_loaded(&self, key: &str) -> bool {
        self.sounds.contains_key(key)
    }

    /// Number of cached sounds
    pub fn loaded_count(&self) -> usize {
        self.sounds.len()
    }

    /// Number of sounds handed to the backend
    pub fn played_count(&self) -> usize {
        self.played
    }

    /// Master volume
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Set the master volume, clamped to [0, 1]
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.backend.set_master_volume(self.volume);
    }

    /// Stop every playing sound
    pub fn stop_all(&mut self) {
        self.backend.stop_all();
    }

    /// Let the backend release finished sounds
    pub fn update(&mut self) {
        self.backend.update();
    }
}

fn cached<'a>(
    sounds: &'a mut HashMap<String, AudioAsset>,
    sound_dir: &Path,
    key: &str,
) -> Result<&'a AudioAsset, AudioError> {
    match sounds.entry(key.to_string()) {
        Entry::Occupied(entry) => Ok(entry.into_mut()),
        Entry::Vacant(entry) => {
            log::info!("Loading sound {}", key);
            let sound = AudioAsset::from_file(&sound_dir.join(key))?;
            Ok(entry.insert(sound))
        }
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
