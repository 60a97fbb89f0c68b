//! # Configuration System
//!
//! Engine configuration and the file loading shared by every config struct.
//! Files ending in `.toml` are read with `toml`, files ending in `.ron` with
//! `ron`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match extension(path) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Load configuration from file, falling back to defaults when the file is missing
    fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            log::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Top-level engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default `env_logger` filter, overridden by `RUST_LOG`
    pub log_filter: String,
    /// Window settings
    pub window: WindowConfig,
    /// Update rate settings
    pub timing: TimingConfig,
    /// Asset locations
    pub assets: AssetConfig,
    /// Audio settings
    pub audio: AudioConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            window: WindowConfig::default(),
            timing: TimingConfig::default(),
            assets: AssetConfig::default(),
            audio: AudioConfig::default(),
        }
    }
}

impl Config for EngineConfig {}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Ethera Engine".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Update rate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Logic updates per second
    pub updates_per_second: u32,
}

impl TimingConfig {
    /// Fixed frame delta in milliseconds
    pub fn frame_delta_ms(&self) -> u64 {
        1_000 / u64::from(self.updates_per_second.max(1))
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { updates_per_second: 60 }
    }
}

/// Asset location configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Roots searched when resolving relative asset paths
    pub search_paths: Vec<PathBuf>,
    /// Directory preloaded by the sound service
    pub sound_dir: PathBuf,
    /// Extension of preloaded sound files
    pub sound_extension: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            search_paths: vec![PathBuf::from("assets"), PathBuf::from("resources")],
            sound_dir: PathBuf::from("assets/sounds"),
            sound_extension: "wav".to_string(),
        }
    }
}

/// Audio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Whether sounds are played at all
    pub enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_delta() {
        let timing = TimingConfig { updates_per_second: 50 };
        assert_eq!(timing.frame_delta_ms(), 20);
        assert_eq!(TimingConfig { updates_per_second: 0 }.frame_delta_ms(), 1_000);
    }

    #[test]
    fn test_toml_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");

        let mut config = EngineConfig::default();
        config.window.title = "Test".to_string();
        config.timing.updates_per_second = 30;
        config.save_to_file(&path).unwrap();

        let loaded = EngineConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.window.title, "Test");
        assert_eq!(loaded.timing.updates_per_second, 30);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.ron");
        std::fs::write(&path, "(log_filter: \"debug\")").unwrap();

        let loaded = EngineConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.log_filter, "debug");
        assert_eq!(loaded.window.width, 1280);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.json");
        std::fs::write(&path, "{}").unwrap();

        assert!(matches!(
            EngineConfig::load_from_file(&path),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = EngineConfig::load_or_default(dir.path().join("missing.toml")).unwrap();
        assert_eq!(loaded.timing.updates_per_second, 60);
    }
}
