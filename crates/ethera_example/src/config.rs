//! Game configuration

use ethera_engine::config::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of enemies spawned when a game starts
    pub enemy_count: u32,
    /// Seed for world and enemy placement
    pub seed: u64,
    /// Frames to run before exiting
    pub frames: u64,
    /// Where the last frame is written
    pub screenshot: PathBuf,
    /// Sound played when a game starts, relative to the sound directory
    pub start_sound: String,
    /// Feed a scripted click and key sequence into the engine
    pub demo_input: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            enemy_count: 3,
            seed: 42,
            frames: 600,
            screenshot: PathBuf::from("ethera_example.png"),
            start_sound: "start.wav".to_string(),
            demo_input: true,
        }
    }
}

impl Config for GameConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        std::fs::write(&path, "enemy_count = 7\n").unwrap();

        let config = GameConfig::load_from_file(&path).unwrap();
        assert_eq!(config.enemy_count, 7);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_shipped_config_parses() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/game.toml");
        let config = GameConfig::load_from_file(path).unwrap();
        assert_eq!(config.start_sound, "start.wav");
        assert!(config.demo_input);
    }
}
