//! The example application

use crate::animations::character_animations;
use crate::config::GameConfig;
use crate::demo::DemoInput;
use crate::scenes::{menu, GameScene, MenuLayout, MenuScene, GAME_SCENE, MENU_SCENE};
use crate::world::ExampleWorld;
use ethera_engine::prelude::*;

// Slider movements smaller than this are not worth a volume change
const VOLUME_EPSILON: f32 = 0.005;

/// Registers the menu and game scenes and wires the menu to the sound service
pub struct ExampleApp {
    config: GameConfig,
    demo: Option<DemoInput>,
    current: Option<String>,
}

impl ExampleApp {
    /// Create the application
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            demo: None,
            current: None,
        }
    }

    fn sync_volume(engine: &mut Engine) {
        let Some(volume) = engine.scenes.scene(MENU_SCENE).and_then(|scene| menu::selected_volume(scene.world())) else {
            return;
        };
        if (volume - engine.sounds.volume()).abs() > VOLUME_EPSILON {
            log::debug!("Volume set to {:.2}", volume);
            engine.sounds.set_volume(volume);
        }
    }

    fn on_scene_change(&mut self, engine: &mut Engine) {
        let current = engine.scenes.current_name().map(str::to_string);
        if current == self.current {
            return;
        }

        if current.as_deref() == Some(GAME_SCENE) && engine.sounds.is_loaded(&self.config.start_sound) {
            if let Err(e) = engine.sounds.play_sound(&self.config.start_sound) {
                log::warn!("Could not play {}: {}", self.config.start_sound, e);
            }
        }
        self.current = current;
    }
}

impl Application for ExampleApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let window = &engine.config().window;
        let (width, height) = (window.width, window.height);
        let layout = MenuLayout::new(width, height);

        let animations = character_animations(&mut engine.assets)?;
        let map = ExampleWorld::new(&mut engine.assets, width, height)?;

        engine
            .scenes
            .register(Scene::new(MENU_SCENE, MenuScene::new(layout, engine.sounds.volume())))?;
        engine
            .scenes
            .register(Scene::new(GAME_SCENE, GameScene::new(self.config.clone(), map, animations)))?;
        engine.scenes.switch_to(MENU_SCENE)?;
        self.current = Some(MENU_SCENE.to_string());

        if self.config.demo_input {
            log::info!("Playing scripted input");
            self.demo = Some(DemoInput::new(layout));
        }
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, _time: FrameTime) -> Result<(), AppError> {
        if let Some(demo) = &mut self.demo {
            for event in demo.poll() {
                engine.push_event(event);
            }
        }

        Self::sync_volume(engine);
        self.on_scene_change(engine);
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        log::info!(
            "Example finished in scene {:?} after {} sounds",
            engine.scenes.current_name(),
            engine.sounds.played_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Player;
    use approx::assert_relative_eq;

    const WAV: &[u8] = b"RIFF\x24\x00\x00\x00WAVEfmt ";

    fn engine(dir: &tempfile::TempDir) -> Engine {
        let sounds = dir.path().join("sounds");
        std::fs::create_dir_all(&sounds).unwrap();
        std::fs::write(sounds.join("start.wav"), WAV).unwrap();

        let mut config = EngineConfig::default();
        config.window.width = 800;
        config.window.height = 600;
        config.assets.search_paths = vec![dir.path().to_path_buf()];
        config.assets.sound_dir = sounds;
        config.audio.enabled = false;
        Engine::new(config).unwrap()
    }

    #[test]
    fn test_demo_reaches_game_and_plays_start_sound() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = engine(&dir);
        let mut app = ExampleApp::new(GameConfig::default());
        let mut canvas = Canvas::new(800, 600);

        engine.run_frames(&mut app, &mut canvas, 60).unwrap();

        assert_eq!(engine.scenes.current_name(), Some(GAME_SCENE));
        assert_eq!(engine.sounds.played_count(), 1);
        assert_relative_eq!(engine.sounds.volume(), 0.7, epsilon = 0.01);
        assert!(engine.scenes.current().unwrap().world().first_with::<Player>().is_some());
    }

    #[test]
    fn test_without_demo_menu_stays() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = engine(&dir);
        let config = GameConfig {
            demo_input: false,
            ..GameConfig::default()
        };
        let mut canvas = Canvas::new(800, 600);

        engine.run_frames(&mut ExampleApp::new(config), &mut canvas, 30).unwrap();

        assert_eq!(engine.scenes.current_name(), Some(MENU_SCENE));
        assert_eq!(engine.sounds.played_count(), 0);
        assert!(canvas.texts().iter().any(|text| text.text == "Play"));
    }
}
