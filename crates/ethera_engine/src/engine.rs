//! Core engine implementation

use crate::application::Application;
use crate::assets::{AssetError, AssetManager};
use crate::audio::{AudioError, SoundService};
use crate::config::{ConfigError, EngineConfig};
use crate::foundation::time::{FrameTime, Stopwatch, Timer};
use crate::graphics::{Color, Graphics};
use crate::input::{EventQueue, InputEvent};
use crate::scene::{SceneError, SceneManager};
use thiserror::Error;

/// Main engine struct
///
/// Owns every engine service. The window toolkit (or a headless driver)
/// pushes input into [`Engine::events`] and calls [`Engine::tick`] once per
/// frame with its drawing surface.
pub struct Engine {
    /// Registered scenes and the current one
    pub scenes: SceneManager,

    /// Sound cache and playback
    pub sounds: SoundService,

    /// Asset loading and image cache
    pub assets: AssetManager,

    /// Input waiting to be dispatched on the next tick
    pub events: EventQueue,

    timer: Timer,
    config: EngineConfig,
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    ///
    /// Preloads the sound directory.
    ///
    /// # Errors
    /// Fails when a preloaded sound is invalid.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        log::info!("Initializing engine...");

        let assets = AssetManager::new(&config.assets);
        let mut sounds = SoundService::new(&config.assets, &config.audio);
        sounds.init()?;

        Ok(Self {
            scenes: SceneManager::new(),
            sounds,
            assets,
            events: EventQueue::new(),
            timer: Timer::new(),
            config,
            running: true,
        })
    }

    /// Run one frame: dispatch queued input, clear and render once, update once
    ///
    /// The engine clock advances by the configured fixed frame delta.
    ///
    /// # Errors
    /// Propagates the first scene failure.
    pub fn tick(&mut self, g: &mut dyn Graphics) -> Result<FrameTime, EngineError> {
        let delta_ms = self.config.timing.frame_delta_ms();
        self.timer.advance(delta_ms);
        let time = FrameTime::new(self.timer.total_ms(), delta_ms);

        for event in self.events.drain() {
            self.scenes.dispatch(&event);
        }

        g.clear(Color::BLACK);
        self.scenes.render(g, time)?;
        self.scenes.update(time)?;
        self.sounds.update();

        Ok(time)
    }

    /// Drive an application for at most `frames` frames
    ///
    /// Stops early when [`Engine::quit`] is called.
    ///
    /// # Errors
    /// Fails on the first engine or application error.
    pub fn run_frames<A: Application>(&mut self, app: &mut A, g: &mut dyn Graphics, frames: u64) -> Result<(), EngineError> {
        app.initialize(self)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {}", e)))?;

        log::info!("Starting main loop for {} frames...", frames);
        let stopwatch = Stopwatch::start_new();

        for _ in 0..frames {
            if !self.running {
                break;
            }
            let time = self.tick(g)?;
            app.update(self, time)
                .map_err(|e| EngineError::ApplicationError(format!("App update: {}", e)))?;
        }

        app.cleanup(self);
        self.sounds.stop_all();

        log::info!(
            "Engine stopped after {} frames ({} ms of game time in {:.1} ms)",
            self.timer.frame_count(),
            self.timer.total_ms(),
            stopwatch.elapsed_millis()
        );
        Ok(())
    }

    /// Create an engine and drive an application with it
    ///
    /// # Errors
    /// Fails when the engine cannot be created or the run fails.
    pub fn run<A: Application>(
        config: EngineConfig,
        app: &mut A,
        g: &mut dyn Graphics,
        frames: u64,
    ) -> Result<Self, EngineError> {
        let mut engine = Self::new(config)?;
        engine.run_frames(app, g, frames)?;
        Ok(engine)
    }

    /// Queue an input event for the next tick
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether the engine keeps running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Frame clock
    pub fn timer(&self) -> &Timer {
        &self.timer
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// A scene failed
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Audio system error
    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    /// Asset system error
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AppError;
    use crate::ecs::components::Position;
    use crate::graphics::Canvas;
    use crate::input::MouseEvent;
    use crate::scene::{Scene, SceneBehaviour};
    use crate::ui::Cursor;

    struct Empty;

    impl SceneBehaviour for Empty {
        fn on_initialize(&mut self, _scene: &mut Scene) -> Result<(), SceneError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingApp {
        updates: u64,
        cleaned_up: bool,
        quit_after: Option<u64>,
    }

    impl Application for CountingApp {
        fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
            engine.scenes.register(Scene::new("main", Empty))?;
            engine.scenes.switch_to("main")?;
            Ok(())
        }

        fn update(&mut self, engine: &mut Engine, _time: FrameTime) -> Result<(), AppError> {
            self.updates += 1;
            if self.quit_after == Some(self.updates) {
                engine.quit();
            }
            Ok(())
        }

        fn cleanup(&mut self, _engine: &mut Engine) {
            self.cleaned_up = true;
        }
    }

    fn config() -> EngineConfig {
        let mut config = EngineConfig::default();
        config.assets.sound_dir = "does/not/exist".into();
        config.audio.enabled = false;
        config.timing.updates_per_second = 50;
        config
    }

    #[test]
    fn test_tick_advances_fixed_clock() {
        let mut engine = Engine::new(config()).unwrap();
        let mut canvas = Canvas::new(4, 4);

        assert_eq!(engine.tick(&mut canvas).unwrap(), FrameTime::new(20, 20));
        assert_eq!(engine.tick(&mut canvas).unwrap(), FrameTime::new(40, 20));
    }

    #[test]
    fn test_queued_input_reaches_current_scene() {
        let mut engine = Engine::new(config()).unwrap();
        let mut app = CountingApp::default();
        app.initialize(&mut engine).unwrap();

        engine.push_event(InputEvent::MouseMoved(MouseEvent::at(3.0, 4.0)));
        engine.tick(&mut Canvas::new(4, 4)).unwrap();

        let world = engine.scenes.current().unwrap().world();
        let cursor = world.first_with::<Cursor>().unwrap();
        assert_eq!(world.get(cursor).unwrap().component::<Position>(), Some(&Position::new(3.0, 4.0)));
        assert!(engine.events.is_empty());
    }

    #[test]
    fn test_run_frames_stops_on_quit() {
        let mut app = CountingApp {
            quit_after: Some(3),
            ..CountingApp::default()
        };
        let engine = Engine::run(config(), &mut app, &mut Canvas::new(4, 4), 10).unwrap();

        assert_eq!(app.updates, 3);
        assert!(app.cleaned_up);
        assert_eq!(engine.timer().frame_count(), 3);
    }
}
