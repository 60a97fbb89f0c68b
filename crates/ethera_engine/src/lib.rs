//! # Ethera Engine
//!
//! A small 2D game engine built around an Entity-Component-System.
//!
//! ## Features
//!
//! - **ECS Architecture**: entities are component bags, systems run once per frame in registration order
//! - **Scenes**: each scene owns its entities, systems and input listeners; one scene is current at a time
//! - **2D Graphics**: sprites and spritesheet animations drawn through the [`graphics::Graphics`] trait
//! - **UI**: cursor, labels, buttons and sliders built from components
//! - **Audio**: a preloaded sound cache with an optional rodio backend
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ethera_engine::prelude::*;
//!
//! struct Title;
//!
//! impl SceneBehaviour for Title {
//!     fn on_initialize(&mut self, scene: &mut Scene) -> Result<(), SceneError> {
//!         scene.add_entities(vec![label(10.0, 10.0, Text::new("Hello", 24.0, Color::WHITE, TextStyle::BOLD))]);
//!         Ok(())
//!     }
//! }
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         engine.scenes.register(Scene::new("title", Title))?;
//!         engine.scenes.switch_to("title")?;
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut canvas = Canvas::new(640, 480);
//!     Engine::run(EngineConfig::default(), &mut MyApp, &mut canvas, 60)?;
//!     canvas.save("title.png")?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod ecs;
pub mod input;
pub mod graphics;
pub mod ui;
pub mod assets;
pub mod audio;
pub mod scene;

mod application;
mod engine;

pub use application::{AppError, Application};
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{Asset, AssetError, AssetManager},
        audio::{AudioError, SoundService},
        config::{Config, ConfigError, EngineConfig},
        ecs::{
            components::{Dimension, Movement2D, Position, State},
            Component, EcsError, Entity, EntityId, LogicSystem, RenderingSystem, SystemError, SystemId, World,
        },
        foundation::{
            math::{Rect, Vec2},
            time::{FrameTime, Stopwatch, Timer},
        },
        graphics::{Animation2D, Animations2D, Canvas, Color, Graphics, Sprite2D, Spritesheet2D},
        input::{
            EventQueue, FocusListener, InputEvent, KeyCode, KeyEvent, KeyListener, Modifiers, MouseButton,
            MouseEvent, MouseListener, MouseMotionListener, MouseWheelListener,
        },
        scene::{ListenerId, Scene, SceneBehaviour, SceneError, SceneManager},
        ui::{
            button, label, slider, slider_pin_x, Clickable, Draggable, Hoverable, Text, TextStyle, UiElement, Value,
        },
        AppError, Application, Engine, EngineError,
    };
}
