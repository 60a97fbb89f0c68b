//! Top-down example game for the Ethera engine
//!
//! A start menu with a volume slider leads into a tile map where the player
//! fights enemies that chase it. The game runs headless against a
//! [`Canvas`](ethera_engine::graphics::Canvas); input comes from an optional
//! scripted sequence.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod animations;
pub mod app;
pub mod components;
pub mod config;
pub mod demo;
pub mod entities;
pub mod scenes;
pub mod systems;
pub mod world;

pub use app::ExampleApp;
pub use config::GameConfig;
