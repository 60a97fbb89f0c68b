//! Built-in components shared by engine systems and games

pub mod transform;
pub mod movement;
pub mod state;

pub use transform::{Dimension, Position};
pub use movement::Movement2D;
pub use state::State;
