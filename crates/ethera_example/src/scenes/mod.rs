//! The two scenes of the example: a start menu and the game itself

pub mod menu;
pub mod game;

pub use game::{GameScene, GAME_SCENE};
pub use menu::{MenuLayout, MenuScene, MENU_SCENE};
