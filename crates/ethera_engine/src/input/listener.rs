//! Listener traits
//!
//! Each listener kind has its own registration list on a scene. All callbacks
//! default to doing nothing, so implementors only override what they need.

use super::{FocusEvent, KeyEvent, MouseEvent, MouseWheelEvent};
use crate::ecs::World;

/// Receives keyboard events
pub trait KeyListener {
    /// A key produced a character
    fn key_typed(&mut self, _world: &mut World, _event: &KeyEvent) {}
    /// A key went down
    fn key_pressed(&mut self, _world: &mut World, _event: &KeyEvent) {}
    /// A key went up
    fn key_released(&mut self, _world: &mut World, _event: &KeyEvent) {}
}

/// Receives mouse button and window enter/exit events
pub trait MouseListener {
    /// A button was clicked
    fn mouse_clicked(&mut self, _world: &mut World, _event: &MouseEvent) {}
    /// A button went down
    fn mouse_pressed(&mut self, _world: &mut World, _event: &MouseEvent) {}
    /// A button went up
    fn mouse_released(&mut self, _world: &mut World, _event: &MouseEvent) {}
    /// The cursor entered the window
    fn mouse_entered(&mut self, _world: &mut World, _event: &MouseEvent) {}
    /// The cursor left the window
    fn mouse_exited(&mut self, _world: &mut World, _event: &MouseEvent) {}
}

/// Receives mouse wheel events
pub trait MouseWheelListener {
    /// The wheel rotated
    fn mouse_wheel_moved(&mut self, _world: &mut World, _event: &MouseWheelEvent) {}
}

/// Receives cursor motion events
pub trait MouseMotionListener {
    /// The cursor moved with a button held
    fn mouse_dragged(&mut self, _world: &mut World, _event: &MouseEvent) {}
    /// The cursor moved with no button held
    fn mouse_moved(&mut self, _world: &mut World, _event: &MouseEvent) {}
}

/// Receives window focus events
pub trait FocusListener {
    /// The window gained focus
    fn focus_gained(&mut self, _world: &mut World, _event: &FocusEvent) {}
    /// The window lost focus
    fn focus_lost(&mut self, _world: &mut World, _event: &FocusEvent) {}
}
