//! Input event types

use super::{KeyCode, Modifiers, MouseButton};

/// Keyboard event
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// Key that changed
    pub key: KeyCode,
    /// Character produced by the key, for typed events
    pub character: Option<char>,
    /// Modifiers held at the time of the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event without modifiers
    pub fn new(key: KeyCode) -> Self {
        Self {
            key,
            character: None,
            modifiers: Modifiers::empty(),
        }
    }

    /// Attach the typed character
    #[must_use]
    pub fn with_char(mut self, character: char) -> Self {
        self.character = Some(character);
        self
    }

    /// Attach modifiers
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Mouse button or motion event, in window coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    /// Cursor x
    pub x: f32,
    /// Cursor y
    pub y: f32,
    /// Button involved, if any
    pub button: Option<MouseButton>,
    /// Number of consecutive clicks
    pub click_count: u32,
    /// Modifiers held at the time of the event
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// Create a motion event at a position
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            button: None,
            click_count: 0,
            modifiers: Modifiers::empty(),
        }
    }

    /// Attach a button
    #[must_use]
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = Some(button);
        self.click_count = self.click_count.max(1);
        self
    }
}

/// Mouse wheel event
#[derive(Debug, Clone, PartialEq)]
pub struct MouseWheelEvent {
    /// Cursor x
    pub x: f32,
    /// Cursor y
    pub y: f32,
    /// Wheel rotation in notches, negative is away from the user
    pub rotation: f32,
}

/// Window focus event
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FocusEvent {
    /// Whether the focus change is temporary
    pub temporary: bool,
}

/// Any input event the engine can dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key produced a character
    KeyTyped(KeyEvent),
    /// A key went down
    KeyPressed(KeyEvent),
    /// A key went up
    KeyReleased(KeyEvent),
    /// A button was pressed and released without moving
    MouseClicked(MouseEvent),
    /// A button went down
    MousePressed(MouseEvent),
    /// A button went up
    MouseReleased(MouseEvent),
    /// The cursor entered the window
    MouseEntered(MouseEvent),
    /// The cursor left the window
    MouseExited(MouseEvent),
    /// The wheel rotated
    MouseWheelMoved(MouseWheelEvent),
    /// The cursor moved with a button held
    MouseDragged(MouseEvent),
    /// The cursor moved with no button held
    MouseMoved(MouseEvent),
    /// The window gained focus
    FocusGained(FocusEvent),
    /// The window lost focus
    FocusLost(FocusEvent),
}
