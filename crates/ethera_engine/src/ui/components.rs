//! UI components

use crate::ecs::Component;
use crate::graphics::Color;
use bitflags::bitflags;

/// The mouse cursor; its entity also carries a `Position`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Whether a mouse button is held
    pub pressed: bool,
    /// A press arrived since the UI last consumed input
    pub just_pressed: bool,
    /// A release arrived since the UI last consumed input
    pub just_released: bool,
}

impl Component for Cursor {}

/// Common state of every UI element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiElement {
    /// Hidden elements are neither drawn nor interactive
    pub visible: bool,
    /// Draw order, lower first
    pub z: i32,
}

impl Default for UiElement {
    fn default() -> Self {
        Self { visible: true, z: 0 }
    }
}

impl Component for UiElement {}

bitflags! {
    /// Font style flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextStyle: u8 {
        /// Bold
        const BOLD = 1 << 0;
        /// Italic
        const ITALIC = 1 << 1;
    }
}

impl TextStyle {
    /// Neither bold nor italic
    pub const PLAIN: Self = Self::empty();
}

/// Text shown by an element
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// The text
    pub text: String,
    /// Font size in pixels
    pub size: f32,
    /// Color
    pub color: Color,
    /// Style
    pub style: TextStyle,
}

impl Component for Text {}

impl Text {
    /// Create a text component
    pub fn new(text: impl Into<String>, size: f32, color: Color, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            size,
            color,
            style,
        }
    }
}

/// Element that follows the cursor while a button is held over it
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Draggable {
    /// Whether the element is being dragged
    pub is_dragging: bool,
    /// Cursor x while dragging
    pub to_x: f32,
    /// Cursor y while dragging
    pub to_y: f32,
}

impl Component for Draggable {}

/// Value held by an input element
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Value<T> {
    /// Current value
    pub value: T,
    /// Upper bound
    pub max_value: T,
}

impl<T: 'static> Component for Value<T> {}

impl<T> Value<T> {
    /// Create a value
    pub const fn new(value: T, max_value: T) -> Self {
        Self { value, max_value }
    }
}

/// Tracks whether the cursor is over the element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hoverable {
    /// Cursor is inside the element's bounds
    pub hovered: bool,
}

impl Component for Hoverable {}

/// Press and click state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clickable {
    /// A press started over the element and has not been released
    pub pressed: bool,
    /// Set for one update after a press is released over the element
    pub clicked: bool,
}

impl Component for Clickable {}

/// Marks a slider
#[derive(Debug, Clone, Copy, Default)]
pub struct SliderMarker;

impl Component for SliderMarker {}

/// Marks a button
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonMarker;

impl Component for ButtonMarker {}

/// Marks a text label
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelMarker;

impl Component for LabelMarker {}
