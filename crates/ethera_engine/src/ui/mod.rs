//! UI elements built from plain components
//!
//! Widgets are ordinary entities: a marker component says what they are and
//! shared components ([`Hoverable`], [`Clickable`], [`Draggable`], [`Value`])
//! carry their state. The cursor is an entity too, moved by [`CursorListener`]
//! and read by [`UiEventSystem`].

pub mod components;
pub mod widgets;
pub mod cursor;
pub mod systems;

pub use components::{
    ButtonMarker, Clickable, Cursor, Draggable, Hoverable, LabelMarker, SliderMarker, Text, TextStyle, UiElement,
    Value,
};
pub use cursor::CursorListener;
pub use systems::{UiEventSystem, UiRenderingSystem, UiSliderValueSystem};
pub use widgets::{button, cursor, label, slider, slider_pin_x};
