//! Widget entity constructors

use super::components::{
    ButtonMarker, Clickable, Cursor, Draggable, Hoverable, LabelMarker, SliderMarker, Text, TextStyle, UiElement,
    Value,
};
use crate::ecs::components::{Dimension, Position};
use crate::ecs::{EcsError, Entity};
use crate::graphics::Color;

/// The cursor entity
pub fn cursor() -> Entity {
    Entity::named("cursor")
        .with(Position::default())
        .with(Cursor::default())
}

/// A line of text
pub fn label(x: f32, y: f32, text: Text) -> Entity {
    Entity::named(format!("label {:?}", text.text))
        .with(Position::new(x, y))
        .with(text)
        .with(UiElement::default())
        .with(LabelMarker)
}

/// A clickable button
pub fn button(x: f32, y: f32, width: f32, height: f32, text: Text) -> Entity {
    Entity::named(format!("button {:?}", text.text))
        .with(Position::new(x, y))
        .with(Dimension::new(width, height))
        .with(text)
        .with(UiElement::default())
        .with(Hoverable::default())
        .with(Clickable::default())
        .with(ButtonMarker)
}

/// A horizontal slider whose value follows the dragged cursor
///
/// `max_value` defaults to the initial `value`.
pub fn slider(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: &str,
    text_size: f32,
    text_color: Color,
    text_style: TextStyle,
    value: f32,
    max_value: Option<f32>,
) -> Entity {
    Entity::named(format!("slider {:?}", text))
        .with(Position::new(x, y))
        .with(Dimension::new(width, height))
        .with(Text::new(text, text_size, text_color, text_style))
        .with(UiElement::default())
        .with(Hoverable::default())
        .with(Draggable::default())
        .with(Value::new(value, max_value.unwrap_or(value)))
        .with(SliderMarker)
}

/// X position of a slider's pin for its current value
///
/// The pin never extends past the right end of the track.
///
/// # Errors
/// Fails when the entity lacks the slider's position, dimension or value.
pub fn slider_pin_x(slider: &Entity, pin_width: f32) -> Result<f32, EcsError> {
    let position = slider.require::<Position>()?;
    let dimension = slider.require::<Dimension>()?;
    let value = slider.require::<Value<f32>>()?;

    let fraction = if value.max_value > 0.0 { value.value / value.max_value } else { 0.0 };
    let value_x = position.x + fraction * dimension.width;
    let max_x = position.x + dimension.width - pin_width;

    Ok(value_x.min(max_x).max(position.x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn volume(value: f32) -> Entity {
        slider(100.0, 50.0, 200.0, 20.0, "Volume", 14.0, Color::WHITE, TextStyle::PLAIN, value, Some(100.0))
    }

    #[test]
    fn test_max_value_defaults_to_value() {
        let entity = slider(0.0, 0.0, 10.0, 10.0, "x", 10.0, Color::WHITE, TextStyle::BOLD, 0.8, None);
        assert_eq!(*entity.component::<Value<f32>>().unwrap(), Value::new(0.8, 0.8));
        assert!(entity.has_component::<SliderMarker>());
    }

    #[test]
    fn test_pin_follows_value() {
        assert_relative_eq!(slider_pin_x(&volume(0.0), 10.0).unwrap(), 100.0);
        assert_relative_eq!(slider_pin_x(&volume(50.0), 10.0).unwrap(), 200.0);
    }

    #[test]
    fn test_pin_stays_on_track() {
        assert_relative_eq!(slider_pin_x(&volume(100.0), 10.0).unwrap(), 290.0);
    }

    #[test]
    fn test_pin_requires_slider_components() {
        let err = slider_pin_x(&label(0.0, 0.0, Text::new("x", 1.0, Color::WHITE, TextStyle::PLAIN)), 1.0);
        assert!(matches!(err, Err(EcsError::MissingComponent { component: "Dimension", .. })));
    }
}
