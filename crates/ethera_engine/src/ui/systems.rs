//! Default UI systems

use super::components::{
    ButtonMarker, Clickable, Cursor, Draggable, Hoverable, LabelMarker, SliderMarker, Text, UiElement, Value,
};
use super::widgets::slider_pin_x;
use crate::ecs::components::{Dimension, Position};
use crate::ecs::{Entity, LogicSystem, RenderingSystem, SystemError, World};
use crate::foundation::math::Rect;
use crate::foundation::time::FrameTime;
use crate::graphics::{Color, Graphics};

/// Updates hover, click and drag state from the cursor entity
///
/// Press and release edges come from the latches [`CursorListener`] sets on
/// [`Cursor`], so a press and release dispatched in the same frame still
/// produce a click. Changes of [`Cursor::pressed`] between two updates count
/// as edges too.
///
/// [`CursorListener`]: super::CursorListener
#[derive(Debug, Default)]
pub struct UiEventSystem {
    was_pressed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Press,
    Release,
}

/// Edges since the last update, in the order they happened
fn edges(cursor: &Cursor, was_pressed: bool) -> Vec<Edge> {
    let press = cursor.just_pressed || (cursor.pressed && !was_pressed);
    let release = cursor.just_released || (!cursor.pressed && was_pressed);

    match (press, release) {
        // Still held after both edges, so the release came first
        (true, true) if cursor.pressed => vec![Edge::Release, Edge::Press],
        (true, true) => vec![Edge::Press, Edge::Release],
        (true, false) => vec![Edge::Press],
        (false, true) => vec![Edge::Release],
        (false, false) => Vec::new(),
    }
}

impl UiEventSystem {
    fn apply(entity: &mut Entity, over: bool, at: Position, edges: &[Edge], was_pressed: bool) {
        if let Some(hoverable) = entity.component_mut::<Hoverable>() {
            hoverable.hovered = over;
        }

        if let Some(clickable) = entity.component_mut::<Clickable>() {
            clickable.clicked = false;
            for edge in edges {
                match edge {
                    Edge::Press => clickable.pressed = over,
                    Edge::Release => {
                        clickable.clicked = clickable.pressed && over;
                        clickable.pressed = false;
                    }
                }
            }
        }

        if let Some(draggable) = entity.component_mut::<Draggable>() {
            // A drag started and released in the previous frame ends now
            if !was_pressed {
                draggable.is_dragging = false;
            }
            let mut pressed_now = false;
            for edge in edges {
                match edge {
                    Edge::Press if over => {
                        draggable.is_dragging = true;
                        pressed_now = true;
                    }
                    Edge::Press => {}
                    Edge::Release if !pressed_now => draggable.is_dragging = false,
                    Edge::Release => {}
                }
            }
            if draggable.is_dragging {
                draggable.to_x = at.x;
                draggable.to_y = at.y;
            }
        }
    }
}

impl LogicSystem for UiEventSystem {
    fn name(&self) -> &str {
        "UiEventSystem"
    }

    fn update(&mut self, world: &mut World, _time: FrameTime) -> Result<(), SystemError> {
        let Some(cursor_id) = world.first_with::<Cursor>() else {
            return Ok(());
        };
        let entity = world.require_mut(cursor_id)?;
        let at = *entity.require::<Position>()?;
        let cursor = entity.require_mut::<Cursor>()?;
        let edges = edges(cursor, self.was_pressed);
        let pressed = cursor.pressed;
        cursor.just_pressed = false;
        cursor.just_released = false;

        let was_pressed = self.was_pressed;
        self.was_pressed = pressed;

        for (_, entity) in world.with_component_mut::<UiElement>() {
            let visible = entity.require::<UiElement>()?.visible;
            let Some(dimension) = entity.component::<Dimension>().copied() else {
                continue;
            };
            let over = visible && dimension.bounds(entity.require::<Position>()?).contains(at.x, at.y);
            Self::apply(entity, over, at, &edges, was_pressed);
        }
        Ok(())
    }
}

/// Sets the value of every dragged slider from the cursor's distance along the track
#[derive(Debug, Default)]
pub struct UiSliderValueSystem;

impl LogicSystem for UiSliderValueSystem {
    fn name(&self) -> &str {
        "UiSliderValueSystem"
    }

    fn update(&mut self, world: &mut World, _time: FrameTime) -> Result<(), SystemError> {
        for (_, entity) in world.with_component_mut::<SliderMarker>() {
            let position = *entity.require::<Position>()?;
            let dimension = *entity.require::<Dimension>()?;
            let draggable = *entity.require::<Draggable>()?;
            let value = entity.require_mut::<Value<f32>>()?;

            if draggable.is_dragging {
                value.value = slider_value(draggable.to_x - position.x, dimension.width, value.max_value);
            }
        }
        Ok(())
    }
}

/// Value for a cursor `dragged` pixels from the start of a `width` pixel track
fn slider_value(dragged: f32, width: f32, max_value: f32) -> f32 {
    if width <= 0.0 {
        return 0.0;
    }
    (dragged / width * max_value).clamp(0.0, max_value.max(0.0))
}

const BUTTON_COLOR: Color = Color::rgb(77, 77, 77);
const BUTTON_HOVER_COLOR: Color = Color::rgb(102, 102, 128);
const BUTTON_PRESSED_COLOR: Color = Color::rgb(128, 128, 153);
const BORDER_COLOR: Color = Color::rgb(153, 153, 153);
const TRACK_HEIGHT: f32 = 4.0;
// Rough advance of one glyph relative to the font size
const GLYPH_WIDTH: f32 = 0.5;

/// Draws buttons, sliders and labels in z order
#[derive(Debug, Default)]
pub struct UiRenderingSystem;

impl UiRenderingSystem {
    fn draw_button(entity: &Entity, g: &mut dyn Graphics) -> Result<(), SystemError> {
        let position = entity.require::<Position>()?;
        let bounds = entity.require::<Dimension>()?.bounds(position);
        let pressed = entity.component::<Clickable>().is_some_and(|c| c.pressed);
        let hovered = entity.component::<Hoverable>().is_some_and(|h| h.hovered);

        let fill = match (pressed, hovered) {
            (true, _) => BUTTON_PRESSED_COLOR,
            (false, true) => BUTTON_HOVER_COLOR,
            (false, false) => BUTTON_COLOR,
        };
        g.fill_rect(bounds, fill);
        g.draw_rect(bounds, BORDER_COLOR);

        if let Some(text) = entity.component::<Text>() {
            let center = bounds.center();
            let width = text.text.chars().count() as f32 * text.size * GLYPH_WIDTH;
            g.draw_text(&text.text, center.x - width / 2.0, center.y - text.size / 2.0, text.size, text.color);
        }
        Ok(())
    }

    fn draw_slider(entity: &Entity, g: &mut dyn Graphics) -> Result<(), SystemError> {
        let position = entity.require::<Position>()?;
        let dimension = entity.require::<Dimension>()?;
        let hovered = entity.component::<Hoverable>().is_some_and(|h| h.hovered);

        let track = Rect::new(
            position.x,
            position.y + (dimension.height - TRACK_HEIGHT) / 2.0,
            dimension.width,
            TRACK_HEIGHT,
        );
        g.fill_rect(track, Color::DARK_GRAY);

        let pin_width = dimension.height / 2.0;
        let pin = Rect::new(slider_pin_x(entity, pin_width)?, position.y, pin_width, dimension.height);
        g.fill_rect(pin, if hovered { Color::LIGHT_GRAY } else { Color::GRAY });

        if let Some(text) = entity.component::<Text>() {
            g.draw_text(&text.text, position.x, position.y - text.size - 4.0, text.size, text.color);
        }
        Ok(())
    }

    fn draw_label(entity: &Entity, g: &mut dyn Graphics) -> Result<(), SystemError> {
        let position = entity.require::<Position>()?;
        let text = entity.require::<Text>()?;
        g.draw_text(&text.text, position.x, position.y, text.size, text.color);
        Ok(())
    }
}

impl RenderingSystem for UiRenderingSystem {
    fn name(&self) -> &str {
        "UiRenderingSystem"
    }

    fn render(&mut self, world: &World, g: &mut dyn Graphics, _time: FrameTime) -> Result<(), SystemError> {
        let mut elements = Vec::new();
        for (_, entity) in world.with_component::<UiElement>() {
            let element = entity.require::<UiElement>()?;
            if element.visible {
                elements.push((element.z, entity));
            }
        }
        elements.sort_by_key(|(z, _)| *z);

        for (_, entity) in elements {
            if entity.has_component::<ButtonMarker>() {
                Self::draw_button(entity, g)?;
            } else if entity.has_component::<SliderMarker>() {
                Self::draw_slider(entity, g)?;
            } else if entity.has_component::<LabelMarker>() {
                Self::draw_label(entity, g)?;
            }
        }
        Ok(())
    }
}
