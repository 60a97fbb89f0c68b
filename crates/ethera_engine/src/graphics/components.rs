//! Drawable components

use super::Animation2D;
use crate::ecs::Component;
use crate::foundation::math::Rect;
use image::RgbaImage;
use std::collections::HashMap;
use std::sync::Arc;

/// Static image drawn at the entity's position
#[derive(Debug, Clone)]
pub struct Sprite2D {
    /// Source image
    pub image: Arc<RgbaImage>,
    /// Region of the image to draw
    pub source: Rect,
    /// Drawn width in pixels
    pub width: f32,
    /// Drawn height in pixels
    pub height: f32,
    /// Horizontal offset from the entity position
    pub offset_x: f32,
    /// Vertical offset from the entity position
    pub offset_y: f32,
}

impl Component for Sprite2D {}

impl Sprite2D {
    /// Draw the whole image at the given size
    pub fn new(image: Arc<RgbaImage>, width: f32, height: f32) -> Self {
        let source = Rect::new(0.0, 0.0, image.width() as f32, image.height() as f32);
        Self {
            image,
            source,
            width,
            height,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Draw only a region of the image
    #[must_use]
    pub fn with_source(mut self, source: Rect) -> Self {
        self.source = source;
        self
    }
}

/// Named animations of an entity and the one currently playing
#[derive(Debug, Clone)]
pub struct Animations2D {
    current: String,
    animations: HashMap<String, Animation2D>,
    /// Drawn width in pixels
    pub width: f32,
    /// Drawn height in pixels
    pub height: f32,
    /// Horizontal offset from the entity position
    pub offset_x: f32,
    /// Vertical offset from the entity position
    pub offset_y: f32,
    started_ms: Option<u64>,
}

impl Component for Animations2D {}

impl Animations2D {
    /// Create the component with `current` selected
    pub fn new<I>(current: impl Into<String>, animations: I, width: f32, height: f32) -> Self
    where
        I: IntoIterator<Item = (String, Animation2D)>,
    {
        Self {
            current: current.into(),
            animations: animations.into_iter().collect(),
            width,
            height,
            offset_x: 0.0,
            offset_y: 0.0,
            started_ms: None,
        }
    }

    /// Set the vertical draw offset
    #[must_use]
    pub fn with_offset_y(mut self, offset_y: f32) -> Self {
        self.offset_y = offset_y;
        self
    }

    /// Set the horizontal draw offset
    #[must_use]
    pub fn with_offset_x(mut self, offset_x: f32) -> Self {
        self.offset_x = offset_x;
        self
    }

    /// Name of the selected animation
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The selected animation, if it exists
    pub fn current_animation(&self) -> Option<&Animation2D> {
        self.animations.get(&self.current)
    }

    /// Look up an animation by name
    pub fn get(&self, name: &str) -> Option<&Animation2D> {
        self.animations.get(name)
    }

    /// Whether an animation with that name exists
    pub fn contains(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    /// Select an animation; its clock restarts only when the selection changes
    pub fn set_current(&mut self, name: &str, now_ms: u64) -> bool {
        if self.current == name && self.started_ms.is_some() {
            return false;
        }
        self.current = name.to_string();
        self.started_ms = Some(now_ms);
        true
    }

    /// Time the selected animation has been playing
    ///
    /// Animations never started explicitly run on the global clock.
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_ms.unwrap_or(0))
    }

    /// Whether the selected one-shot animation has played through
    pub fn is_current_finished(&self, now_ms: u64) -> bool {
        self.current_animation()
            .is_some_and(|animation| animation.is_finished(self.elapsed_ms(now_ms)))
    }
}
