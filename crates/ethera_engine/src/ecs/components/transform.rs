//! Placement components

use crate::ecs::Component;
use crate::foundation::math::{Rect, Vec2};

/// Top-left corner of an entity in screen space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// X coordinate in pixels
    pub x: f32,
    /// Y coordinate in pixels
    pub y: f32,
}

impl Component for Position {}

impl Position {
    /// Create a position
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Position as a vector
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Distance to another position
    pub fn distance(&self, other: &Position) -> f32 {
        (other.as_vec2() - self.as_vec2()).norm()
    }
}

/// Size of an entity in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimension {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Component for Dimension {}

impl Dimension {
    /// Create a dimension
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Rectangle covered by an entity at `position`
    pub fn bounds(&self, position: &Position) -> Rect {
        Rect::new(position.x, position.y, self.width, self.height)
    }
}
