//! 2D graphics
//!
//! Rendering systems draw through the [`Graphics`] trait so the engine does
//! not depend on any window toolkit. [`Canvas`] is the built-in software
//! target used for headless runs and tests.

pub mod color;
pub mod canvas;
pub mod sprite;
pub mod components;
pub mod systems;

pub use color::Color;
pub use canvas::{Canvas, DrawnText};
pub use sprite::{Animation2D, Spritesheet2D};
pub use components::{Animations2D, Sprite2D};
pub use systems::{Animation2DRenderingSystem, Sprite2DRenderingSystem};

use crate::foundation::math::Rect;
use image::RgbaImage;

/// Drawing surface handed to rendering systems
pub trait Graphics {
    /// Surface size in pixels (width, height)
    fn size(&self) -> (u32, u32);

    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a one pixel rectangle outline
    fn draw_rect(&mut self, rect: Rect, color: Color);

    /// Draw the `src` region of an image scaled into `dst`
    fn draw_image(&mut self, image: &RgbaImage, src: Rect, dst: Rect);

    /// Draw a line of text with its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);
}
