//! Software render target
//!
//! Draws into an in-memory RGBA image with nearest-neighbour scaling and
//! source-over alpha blending. Text is not rasterised; every call is recorded
//! so callers (and tests) can inspect what would have been written.

use super::{Color, Graphics};
use crate::assets::AssetError;
use crate::foundation::math::Rect;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Text recorded by [`Canvas::draw_text`]
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnText {
    /// The text
    pub text: String,
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
}

/// In-memory drawing surface
pub struct Canvas {
    image: RgbaImage,
    texts: Vec<DrawnText>,
}

impl Canvas {
    /// Create a canvas filled with transparent black
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            texts: Vec::new(),
        }
    }

    /// Rendered pixels
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Color at a pixel, if inside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        (x < self.image.width() && y < self.image.height()).then(|| Color::from(*self.image.get_pixel(x, y)))
    }

    /// Text drawn since the last clear
    pub fn texts(&self) -> &[DrawnText] {
        &self.texts
    }

    /// Write the canvas to a PNG file
    ///
    /// # Errors
    /// Returns [`AssetError::SaveFailed`] when the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), AssetError> {
        let path = path.as_ref();
        self.image
            .save(path)
            .map_err(|e| AssetError::SaveFailed(format!("{}: {}", path.display(), e)))?;
        log::info!("Saved frame {}x{} to {:?}", self.image.width(), self.image.height(), path);
        Ok(())
    }

    /// Clip a rectangle to the canvas, returning pixel bounds [x0, x1) x [y0, y1)
    fn clip(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let x0 = rect.x.floor().max(0.0);
        let y0 = rect.y.floor().max(0.0);
        let x1 = rect.right().floor().min(self.image.width() as f32);
        let y1 = rect.bottom().floor().min(self.image.height() as f32);

        (x1 > x0 && y1 > y0).then(|| (x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    fn blend(&mut self, x: u32, y: u32, src: Rgba<u8>) {
        let alpha = u32::from(src.0[3]);
        if alpha == 0 {
            return;
        }

        let dst = self.image.get_pixel_mut(x, y);
        if alpha == 255 {
            *dst = src;
            return;
        }

        let inv = 255 - alpha;
        for channel in 0..3 {
            let blended = (u32::from(src.0[channel]) * alpha + u32::from(dst.0[channel]) * inv) / 255;
            dst.0[channel] = blended as u8;
        }
        dst.0[3] = (alpha + u32::from(dst.0[3]) * inv / 255) as u8;
    }
}

impl Graphics for Canvas {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn clear(&mut self, color: Color) {
        let pixel = color.to_rgba();
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
        self.texts.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        let pixel = color.to_rgba();

        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, pixel);
            }
        }
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, 1.0), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - 1.0, rect.width, 1.0), color);
        self.fill_rect(Rect::new(rect.x, rect.y + 1.0, 1.0, rect.height - 2.0), color);
        self.fill_rect(Rect::new(rect.right() - 1.0, rect.y + 1.0, 1.0, rect.height - 2.0), color);
    }

    fn draw_image(&mut self, image: &RgbaImage, src: Rect, dst: Rect) {
        if src.width <= 0.0 || src.height <= 0.0 || dst.width <= 0.0 || dst.height <= 0.0 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.clip(dst) else {
            return;
        };

        let scale_x = src.width / dst.width;
        let scale_y = src.height / dst.height;
        let max_x = image.width().saturating_sub(1);
        let max_y = image.height().saturating_sub(1);

        for y in y0..y1 {
            let sy = (src.y + (y as f32 - dst.y + 0.5) * scale_y).max(0.0) as u32;
            for x in x0..x1 {
                let sx = (src.x + (x as f32 - dst.x + 0.5) * scale_x).max(0.0) as u32;
                let pixel = *image.get_pixel(sx.min(max_x), sy.min(max_y));
                self.blend(x, y, pixel);
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        log::trace!("draw_text {:?} at ({}, {})", text, x, y);
        self.texts.push(DrawnText {
            text: text.to_string(),
            x,
            y,
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_is_clipped() {
        let mut canvas = Canvas::new(4, 4);
        canvas.fill_rect(Rect::new(-2.0, -2.0, 4.0, 4.0), Color::RED);

        assert_eq!(canvas.pixel(0, 0), Some(Color::RED));
        assert_eq!(canvas.pixel(1, 1), Some(Color::RED));
        assert_eq!(canvas.pixel(2, 2), Some(Color::TRANSPARENT));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn test_half_alpha_blend() {
        let mut canvas = Canvas::new(1, 1);
        canvas.clear(Color::BLACK);
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::rgba(255, 255, 255, 128));

        let pixel = canvas.pixel(0, 0).unwrap();
        assert_eq!(pixel.r, 128);
        assert_eq!(pixel.a, 255);
    }

    #[test]
    fn test_draw_image_scales_source_region() {
        let mut sheet = RgbaImage::new(2, 1);
        sheet.put_pixel(0, 0, Color::RED.to_rgba());
        sheet.put_pixel(1, 0, Color::WHITE.to_rgba());

        let mut canvas = Canvas::new(4, 4);
        canvas.draw_image(&sheet, Rect::new(1.0, 0.0, 1.0, 1.0), Rect::new(0.0, 0.0, 4.0, 4.0));

        assert_eq!(canvas.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(canvas.pixel(3, 3), Some(Color::WHITE));
    }

    #[test]
    fn test_text_is_recorded_and_cleared() {
        let mut canvas = Canvas::new(8, 8);
        canvas.draw_text("Play", 1.0, 2.0, 12.0, Color::WHITE);
        assert_eq!(canvas.texts()[0].text, "Play");

        canvas.clear(Color::BLACK);
        assert!(canvas.texts().is_empty());
    }

    #[test]
    fn test_save_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let mut canvas = Canvas::new(2, 2);
        canvas.clear(Color::RED);

        canvas.save(&path).unwrap();
        let saved = image::open(&path).unwrap().to_rgba8();
        assert_eq!(saved.dimensions(), (2, 2));
        assert_eq!(Color::from(*saved.get_pixel(1, 1)), Color::RED);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("frame.png");

        let err = Canvas::new(2, 2).save(&path).unwrap_err();
        assert!(matches!(err, AssetError::SaveFailed(_)));
    }
}
