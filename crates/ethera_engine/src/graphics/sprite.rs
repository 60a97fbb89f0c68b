//! Spritesheets and frame animations

use crate::assets::{AssetError, AssetManager};
use crate::foundation::math::Rect;
use image::RgbaImage;
use std::sync::Arc;

/// Image split into equally sized frames, read row by row
#[derive(Debug, Clone)]
pub struct Spritesheet2D {
    image: Arc<RgbaImage>,
    frame_width: u32,
    frame_height: u32,
    rows: u32,
    columns: u32,
}

impl Spritesheet2D {
    /// Create a spritesheet over an already loaded image
    ///
    /// # Errors
    /// Fails when a frame size is zero or the grid does not fit in the image.
    pub fn new(
        image: Arc<RgbaImage>,
        frame_width: u32,
        frame_height: u32,
        rows: u32,
        columns: u32,
    ) -> Result<Self, AssetError> {
        if frame_width == 0 || frame_height == 0 || rows == 0 || columns == 0 {
            return Err(AssetError::InvalidData("Spritesheet frames must be non-empty".to_string()));
        }
        let fits = match (frame_width.checked_mul(columns), frame_height.checked_mul(rows)) {
            (Some(width), Some(height)) => width <= image.width() && height <= image.height(),
            _ => false,
        };
        if !fits {
            return Err(AssetError::InvalidData(format!(
                "{}x{} grid of {}x{} frames does not fit a {}x{} image",
                columns, rows, frame_width, frame_height, image.width(), image.height()
            )));
        }

        Ok(Self {
            image,
            frame_width,
            frame_height,
            rows,
            columns,
        })
    }

    /// Load the image through the asset manager and split it into frames
    ///
    /// # Errors
    /// Fails when the image cannot be loaded or the grid does not fit.
    pub fn load(
        assets: &mut AssetManager,
        path: &str,
        frame_width: u32,
        frame_height: u32,
        rows: u32,
        columns: u32,
    ) -> Result<Self, AssetError> {
        let image = assets.load_image(path)?;
        Self::new(image, frame_width, frame_height, rows, columns)
    }

    /// Spritesheet with a single row, frame count derived from the image width
    ///
    /// # Errors
    /// Fails when the image is narrower or shorter than one frame.
    pub fn strip(image: Arc<RgbaImage>, frame_width: u32, frame_height: u32) -> Result<Self, AssetError> {
        let columns = if frame_width == 0 { 0 } else { image.width() / frame_width };
        Self::new(image, frame_width, frame_height, 1, columns)
    }

    /// Shared image
    pub fn image(&self) -> &Arc<RgbaImage> {
        &self.image
    }

    /// Number of frames
    pub fn frame_count(&self) -> u32 {
        self.rows * self.columns
    }

    /// Source rectangle of a frame; out-of-range indices wrap
    pub fn frame_rect(&self, index: u32) -> Rect {
        let index = index % self.frame_count();
        let column = index % self.columns;
        let row = index / self.columns;

        Rect::new(
            (column * self.frame_width) as f32,
            (row * self.frame_height) as f32,
            self.frame_width as f32,
            self.frame_height as f32,
        )
    }
}

/// Frame animation over a spritesheet
#[derive(Debug, Clone)]
pub struct Animation2D {
    sheet: Spritesheet2D,
    frame_duration_ms: u64,
    looping: bool,
}

impl Animation2D {
    /// Create an animation that shows each frame for `frame_duration_ms`
    pub fn new(sheet: Spritesheet2D, frame_duration_ms: u64, looping: bool) -> Self {
        Self {
            sheet,
            frame_duration_ms,
            looping,
        }
    }

    /// Underlying spritesheet
    pub fn sheet(&self) -> &Spritesheet2D {
        &self.sheet
    }

    /// Whether the animation restarts after the last frame
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Time to play every frame once
    pub fn duration_ms(&self) -> u64 {
        self.frame_duration_ms * u64::from(self.sheet.frame_count())
    }

    /// Frame to show after `elapsed_ms`; non-looping animations hold the last frame
    pub fn frame_index(&self, elapsed_ms: u64) -> u32 {
        if self.frame_duration_ms == 0 {
            return 0;
        }

        let count = u64::from(self.sheet.frame_count());
        let frame = elapsed_ms / self.frame_duration_ms;
        let index = if self.looping { frame % count } else { frame.min(count - 1) };
        index as u32
    }

    /// Source rectangle to show after `elapsed_ms`
    pub fn frame_rect(&self, elapsed_ms: u64) -> Rect {
        self.sheet.frame_rect(self.frame_index(elapsed_ms))
    }

    /// Whether a non-looping animation has played through
    pub fn is_finished(&self, elapsed_ms: u64) -> bool {
        !self.looping && elapsed_ms >= self.duration_ms()
    }
}
