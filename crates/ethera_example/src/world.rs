//! Tile map

use ethera_engine::prelude::*;
use image::{Rgba, RgbaImage};
use rand::Rng;
use std::sync::Arc;

/// Edge length of a tile in pixels
pub const TILE_SIZE: f32 = 50.0;

const TILE_PIXELS: u32 = TILE_SIZE as u32;

/// What a tile looks like
#[derive(Debug, Clone)]
pub struct TileType {
    /// Type name, also stored on every tile of this type
    pub name: String,
    /// Static look
    pub sprite: Option<Sprite2D>,
    /// Animated look; the first animation is the one shown
    pub animations: Option<Vec<(String, Animation2D)>>,
}

impl TileType {
    /// Tile drawn with a static image
    pub fn with_sprite(name: impl Into<String>, image: Arc<RgbaImage>) -> Self {
        Self {
            name: name.into(),
            sprite: Some(Sprite2D::new(image, TILE_SIZE, TILE_SIZE)),
            animations: None,
        }
    }

    /// Tile drawn with animations
    pub fn with_animations(name: impl Into<String>, animations: Vec<(String, Animation2D)>) -> Self {
        Self {
            name: name.into(),
            sprite: None,
            animations: Some(animations),
        }
    }
}

/// Type name of a tile entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Name of the tile's type
    pub kind: String,
}

impl Component for Tile {}

/// Tile entity at (x, y)
pub fn tile(tile_type: &TileType, x: f32, y: f32) -> Entity {
    let mut entity = Entity::new()
        .with(Position::new(x, y))
        .with(Dimension::new(TILE_SIZE, TILE_SIZE))
        .with(Tile {
            kind: tile_type.name.clone(),
        });

    if let Some(sprite) = &tile_type.sprite {
        entity.add_component(sprite.clone());
    }

    if let Some(animations) = &tile_type.animations {
        let current = animations.first().map(|(name, _)| name.clone()).unwrap_or_default();
        entity.add_component(Animations2D::new(current, animations.iter().cloned(), TILE_SIZE, TILE_SIZE));
    }

    entity
}

/// Generated tile map: grass with scattered flowers and ponds, framed by stone
#[derive(Debug, Clone)]
pub struct ExampleWorld {
    columns: u32,
    rows: u32,
    grass: TileType,
    flowers: TileType,
    stone: TileType,
    water: TileType,
}

impl ExampleWorld {
    /// Create a world filling `width` x `height` pixels, registering its tile images
    ///
    /// # Errors
    /// Fails when a generated tile sheet does not split into frames.
    pub fn new(assets: &mut AssetManager, width: u32, height: u32) -> Result<Self, AssetError> {
        let grass = assets.insert_image("generated/tiles/grass.png", solid_tile(Rgba([86, 140, 60, 255]), None));
        let flowers = assets.insert_image(
            "generated/tiles/flowers.png",
            solid_tile(Rgba([86, 140, 60, 255]), Some(Rgba([230, 210, 70, 255]))),
        );
        let stone = assets.insert_image("generated/tiles/stone.png", solid_tile(Rgba([110, 110, 115, 255]), None));
        let water = assets.insert_image("generated/tiles/water.png", water_strip());

        let water_sheet = Spritesheet2D::strip(water, TILE_PIXELS, TILE_PIXELS)?;

        Ok(Self {
            columns: (width / TILE_PIXELS).max(1),
            rows: (height / TILE_PIXELS).max(1),
            grass: TileType::with_sprite("grass", grass),
            flowers: TileType::with_sprite("flowers", flowers),
            stone: TileType::with_sprite("stone", stone),
            water: TileType::with_animations("water", vec![("ripple".to_string(), Animation2D::new(water_sheet, 400, true))]),
        })
    }

    /// Number of tile columns
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of tile rows
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Area characters may walk in: everything inside the stone border
    pub fn walkable_bounds(&self) -> Rect {
        Rect::new(
            TILE_SIZE,
            TILE_SIZE,
            (self.columns.saturating_sub(2)) as f32 * TILE_SIZE,
            (self.rows.saturating_sub(2)) as f32 * TILE_SIZE,
        )
    }

    /// Tile entities, row by row
    pub fn tiles<R: Rng>(&self, rng: &mut R) -> Vec<Entity> {
        let mut tiles = Vec::with_capacity((self.columns * self.rows) as usize);

        for row in 0..self.rows {
            for column in 0..self.columns {
                let border = row == 0 || column == 0 || row == self.rows - 1 || column == self.columns - 1;
                let tile_type = if border {
                    &self.stone
                } else {
                    match rng.gen_range(0..20) {
                        0 => &self.water,
                        1..=3 => &self.flowers,
                        _ => &self.grass,
                    }
                };
                tiles.push(tile(tile_type, column as f32 * TILE_SIZE, row as f32 * TILE_SIZE));
            }
        }

        tiles
    }
}

fn solid_tile(base: Rgba<u8>, dots: Option<Rgba<u8>>) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(TILE_PIXELS, TILE_PIXELS, base);
    if let Some(dot) = dots {
        for (x, y) in [(8, 10), (30, 6), (20, 28), (40, 36), (10, 42)] {
            for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                image.put_pixel(x + dx, y + dy, dot);
            }
        }
    }
    image
}

fn water_strip() -> RgbaImage {
    let mut image = RgbaImage::from_pixel(TILE_PIXELS * 2, TILE_PIXELS, Rgba([50, 100, 190, 255]));
    for frame in 0..2 {
        let offset = frame * TILE_PIXELS;
        for x in 0..TILE_PIXELS {
            let wave_y = 15 + frame * 20 + (x / 10) % 2;
            image.put_pixel(offset + x, wave_y, Rgba([140, 180, 235, 255]));
        }
    }
    image
}
