//! Character animations
//!
//! Spritesheets are read from `assets/animations/player/<name>.png`, one row
//! of 100x100 frames each. Missing sheets are replaced by generated
//! placeholders so the game runs without art.

use crate::components::{EntityState, Facing};
use ethera_engine::prelude::*;
use image::{Rgba, RgbaImage};

/// Size of one animation frame in pixels
pub const FRAME_SIZE: u32 = 100;

const ANIMATION_DIR: &str = "assets/animations/player";

/// What a character is doing, independent of facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Standing
    Idle,
    /// Walking
    Walk,
    /// Attacking
    Attack,
    /// Taking a hit
    Damage,
    /// Dying
    Die,
}

impl AnimationKind {
    /// Every kind
    pub const ALL: [Self; 5] = [Self::Idle, Self::Walk, Self::Attack, Self::Damage, Self::Die];

    /// Animation for a character state
    pub fn for_state(state: EntityState) -> Self {
        match state {
            EntityState::Idle => Self::Idle,
            EntityState::Walking => Self::Walk,
            EntityState::Attacking => Self::Attack,
            EntityState::Damaged => Self::Damage,
            EntityState::Dying | EntityState::Despawn | EntityState::Dead => Self::Die,
        }
    }

    /// Animation name for this kind and facing, also the sheet's file stem
    pub fn name(self, facing: Facing) -> &'static str {
        match (self, facing) {
            (Self::Idle, Facing::Left) => "idle-left",
            (Self::Idle, Facing::Right) => "idle-right",
            (Self::Walk, Facing::Left) => "walk-left",
            (Self::Walk, Facing::Right) => "walk-right",
            (Self::Attack, Facing::Left) => "attack-left",
            (Self::Attack, Facing::Right) => "attack-right",
            (Self::Damage, Facing::Left) => "damage-left",
            (Self::Damage, Facing::Right) => "damage-right",
            (Self::Die, Facing::Left) => "die-left",
            (Self::Die, Facing::Right) => "die-right",
        }
    }

    fn frame_duration_ms(self) -> u64 {
        match self {
            Self::Idle | Self::Damage => 200,
            Self::Walk => 100,
            Self::Attack => 80,
            Self::Die => 150,
        }
    }

    fn is_looping(self) -> bool {
        matches!(self, Self::Idle | Self::Walk)
    }

    fn placeholder_frames(self) -> u32 {
        match self {
            Self::Idle => 4,
            Self::Walk | Self::Die => 6,
            Self::Attack => 5,
            Self::Damage => 3,
        }
    }

    fn placeholder_color(self) -> Rgba<u8> {
        match self {
            Self::Idle => Rgba([70, 130, 180, 255]),
            Self::Walk => Rgba([60, 160, 90, 255]),
            Self::Attack => Rgba([200, 150, 40, 255]),
            Self::Damage => Rgba([220, 60, 60, 255]),
            Self::Die => Rgba([120, 120, 120, 255]),
        }
    }
}

/// Load every character animation, keyed by name
///
/// # Errors
/// Fails when a sheet exists but cannot be decoded or is smaller than a frame.
pub fn character_animations(assets: &mut AssetManager) -> Result<Vec<(String, Animation2D)>, AssetError> {
    let mut animations = Vec::with_capacity(AnimationKind::ALL.len() * 2);

    for kind in AnimationKind::ALL {
        for facing in [Facing::Left, Facing::Right] {
            let name = kind.name(facing);
            let path = format!("{}/{}.png", ANIMATION_DIR, name);

            let image = match assets.load_image(&path) {
                Ok(image) => image,
                Err(AssetError::NotFound(_)) => {
                    log::debug!("No spritesheet at {}, generating a placeholder", path);
                    assets.insert_image(&path, placeholder(kind, facing))
                }
                Err(e) => return Err(e),
            };

            let sheet = Spritesheet2D::strip(image, FRAME_SIZE, FRAME_SIZE)?;
            animations.push((
                name.to_string(),
                Animation2D::new(sheet, kind.frame_duration_ms(), kind.is_looping()),
            ));
        }
    }

    log::info!("Loaded {} character animations", animations.len());
    Ok(animations)
}

/// Generated strip: a body that bobs (or sinks, when dying) with an eye on the facing side
fn placeholder(kind: AnimationKind, facing: Facing) -> RgbaImage {
    let frames = kind.placeholder_frames();
    let mut image = RgbaImage::new(FRAME_SIZE * frames, FRAME_SIZE);
    let body = kind.placeholder_color();

    for frame in 0..frames {
        let left = frame * FRAME_SIZE;
        let (top, height) = if kind == AnimationKind::Die {
            let sunk = 60 * (frame + 1) / frames;
            (25 + sunk, 70 - sunk)
        } else {
            (25 + (frame % 2) * 4, 70)
        };

        fill(&mut image, left + 30, top, 40, height, body);

        let eye_x = match facing {
            Facing::Left => left + 34,
            Facing::Right => left + 58,
        };
        fill(&mut image, eye_x, top + 8, 8, 8, Rgba([255, 255, 255, 255]));

        if kind == AnimationKind::Attack && frame >= frames / 2 {
            let blade_x = match facing {
                Facing::Left => left + 5,
                Facing::Right => left + 70,
            };
            fill(&mut image, blade_x, top + 30, 25, 6, Rgba([230, 230, 240, 255]));
        }
    }
    image
}

fn fill(image: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    let right = (x + width).min(image.width());
    let bottom = (y + height).min(image.height());
    for py in y..bottom {
        for px in x..right {
            image.put_pixel(px, py, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_cover_every_animation() {
        let dir = tempfile::tempdir().unwrap();
        let mut assets = AssetManager::with_search_paths(vec![dir.path().to_path_buf()]);

        let animations = character_animations(&mut assets).unwrap();
        assert_eq!(animations.len(), 10);
        assert_eq!(assets.cached_image_count(), 10);

        let (_, die) = animations.iter().find(|(name, _)| name == "die-right").unwrap();
        assert!(!die.is_looping());
        assert_eq!(die.sheet().frame_count(), 6);
    }

    #[test]
    fn test_sheet_on_disk_wins() {
        let dir = tempfile::tempdir().unwrap();
        let sheet_dir = dir.path().join(ANIMATION_DIR);
        std::fs::create_dir_all(&sheet_dir).unwrap();
        RgbaImage::new(FRAME_SIZE * 30, FRAME_SIZE)
            .save(sheet_dir.join("damage-left.png"))
            .unwrap();

        let mut assets = AssetManager::with_search_paths(vec![dir.path().to_path_buf()]);
        let animations = character_animations(&mut assets).unwrap();

        let (_, damage) = animations.iter().find(|(name, _)| name == "damage-left").unwrap();
        assert_eq!(damage.sheet().frame_count(), 30);
        assert_eq!(damage.duration_ms(), 6_000);
    }

    #[test]
    fn test_state_to_animation() {
        assert_eq!(AnimationKind::for_state(EntityState::Despawn).name(Facing::Left), "die-left");
        assert_eq!(AnimationKind::for_state(EntityState::Walking).name(Facing::Right), "walk-right");
    }
}
