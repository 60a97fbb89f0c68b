//! Default 2D rendering systems

use super::{Animations2D, Graphics, Sprite2D};
use crate::ecs::components::Position;
use crate::ecs::{RenderingSystem, SystemError, World};
use crate::foundation::math::Rect;
use crate::foundation::time::FrameTime;

/// Draws every entity that has a [`Sprite2D`] and a [`Position`]
#[derive(Debug, Default)]
pub struct Sprite2DRenderingSystem;

impl RenderingSystem for Sprite2DRenderingSystem {
    fn name(&self) -> &str {
        "Sprite2DRenderingSystem"
    }

    fn render(&mut self, world: &World, g: &mut dyn Graphics, _time: FrameTime) -> Result<(), SystemError> {
        for (_, entity) in world.with_component::<Sprite2D>() {
            let sprite = entity.require::<Sprite2D>()?;
            let position = entity.require::<Position>()?;

            let dst = Rect::new(
                position.x + sprite.offset_x,
                position.y + sprite.offset_y,
                sprite.width,
                sprite.height,
            );
            g.draw_image(&sprite.image, sprite.source, dst);
        }
        Ok(())
    }
}

/// Draws the current frame of every entity with [`Animations2D`] and a [`Position`]
#[derive(Debug, Default)]
pub struct Animation2DRenderingSystem;

impl RenderingSystem for Animation2DRenderingSystem {
    fn name(&self) -> &str {
        "Animation2DRenderingSystem"
    }

    fn render(&mut self, world: &World, g: &mut dyn Graphics, time: FrameTime) -> Result<(), SystemError> {
        for (_, entity) in world.with_component::<Animations2D>() {
            let animations = entity.require::<Animations2D>()?;
            let position = entity.require::<Position>()?;

            let Some(animation) = animations.current_animation() else {
                log::warn!("Entity {:?} has no animation named {}", entity.name(), animations.current());
                continue;
            };

            let src = animation.frame_rect(animations.elapsed_ms(time.now_ms));
            let dst = Rect::new(
                position.x + animations.offset_x,
                position.y + animations.offset_y,
                animations.width,
                animations.height,
            );
            g.draw_image(animation.sheet().image(), src, dst);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::{EcsError, Entity};
    use crate::graphics::{Animation2D, Canvas, Color, Spritesheet2D};
    use image::RgbaImage;
    use std::sync::Arc;

    fn solid(width: u32, height: u32, color: Color) -> Arc<RgbaImage> {
        Arc::new(RgbaImage::from_pixel(width, height, color.to_rgba()))
    }

    #[test]
    fn test_sprite_drawn_at_position() {
        let mut world = World::new();
        world.spawn(
            Entity::new()
                .with(Position::new(2.0, 2.0))
                .with(Sprite2D::new(solid(1, 1, Color::RED), 2.0, 2.0)),
        );

        let mut canvas = Canvas::new(8, 8);
        Sprite2DRenderingSystem.render(&world, &mut canvas, FrameTime::default()).unwrap();

        assert_eq!(canvas.pixel(2, 2), Some(Color::RED));
        assert_eq!(canvas.pixel(3, 3), Some(Color::RED));
        assert_eq!(canvas.pixel(4, 4), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_sprite_without_position_fails() {
        let mut world = World::new();
        world.spawn(Entity::named("floating").with(Sprite2D::new(solid(1, 1, Color::RED), 1.0, 1.0)));

        let mut canvas = Canvas::new(4, 4);
        let err = Sprite2DRenderingSystem.render(&world, &mut canvas, FrameTime::default()).unwrap_err();
        assert!(matches!(err, SystemError::Ecs(EcsError::MissingComponent { component: "Position", .. })));
    }

    #[test]
    fn test_animation_frame_follows_clock() {
        let mut sheet_image = RgbaImage::new(2, 1);
        sheet_image.put_pixel(0, 0, Color::RED.to_rgba());
        sheet_image.put_pixel(1, 0, Color::WHITE.to_rgba());
        let sheet = Spritesheet2D::strip(Arc::new(sheet_image), 1, 1).unwrap();

        let mut animations = Animations2D::new(
            "blink",
            vec![("blink".to_string(), Animation2D::new(sheet, 100, true))],
            1.0,
            1.0,
        );
        animations.set_current("blink", 1_000);

        let mut world = World::new();
        world.spawn(Entity::new().with(Position::new(0.0, 0.0)).with(animations));

        let mut canvas = Canvas::new(1, 1);
        Animation2DRenderingSystem.render(&world, &mut canvas, FrameTime::new(1_050, 16)).unwrap();
        assert_eq!(canvas.pixel(0, 0), Some(Color::RED));

        Animation2DRenderingSystem.render(&world, &mut canvas, FrameTime::new(1_150, 16)).unwrap();
        assert_eq!(canvas.pixel(0, 0), Some(Color::WHITE));
    }
}
