//! Character constructors

use crate::animations::{AnimationKind, FRAME_SIZE};
use crate::components::{Attack, CharacterState, Collideable, Enemy, EnemyAi, EntityState, Facing, Health, Player};
use ethera_engine::prelude::*;

const MOVEMENT_SPEED: f32 = 300.0;
/// Width and height of a character body
pub const BODY_SIZE: f32 = 50.0;
// Animation frames are 100x100 around a 50x50 body; shifting them by half the
// difference on both axes centres the frame on the body.
const SPRITE_OFFSET: f32 = -(FRAME_SIZE as f32 - BODY_SIZE) / 2.0;

fn character(name: &str, x: f32, y: f32, animations: &[(String, Animation2D)]) -> Entity {
    let frame = FRAME_SIZE as f32;

    Entity::named(name)
        .with(CharacterState::new(EntityState::Idle))
        .with(Movement2D::new(MOVEMENT_SPEED))
        .with(Position::new(x, y))
        .with(Dimension::new(BODY_SIZE, BODY_SIZE))
        .with(Attack::new(1.0, 40.0, 400, 40.0))
        .with(Health::new(5.0, 1_000))
        .with(Facing::Left)
        .with(Collideable)
        .with(
            Animations2D::new(AnimationKind::Idle.name(Facing::Left), animations.iter().cloned(), frame, frame)
                .with_offset_x(SPRITE_OFFSET)
                .with_offset_y(SPRITE_OFFSET),
        )
}

/// The player character at (x, y)
pub fn player(x: f32, y: f32, animations: &[(String, Animation2D)]) -> Entity {
    character("player", x, y, animations).with(Player)
}

/// An enemy at (x, y) without a target yet
pub fn enemy(x: f32, y: f32, animations: &[(String, Animation2D)]) -> Entity {
    character("enemy", x, y, animations)
        .with(Enemy)
        .with(EnemyAi::new(None))
}
