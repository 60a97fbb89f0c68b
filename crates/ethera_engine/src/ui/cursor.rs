//! Cursor tracking

use super::components::Cursor;
use crate::ecs::components::Position;
use crate::ecs::World;
use crate::input::{MouseEvent, MouseListener, MouseMotionListener};

/// Mirrors the mouse into the scene's cursor entity
///
/// Registered both as a mouse listener and as a mouse motion listener. Scenes
/// without a cursor entity ignore the events.
#[derive(Debug, Default, Clone, Copy)]
pub struct CursorListener;

impl CursorListener {
    fn apply(world: &mut World, event: &MouseEvent, pressed: Option<bool>) {
        let Some(id) = world.first_with::<Cursor>() else {
            return;
        };
        let Some(entity) = world.get_mut(id) else {
            return;
        };

        if let Some(position) = entity.component_mut::<Position>() {
            position.x = event.x;
            position.y = event.y;
        }
        if let (Some(pressed), Some(cursor)) = (pressed, entity.component_mut::<Cursor>()) {
            cursor.pressed = pressed;
            if pressed {
                cursor.just_pressed = true;
            } else {
                cursor.just_released = true;
            }
        }
    }
}

impl MouseListener for CursorListener {
    fn mouse_pressed(&mut self, world: &mut World, event: &MouseEvent) {
        Self::apply(world, event, Some(true));
    }

    fn mouse_released(&mut self, world: &mut World, event: &MouseEvent) {
        Self::apply(world, event, Some(false));
    }
}

impl MouseMotionListener for CursorListener {
    fn mouse_dragged(&mut self, world: &mut World, event: &MouseEvent) {
        Self::apply(world, event, None);
    }

    fn mouse_moved(&mut self, world: &mut World, event: &MouseEvent) {
        Self::apply(world, event, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::cursor;

    #[test]
    fn test_cursor_follows_mouse() {
        let mut world = World::new();
        let id = world.spawn(cursor());
        let mut listener = CursorListener;

        listener.mouse_moved(&mut world, &MouseEvent::at(12.0, 34.0));
        listener.mouse_pressed(&mut world, &MouseEvent::at(13.0, 35.0));

        let entity = world.get(id).unwrap();
        assert_eq!(*entity.component::<Position>().unwrap(), Position::new(13.0, 35.0));
        assert!(entity.component::<Cursor>().unwrap().pressed);

        listener.mouse_released(&mut world, &MouseEvent::at(13.0, 35.0));
        let cursor = world.get(id).unwrap().component::<Cursor>().unwrap();
        assert!(!cursor.pressed);
        assert!(cursor.just_pressed && cursor.just_released);
    }

    #[test]
    fn test_world_without_cursor_is_ignored() {
        let mut world = World::new();
        CursorListener.mouse_moved(&mut world, &MouseEvent::at(1.0, 1.0));
        assert!(world.is_empty());
    }
}
