use crate::components::{Attack, Player};
use ethera_engine::prelude::*;
use std::collections::HashSet;

/// Steers the player with WASD or the arrow keys and attacks with space
#[derive(Debug, Default)]
pub struct PlayerControlListener {
    held: HashSet<KeyCode>,
}

impl PlayerControlListener {
    /// Create a listener with no keys held
    pub fn new() -> Self {
        Self::default()
    }

    fn axis(&self, negative: [KeyCode; 2], positive: [KeyCode; 2]) -> f32 {
        let held = |keys: [KeyCode; 2]| keys.iter().any(|key| self.held.contains(key));
        match (held(negative), held(positive)) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }

    fn steer(&self, world: &mut World) {
        let dx = self.axis([KeyCode::A, KeyCode::Left], [KeyCode::D, KeyCode::Right]);
        let dy = self.axis([KeyCode::W, KeyCode::Up], [KeyCode::S, KeyCode::Down]);

        for (_, entity) in world.with_component_mut::<Player>() {
            if let Some(movement) = entity.component_mut::<Movement2D>() {
                movement.set_direction(dx, dy);
            }
        }
    }
}

impl KeyListener for PlayerControlListener {
    fn key_pressed(&mut self, world: &mut World, event: &KeyEvent) {
        if event.key == KeyCode::Space {
            for (_, entity) in world.with_component_mut::<Player>() {
                if let Some(attack) = entity.component_mut::<Attack>() {
                    attack.requested = true;
                }
            }
            return;
        }

        self.held.insert(event.key);
        self.steer(world);
    }

    fn key_released(&mut self, world: &mut World, event: &KeyEvent) {
        if self.held.remove(&event.key) {
            self.steer(world);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn setup() -> (World, EntityId) {
        let mut world = World::new();
        let id = world.spawn(
            Entity::new()
                .with(Player)
                .with(Movement2D::new(300.0))
                .with(Attack::new(1.0, 40.0, 400, 40.0)),
        );
        (world, id)
    }

    fn movement(world: &World, id: EntityId) -> Movement2D {
        *world.get(id).unwrap().component::<Movement2D>().unwrap()
    }

    #[test]
    fn test_keys_combine_into_direction() {
        let (mut world, id) = setup();
        let mut listener = PlayerControlListener::new();

        listener.key_pressed(&mut world, &KeyEvent::new(KeyCode::D));
        assert_eq!((movement(&world, id).vx, movement(&world, id).vy), (1.0, 0.0));

        listener.key_pressed(&mut world, &KeyEvent::new(KeyCode::Up));
        let diagonal = movement(&world, id);
        assert_relative_eq!(diagonal.vx, std::f32::consts::FRAC_1_SQRT_2);
        assert_relative_eq!(diagonal.vy, -std::f32::consts::FRAC_1_SQRT_2);

        listener.key_released(&mut world, &KeyEvent::new(KeyCode::D));
        listener.key_released(&mut world, &KeyEvent::new(KeyCode::Up));
        assert!(!movement(&world, id).is_moving());
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let (mut world, id) = setup();
        let mut listener = PlayerControlListener::new();

        listener.key_pressed(&mut world, &KeyEvent::new(KeyCode::A));
        listener.key_pressed(&mut world, &KeyEvent::new(KeyCode::Right));
        assert_eq!(movement(&world, id).vx, 0.0);
    }

    #[test]
    fn test_space_requests_attack() {
        let (mut world, id) = setup();
        PlayerControlListener::new().key_pressed(&mut world, &KeyEvent::new(KeyCode::Space));
        assert!(world.get(id).unwrap().component::<Attack>().unwrap().requested);
    }
}
