use super::center;
use crate::components::{Attack, CharacterState, EnemyAi, Player};
use ethera_engine::prelude::*;

/// Enemies chase the nearest living player and attack once in reach
#[derive(Debug, Default)]
pub struct EnemyAiSystem;

impl EnemyAiSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }
}

impl LogicSystem for EnemyAiSystem {
    fn name(&self) -> &str {
        "EnemyAiSystem"
    }

    fn update(&mut self, world: &mut World, _time: FrameTime) -> Result<(), SystemError> {
        let mut players = Vec::new();
        for (id, entity) in world.with_component::<Player>() {
            if entity.require::<CharacterState>()?.state.is_alive() {
                players.push((id, center(entity)?));
            }
        }

        for (_, entity) in world.with_component_mut::<EnemyAi>() {
            if !entity.require::<CharacterState>()?.state.is_alive() {
                entity.require_mut::<Movement2D>()?.stop();
                continue;
            }

            let origin = center(entity)?;
            let target = players.iter().min_by(|(_, a), (_, b)| {
                (*a - origin).norm_squared().total_cmp(&(*b - origin).norm_squared())
            });
            entity.require_mut::<EnemyAi>()?.target = target.map(|(id, _)| *id);

            let Some((_, target_center)) = target else {
                entity.require_mut::<Movement2D>()?.stop();
                continue;
            };

            let offset = *target_center - origin;
            let distance = offset.norm();
            let reach = entity.require::<Dimension>()?.width + entity.require::<Attack>()?.range * 0.5;

            if distance > reach {
                entity.require_mut::<Movement2D>()?.set_direction(offset.x / distance, offset.y / distance);
            } else {
                entity.require_mut::<Movement2D>()?.stop();
                entity.require_mut::<Attack>()?.requested = true;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Enemy, EntityState};
    use approx::assert_relative_eq;

    fn character(x: f32, y: f32) -> Entity {
        Entity::new()
            .with(CharacterState::new(EntityState::Idle))
            .with(Position::new(x, y))
            .with(Dimension::new(50.0, 50.0))
            .with(Movement2D::new(300.0))
            .with(Attack::new(1.0, 40.0, 400, 40.0))
    }

    fn enemy(x: f32, y: f32) -> Entity {
        character(x, y).with(Enemy).with(EnemyAi::default())
    }

    #[test]
    fn test_enemy_walks_towards_nearest_player() {
        let mut world = World::new();
        let far = world.spawn(character(0.0, 500.0).with(Player));
        let near = world.spawn(character(300.0, 0.0).with(Player));
        let enemy = world.spawn(enemy(0.0, 0.0));

        EnemyAiSystem::new().update(&mut world, FrameTime::default()).unwrap();

        let enemy = world.get(enemy).unwrap();
        assert_eq!(enemy.component::<EnemyAi>().unwrap().target, Some(near));
        assert_ne!(enemy.component::<EnemyAi>().unwrap().target, Some(far));
        let movement = enemy.component::<Movement2D>().unwrap();
        assert_relative_eq!(movement.vx, 1.0);
        assert_relative_eq!(movement.vy, 0.0);
    }

    #[test]
    fn test_enemy_in_reach_stops_and_attacks() {
        let mut world = World::new();
        world.spawn(character(60.0, 0.0).with(Player));
        let enemy = world.spawn(enemy(0.0, 0.0));

        EnemyAiSystem::new().update(&mut world, FrameTime::default()).unwrap();

        let enemy = world.get(enemy).unwrap();
        assert!(!enemy.component::<Movement2D>().unwrap().is_moving());
        assert!(enemy.component::<Attack>().unwrap().requested);
    }

    #[test]
    fn test_dead_players_are_ignored() {
        let mut world = World::new();
        world.spawn(character(100.0, 0.0).with(Player).with(CharacterState::new(EntityState::Dead)));
        let enemy = world.spawn(enemy(0.0, 0.0));

        EnemyAiSystem::new().update(&mut world, FrameTime::default()).unwrap();

        let enemy = world.get(enemy).unwrap();
        assert_eq!(enemy.component::<EnemyAi>().unwrap().target, None);
        assert!(!enemy.component::<Movement2D>().unwrap().is_moving());
    }
}
