use super::MENU_SCENE;
use crate::components::{CharacterState, Enemy, EntityState, Health, Player};
use crate::config::GameConfig;
use crate::entities::{enemy, player, BODY_SIZE};
use crate::systems::{
    CombatSystem, DespawnSystem, EnemyAiSystem, EntityAnimationSystem, EntityPositionMovementSystem,
    EntityStateSystem, PlayerControlListener,
};
use crate::world::ExampleWorld;
use ethera_engine::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Name the game is registered under
pub const GAME_SCENE: &str = "game";

/// Time the result stays on screen before returning to the menu
pub const RESULT_SCREEN_MS: u64 = 2_000;

// Enemies never spawn closer than this to the player
const SAFE_DISTANCE: f32 = 200.0;
const PLACEMENT_ATTEMPTS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Victory,
    Defeat,
}

/// Tile map, one player and a handful of enemies
///
/// Returning to this scene after a finished round starts a new one.
pub struct GameScene {
    config: GameConfig,
    map: ExampleWorld,
    animations: Vec<(String, Animation2D)>,
    rng: StdRng,
    player: Option<EntityId>,
    outcome: Option<Outcome>,
    outcome_ms: u64,
    leave: bool,
}

impl GameScene {
    /// Create the scene; the map and animations must already be loaded
    pub fn new(config: GameConfig, map: ExampleWorld, animations: Vec<(String, Animation2D)>) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            config,
            map,
            animations,
            rng,
            player: None,
            outcome: None,
            outcome_ms: 0,
            leave: false,
        }
    }

    fn populate(&mut self, scene: &mut Scene) {
        let tiles = self.map.tiles(&mut self.rng);
        scene.add_entities(tiles);

        let bounds = self.map.walkable_bounds();
        let center = bounds.center();
        let start = Vec2::new(center.x - BODY_SIZE / 2.0, center.y - BODY_SIZE / 2.0);
        self.player = scene
            .add_entities(vec![player(start.x, start.y, &self.animations)])
            .first()
            .copied();

        let enemies = (0..self.config.enemy_count)
            .map(|_| {
                let at = self.spawn_point(bounds, start);
                enemy(at.x, at.y, &self.animations)
            })
            .collect();
        scene.add_entities(enemies);

        scene.add_logic_systems(vec![
            Box::new(EntityPositionMovementSystem::with_bounds(bounds)),
            Box::new(EnemyAiSystem::new()),
            Box::new(CombatSystem::new()),
            Box::new(EntityStateSystem::new()),
            Box::new(EntityAnimationSystem::new()),
            Box::new(DespawnSystem::new()),
        ]);
        scene.add_key_listeners(vec![Box::new(PlayerControlListener::new())]);

        log::info!("New round with {} enemies", self.config.enemy_count);
    }

    /// Random top-left corner inside `bounds`, away from `player` when possible
    fn spawn_point(&mut self, bounds: Rect, player: Vec2) -> Vec2 {
        let max_x = (bounds.right() - BODY_SIZE).max(bounds.x);
        let max_y = (bounds.bottom() - BODY_SIZE).max(bounds.y);

        let mut point = Vec2::new(bounds.x, bounds.y);
        for _ in 0..PLACEMENT_ATTEMPTS {
            point = Vec2::new(
                self.rng.gen_range(bounds.x..=max_x),
                self.rng.gen_range(bounds.y..=max_y),
            );
            if (point - player).norm() >= SAFE_DISTANCE {
                break;
            }
        }
        point
    }

    fn player_health(&self, world: &World) -> f32 {
        self.player
            .and_then(|id| world.get(id))
            .and_then(|entity| entity.component::<Health>())
            .map_or(0.0, |health| health.health)
    }
}

impl SceneBehaviour for GameScene {
    fn on_initialize(&mut self, scene: &mut Scene) -> Result<(), SceneError> {
        self.populate(scene);
        Ok(())
    }

    fn on_enable(&mut self, scene: &mut Scene) {
        if self.outcome.take().is_some() {
            scene.cleanup();
            scene.init();
            self.populate(scene);
        }
        self.outcome_ms = 0;
        self.leave = false;
    }

    fn on_render(&mut self, world: &World, g: &mut dyn Graphics) {
        let enemies = world.with_component::<Enemy>().count();
        g.draw_text(&format!("Health: {}", self.player_health(world)), 16.0, 16.0, 20.0, Color::WHITE);
        g.draw_text(&format!("Enemies: {}", enemies), 16.0, 40.0, 20.0, Color::WHITE);

        if let Some(outcome) = self.outcome {
            let (width, height) = g.size();
            let text = match outcome {
                Outcome::Victory => "Victory",
                Outcome::Defeat => "Game Over",
            };
            g.draw_text(text, width as f32 / 2.0 - 80.0, height as f32 / 2.0, 48.0, Color::WHITE);
        }
    }

    fn on_update(&mut self, world: &mut World, delta_ms: u64) {
        if self.outcome.is_some() {
            self.outcome_ms += delta_ms;
            self.leave = self.outcome_ms >= RESULT_SCREEN_MS;
            return;
        }

        let player_dead = self
            .player
            .and_then(|id| world.get(id))
            .and_then(|entity| entity.component::<CharacterState>())
            .map_or(true, |state| state.state == EntityState::Dead);
        let enemies_left = world.with_component::<Enemy>().count();

        if player_dead {
            log::info!("Player died, {} enemies left", enemies_left);
            self.outcome = Some(Outcome::Defeat);
        } else if self.config.enemy_count > 0 && enemies_left == 0 {
            log::info!("All enemies defeated");
            self.outcome = Some(Outcome::Victory);
        }
    }

    fn next_scene(&mut self) -> Option<String> {
        std::mem::take(&mut self.leave).then(|| MENU_SCENE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animations::character_animations;
    use crate::world::Tile;

    struct Stage;

    impl SceneBehaviour for Stage {
        fn on_initialize(&mut self, _scene: &mut Scene) -> Result<(), SceneError> {
            Ok(())
        }
    }

    fn manager(enemy_count: u32) -> SceneManager {
        let dir = tempfile::tempdir().unwrap();
        let mut assets = AssetManager::with_search_paths(vec![dir.path().to_path_buf()]);
        let animations = character_animations(&mut assets).unwrap();
        let map = ExampleWorld::new(&mut assets, 800, 600).unwrap();
        let config = GameConfig {
            enemy_count,
            ..GameConfig::default()
        };

        let mut scenes = SceneManager::new();
        scenes.register(Scene::new(MENU_SCENE, Stage)).unwrap();
        scenes.register(Scene::new(GAME_SCENE, GameScene::new(config, map, animations))).unwrap();
        scenes.switch_to(GAME_SCENE).unwrap();
        scenes
    }

    fn world(scenes: &SceneManager) -> &World {
        scenes.scene(GAME_SCENE).unwrap().world()
    }

    fn kill_player(scenes: &mut SceneManager) {
        let world = scenes.scene_mut(GAME_SCENE).unwrap().world_mut();
        let id = world.first_with::<Player>().unwrap();
        world.get_mut(id).unwrap().add_component(CharacterState::new(EntityState::Dead));
    }

    #[test]
    fn test_round_is_populated() {
        let scenes = manager(3);
        let world = world(&scenes);

        assert_eq!(world.with_component::<Tile>().count(), 16 * 12);
        assert_eq!(world.with_component::<Player>().count(), 1);
        assert_eq!(world.with_component::<Enemy>().count(), 3);
        assert_eq!(
            scenes.scene(GAME_SCENE).unwrap().logic_system_names()[2..],
            [
                "EntityPositionMovementSystem",
                "EnemyAiSystem",
                "CombatSystem",
                "EntityStateSystem",
                "EntityAnimationSystem",
                "DespawnSystem",
            ]
        );
    }

    #[test]
    fn test_enemies_spawn_inside_walkable_area() {
        let scenes = manager(5);
        let bounds = Rect::new(50.0, 50.0, 700.0, 500.0);

        for (_, enemy) in world(&scenes).with_component::<Enemy>() {
            let position = enemy.component::<Position>().unwrap();
            assert!(position.x >= bounds.x && position.x + BODY_SIZE <= bounds.right());
            assert!(position.y >= bounds.y && position.y + BODY_SIZE <= bounds.bottom());
        }
    }

    #[test]
    fn test_defeat_returns_to_menu_and_resets() {
        let mut scenes = manager(2);
        kill_player(&mut scenes);

        let mut now_ms = 0;
        while scenes.current_name() == Some(GAME_SCENE) && now_ms <= RESULT_SCREEN_MS * 2 {
            now_ms += 100;
            scenes.update(FrameTime::new(now_ms, 100)).unwrap();
        }
        assert_eq!(scenes.current_name(), Some(MENU_SCENE));

        scenes.switch_to(GAME_SCENE).unwrap();
        let world = world(&scenes);
        let player = world.first_with::<Player>().unwrap();
        assert_eq!(world.get(player).unwrap().component::<Health>().unwrap().health, 5.0);
        assert_eq!(world.with_component::<Enemy>().count(), 2);
    }

    #[test]
    fn test_hud_shows_health_and_enemies() {
        let mut scenes = manager(3);
        let mut canvas = Canvas::new(800, 600);
        scenes.render(&mut canvas, FrameTime::new(0, 16)).unwrap();

        let texts: Vec<&str> = canvas.texts().iter().map(|t| t.text.as_str()).collect();
        assert!(texts.contains(&"Health: 5"));
        assert!(texts.contains(&"Enemies: 3"));
    }
}
