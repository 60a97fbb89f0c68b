//! Scene manager
//!
//! Holds every registered scene and at most one current scene. Update,
//! render and input calls go to the current scene only.

use super::{Scene, SceneError};
use crate::foundation::time::FrameTime;
use crate::graphics::Graphics;
use crate::input::InputEvent;
use std::collections::HashMap;

/// Registry of named scenes with a single current scene
#[derive(Debug, Default)]
pub struct SceneManager {
    scenes: HashMap<String, Scene>,
    current: Option<String>,
}

impl SceneManager {
    /// Create a manager with no scenes
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scene under its name, registering its defaults and initializing it
    ///
    /// # Errors
    /// Fails when the name is taken or the scene's `on_initialize` fails.
    pub fn register(&mut self, mut scene: Scene) -> Result<(), SceneError> {
        let name = scene.name().to_string();
        if self.scenes.contains_key(&name) {
            return Err(SceneError::DuplicateScene(name));
        }

        log::info!("Registering scene {}", name);
        scene.init();
        scene.set_initialized(true)?;
        self.scenes.insert(name, scene);
        Ok(())
    }

    /// Remove a scene, cleaning it up; clears the current scene if it was current
    pub fn unregister(&mut self, name: &str) -> Option<Scene> {
        if self.current.as_deref() == Some(name) {
            self.disable_current();
            self.current = None;
        }

        let mut scene = self.scenes.remove(name)?;
        log::info!("Unregistering scene {}", name);
        scene.cleanup();
        Some(scene)
    }

    /// Change the current scene
    ///
    /// The old scene is disabled before the new one is enabled. `None` leaves
    /// no scene current.
    ///
    /// # Errors
    /// Returns [`SceneError::UnknownScene`] for unregistered names, leaving
    /// the current scene untouched.
    pub fn set_current(&mut self, name: Option<&str>) -> Result<(), SceneError> {
        if let Some(name) = name {
            if !self.scenes.contains_key(name) {
                return Err(SceneError::UnknownScene(name.to_string()));
            }
        }

        self.disable_current();
        self.current = name.map(str::to_string);

        if let Some(scene) = self.current_mut() {
            log::info!("Enabling scene {}", scene.name());
            scene.enable();
        }
        Ok(())
    }

    /// Make the named scene current
    ///
    /// # Errors
    /// Returns [`SceneError::UnknownScene`] for unregistered names.
    pub fn switch_to(&mut self, name: &str) -> Result<(), SceneError> {
        self.set_current(Some(name))
    }

    fn disable_current(&mut self) {
        if let Some(scene) = self.current_mut() {
            log::info!("Disabling scene {}", scene.name());
            scene.disable();
        }
    }

    /// Name of the current scene
    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The current scene
    pub fn current(&self) -> Option<&Scene> {
        self.current.as_deref().and_then(|name| self.scenes.get(name))
    }

    /// The current scene, mutably
    pub fn current_mut(&mut self) -> Option<&mut Scene> {
        let name = self.current.as_deref()?;
        self.scenes.get_mut(name)
    }

    /// A registered scene
    pub fn scene(&self, name: &str) -> Option<&Scene> {
        self.scenes.get(name)
    }

    /// A registered scene, mutably
    pub fn scene_mut(&mut self, name: &str) -> Option<&mut Scene> {
        self.scenes.get_mut(name)
    }

    /// Number of registered scenes
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether no scene is registered
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Update the current scene, then follow any switch it requests
    ///
    /// # Errors
    /// Propagates system failures and unknown switch targets.
    pub fn update(&mut self, time: FrameTime) -> Result<(), SceneError> {
        let Some(scene) = self.current_mut() else {
            return Ok(());
        };
        scene.update(time)?;

        if let Some(next) = scene.next_scene() {
            self.switch_to(&next)?;
        }
        Ok(())
    }

    /// Render the current scene
    ///
    /// # Errors
    /// Propagates system failures.
    pub fn render(&mut self, g: &mut dyn Graphics, time: FrameTime) -> Result<(), SceneError> {
        match self.current_mut() {
            Some(scene) => scene.render(g, time),
            None => Ok(()),
        }
    }

    /// Forward an input event to the current scene
    pub fn dispatch(&mut self, event: &InputEvent) {
        if let Some(scene) = self.current_mut() {
            scene.dispatch(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::World;
    use crate::graphics::Canvas;
    use crate::scene::SceneBehaviour;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Tracked {
        name: &'static str,
        log: Log,
        next: Option<String>,
    }

    impl SceneBehaviour for Tracked {
        fn on_initialize(&mut self, _scene: &mut Scene) -> Result<(), SceneError> {
            self.log.borrow_mut().push(format!("{} initialize", self.name));
            Ok(())
        }

        fn on_enable(&mut self, _scene: &mut Scene) {
            self.log.borrow_mut().push(format!("{} enable", self.name));
        }

        fn on_disable(&mut self, _scene: &mut Scene) {
            self.log.borrow_mut().push(format!("{} disable", self.name));
        }

        fn on_update(&mut self, _world: &mut World, _delta_ms: u64) {
            self.log.borrow_mut().push(format!("{} update", self.name));
        }

        fn next_scene(&mut self) -> Option<String> {
            self.next.take()
        }
    }

    fn manager(log: &Log) -> SceneManager {
        let mut scenes = SceneManager::new();
        for name in ["menu", "game"] {
            let behaviour = Tracked {
                name,
                log: Rc::clone(log),
                next: None,
            };
            scenes.register(Scene::new(name, behaviour)).unwrap();
        }
        scenes
    }

    #[test]
    fn test_register_initializes() {
        let log = Log::default();
        let scenes = manager(&log);

        assert_eq!(*log.borrow(), vec!["menu initialize", "game initialize"]);
        assert!(scenes.scene("menu").unwrap().is_initialized());
        assert!(scenes.current().is_none());
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let log = Log::default();
        let mut scenes = manager(&log);
        let again = Scene::new("menu", Tracked { name: "menu", log, next: None });
        assert!(matches!(scenes.register(again), Err(SceneError::DuplicateScene(_))));
    }

    #[test]
    fn test_switch_disables_old_then_enables_new() {
        let log = Log::default();
        let mut scenes = manager(&log);
        log.borrow_mut().clear();

        scenes.switch_to("menu").unwrap();
        scenes.switch_to("game").unwrap();
        scenes.set_current(None).unwrap();

        assert_eq!(*log.borrow(), vec!["menu enable", "menu disable", "game enable", "game disable"]);
        assert_eq!(scenes.current_name(), None);
    }

    #[test]
    fn test_unknown_scene_keeps_current() {
        let log = Log::default();
        let mut scenes = manager(&log);
        scenes.switch_to("menu").unwrap();

        assert!(matches!(scenes.switch_to("credits"), Err(SceneError::UnknownScene(_))));
        assert_eq!(scenes.current_name(), Some("menu"));
    }

    #[test]
    fn test_calls_without_current_scene_are_noops() {
        let log = Log::default();
        let mut scenes = manager(&log);
        log.borrow_mut().clear();

        scenes.update(FrameTime::default()).unwrap();
        scenes.render(&mut Canvas::new(2, 2), FrameTime::default()).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_update_follows_requested_switch() {
        let log = Log::default();
        let mut scenes = manager(&log);
        let behaviour = Tracked {
            name: "intro",
            log: Rc::clone(&log),
            next: Some("menu".to_string()),
        };
        scenes.register(Scene::new("intro", behaviour)).unwrap();
        scenes.switch_to("intro").unwrap();
        log.borrow_mut().clear();

        scenes.update(FrameTime::default()).unwrap();
        assert_eq!(scenes.current_name(), Some("menu"));
        assert_eq!(*log.borrow(), vec!["intro update", "intro disable", "menu enable"]);
    }

    #[test]
    fn test_unregister_current_scene() {
        let log = Log::default();
        let mut scenes = manager(&log);
        scenes.switch_to("game").unwrap();

        let game = scenes.unregister("game").unwrap();
        assert!(game.world().is_empty());
        assert_eq!(scenes.current_name(), None);
        assert_eq!(scenes.len(), 1);
    }
}
