//! Scene: entities, systems and listeners that are active together

use super::registry::Registry;
use super::SceneError;
use crate::ecs::{Entity, EntityId, LogicSystem, RenderingSystem, SystemId, World};
use crate::foundation::time::FrameTime;
use crate::graphics::{Animation2DRenderingSystem, Graphics, Sprite2DRenderingSystem};
use crate::input::{
    FocusListener, InputEvent, KeyListener, MouseListener, MouseMotionListener, MouseWheelListener,
};
use crate::ui::{cursor, CursorListener, UiEventSystem, UiRenderingSystem, UiSliderValueSystem};

slotmap::new_key_type! {
    /// Handle to a registered input listener, used to unregister it
    pub struct ListenerId;
}

/// Game-specific part of a scene
///
/// Hooks receive the scene they belong to so they can register entities,
/// systems and listeners.
pub trait SceneBehaviour {
    /// Called every time the scene becomes initialized
    fn on_initialize(&mut self, scene: &mut Scene) -> Result<(), SceneError>;

    /// Called when the scene becomes the current scene
    fn on_enable(&mut self, _scene: &mut Scene) {}

    /// Called when the scene stops being the current scene
    fn on_disable(&mut self, _scene: &mut Scene) {}

    /// Called after the rendering systems each frame
    fn on_render(&mut self, _world: &World, _g: &mut dyn Graphics) {}

    /// Called after the logic systems each frame
    fn on_update(&mut self, _world: &mut World, _delta_ms: u64) {}

    /// Name of the scene to switch to, polled after every update
    fn next_scene(&mut self) -> Option<String> {
        None
    }
}

/// A set of entities with the systems and listeners that act on them
pub struct Scene {
    name: String,
    behaviour: Option<Box<dyn SceneBehaviour>>,
    initialized: bool,
    world: World,
    rendering_systems: Registry<SystemId, Box<dyn RenderingSystem>>,
    logic_systems: Registry<SystemId, Box<dyn LogicSystem>>,
    key_listeners: Registry<ListenerId, Box<dyn KeyListener>>,
    mouse_listeners: Registry<ListenerId, Box<dyn MouseListener>>,
    mouse_wheel_listeners: Registry<ListenerId, Box<dyn MouseWheelListener>>,
    mouse_motion_listeners: Registry<ListenerId, Box<dyn MouseMotionListener>>,
    focus_listeners: Registry<ListenerId, Box<dyn FocusListener>>,
}

impl Scene {
    /// Create an empty, uninitialized scene
    pub fn new(name: impl Into<String>, behaviour: impl SceneBehaviour + 'static) -> Self {
        Self {
            name: name.into(),
            behaviour: Some(Box::new(behaviour)),
            initialized: false,
            world: World::new(),
            rendering_systems: Registry::new(),
            logic_systems: Registry::new(),
            key_listeners: Registry::new(),
            mouse_listeners: Registry::new(),
            mouse_wheel_listeners: Registry::new(),
            mouse_motion_listeners: Registry::new(),
            focus_listeners: Registry::new(),
        }
    }

    /// Scene name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register the engine defaults
    ///
    /// Adds the cursor listener, the sprite, animation and UI rendering
    /// systems, the UI logic systems and the cursor entity. Any of them can be
    /// removed afterwards.
    pub fn init(&mut self) {
        self.add_mouse_motion_listeners(vec![Box::new(CursorListener)]);
        self.add_mouse_listeners(vec![Box::new(CursorListener)]);

        self.add_rendering_systems(vec![
            Box::new(Sprite2DRenderingSystem),
            Box::new(Animation2DRenderingSystem),
            Box::new(UiRenderingSystem),
        ]);
        self.add_logic_systems(vec![
            Box::new(UiEventSystem::default()),
            Box::new(UiSliderValueSystem),
        ]);

        self.add_entities(vec![cursor()]);
    }

    /// Whether the scene is initialized
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Initialize (runs `on_initialize`) or uninitialize (runs [`Scene::cleanup`])
    ///
    /// # Errors
    /// Propagates a failing `on_initialize`.
    pub fn set_initialized(&mut self, initialized: bool) -> Result<(), SceneError> {
        self.initialized = initialized;
        if initialized {
            self.with_behaviour(|behaviour, scene| behaviour.on_initialize(scene))
                .unwrap_or(Ok(()))
        } else {
            self.cleanup();
            Ok(())
        }
    }

    /// Clear everything, register the defaults again and initialize
    ///
    /// # Errors
    /// Propagates a failing `on_initialize`.
    pub fn re_initialize(&mut self) -> Result<(), SceneError> {
        self.set_initialized(false)?;
        self.init();
        self.set_initialized(true)
    }

    /// Remove every system, entity and listener
    pub fn cleanup(&mut self) {
        self.rendering_systems.clear();
        self.logic_systems.clear();
        self.world.clear();
        self.key_listeners.clear();
        self.mouse_listeners.clear();
        self.mouse_wheel_listeners.clear();
        self.mouse_motion_listeners.clear();
        self.focus_listeners.clear();
    }

    pub(crate) fn enable(&mut self) {
        self.with_behaviour(|behaviour, scene| behaviour.on_enable(scene));
    }

    pub(crate) fn disable(&mut self) {
        self.with_behaviour(|behaviour, scene| behaviour.on_disable(scene));
    }

    pub(crate) fn next_scene(&mut self) -> Option<String> {
        self.behaviour.as_mut().and_then(|behaviour| behaviour.next_scene())
    }

    fn with_behaviour<R>(&mut self, f: impl FnOnce(&mut dyn SceneBehaviour, &mut Self) -> R) -> Option<R> {
        let mut behaviour = self.behaviour.take()?;
        let result = f(behaviour.as_mut(), self);
        self.behaviour = Some(behaviour);
        Some(result)
    }

    /// The scene's entities
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The scene's entities, mutably
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Register rendering systems, run after the ones already registered
    pub fn add_rendering_systems(&mut self, systems: Vec<Box<dyn RenderingSystem>>) -> Vec<SystemId> {
        log::info!("Registering {} rendering systems", systems.len());
        log::debug!("{:?}", systems.iter().map(|s| s.name()).collect::<Vec<_>>());
        systems.into_iter().map(|system| self.rendering_systems.insert(system)).collect()
    }

    /// Unregister rendering systems, returning the ones that were registered
    pub fn remove_rendering_systems(&mut self, ids: &[SystemId]) -> Vec<Box<dyn RenderingSystem>> {
        log::info!("Unregistering {} rendering systems", ids.len());
        log::debug!("{:?}", ids);
        ids.iter().filter_map(|id| self.rendering_systems.remove(*id)).collect()
    }

    /// Register logic systems, run after the ones already registered
    pub fn add_logic_systems(&mut self, systems: Vec<Box<dyn LogicSystem>>) -> Vec<SystemId> {
        log::info!("Registering {} logic systems", systems.len());
        log::debug!("{:?}", systems.iter().map(|s| s.name()).collect::<Vec<_>>());
        systems.into_iter().map(|system| self.logic_systems.insert(system)).collect()
    }

    /// Unregister logic systems, returning the ones that were registered
    pub fn remove_logic_systems(&mut self, ids: &[SystemId]) -> Vec<Box<dyn LogicSystem>> {
        log::info!("Unregistering {} logic systems", ids.len());
        log::debug!("{:?}", ids);
        ids.iter().filter_map(|id| self.logic_systems.remove(*id)).collect()
    }

    /// Add entities to the scene's world
    pub fn add_entities(&mut self, entities: Vec<Entity>) -> Vec<EntityId> {
        log::info!("Registering {} entities", entities.len());
        log::debug!("{:?}", entities);
        self.world.spawn_batch(entities)
    }

    /// Remove entities from the scene's world, returning the ones that existed
    pub fn remove_entities(&mut self, ids: &[EntityId]) -> Vec<Entity> {
        log::info!("Unregistering {} entities", ids.len());
        let removed: Vec<_> = ids.iter().filter_map(|id| self.world.despawn(*id)).collect();
        log::debug!("{:?}", removed);
        removed
    }

    /// Register key listeners
    pub fn add_key_listeners(&mut self, listeners: Vec<Box<dyn KeyListener>>) -> Vec<ListenerId> {
        log::info!("Registering {} key listeners", listeners.len());
        add_all(&mut self.key_listeners, listeners)
    }

    /// Unregister key listeners
    pub fn remove_key_listeners(&mut self, ids: &[ListenerId]) -> Vec<Box<dyn KeyListener>> {
        log::info!("Unregistering {} key listeners", ids.len());
        remove_all(&mut self.key_listeners, ids)
    }

    /// Register mouse listeners
    pub fn add_mouse_listeners(&mut self, listeners: Vec<Box<dyn MouseListener>>) -> Vec<ListenerId> {
        log::info!("Registering {} mouse listeners", listeners.len());
        add_all(&mut self.mouse_listeners, listeners)
    }

    /// Unregister mouse listeners
    pub fn remove_mouse_listeners(&mut self, ids: &[ListenerId]) -> Vec<Box<dyn MouseListener>> {
        log::info!("Unregistering {} mouse listeners", ids.len());
        remove_all(&mut self.mouse_listeners, ids)
    }

    /// Register mouse wheel listeners
    pub fn add_mouse_wheel_listeners(&mut self, listeners: Vec<Box<dyn MouseWheelListener>>) -> Vec<ListenerId> {
        log::info!("Registering {} mouse wheel listeners", listeners.len());
        add_all(&mut self.mouse_wheel_listeners, listeners)
    }

    /// Unregister mouse wheel listeners
    pub fn remove_mouse_wheel_listeners(&mut self, ids: &[ListenerId]) -> Vec<Box<dyn MouseWheelListener>> {
        log::info!("Unregistering {} mouse wheel listeners", ids.len());
        remove_all(&mut self.mouse_wheel_listeners, ids)
    }

    /// Register mouse motion listeners
    pub fn add_mouse_motion_listeners(&mut self, listeners: Vec<Box<dyn MouseMotionListener>>) -> Vec<ListenerId> {
        log::info!("Registering {} mouse motion listeners", listeners.len());
        add_all(&mut self.mouse_motion_listeners, listeners)
    }

    /// Unregister mouse motion listeners
    pub fn remove_mouse_motion_listeners(&mut self, ids: &[ListenerId]) -> Vec<Box<dyn MouseMotionListener>> {
        log::info!("Unregistering {} mouse motion listeners", ids.len());
        remove_all(&mut self.mouse_motion_listeners, ids)
    }

    /// Register focus listeners
    pub fn add_focus_listeners(&mut self, listeners: Vec<Box<dyn FocusListener>>) -> Vec<ListenerId> {
        log::info!("Registering {} focus listeners", listeners.len());
        add_all(&mut self.focus_listeners, listeners)
    }

    /// Unregister focus listeners
    pub fn remove_focus_listeners(&mut self, ids: &[ListenerId]) -> Vec<Box<dyn FocusListener>> {
        log::info!("Unregistering {} focus listeners", ids.len());
        remove_all(&mut self.focus_listeners, ids)
    }

    /// Names of the rendering systems in run order
    pub fn rendering_system_names(&self) -> Vec<&str> {
        self.rendering_systems.iter().map(|(_, s)| s.name()).collect()
    }

    /// Names of the logic systems in run order
    pub fn logic_system_names(&self) -> Vec<&str> {
        self.logic_systems.iter().map(|(_, s)| s.name()).collect()
    }

    /// Total number of registered listeners across all kinds
    pub fn listener_count(&self) -> usize {
        self.key_listeners.len()
            + self.mouse_listeners.len()
            + self.mouse_wheel_listeners.len()
            + self.mouse_motion_listeners.len()
            + self.focus_listeners.len()
    }

    /// Run every rendering system in registration order, then `on_render`
    ///
    /// # Errors
    /// Stops at the first failing system.
    pub fn render(&mut self, g: &mut dyn Graphics, time: FrameTime) -> Result<(), SceneError> {
        for (_, system) in self.rendering_systems.iter_mut() {
            system.render(&self.world, g, time).map_err(|source| SceneError::System {
                system: system.name().to_string(),
                source,
            })?;
        }

        if let Some(behaviour) = self.behaviour.as_mut() {
            behaviour.on_render(&self.world, g);
        }
        Ok(())
    }

    /// Run every logic system in registration order, then `on_update`
    ///
    /// # Errors
    /// Stops at the first failing system.
    pub fn update(&mut self, time: FrameTime) -> Result<(), SceneError> {
        for (_, system) in self.logic_systems.iter_mut() {
            system.update(&mut self.world, time).map_err(|source| SceneError::System {
                system: system.name().to_string(),
                source,
            })?;
        }

        if let Some(behaviour) = self.behaviour.as_mut() {
            behaviour.on_update(&mut self.world, time.delta_ms);
        }
        Ok(())
    }

    /// Forward an input event to every listener of its kind, in registration order
    pub fn dispatch(&mut self, event: &InputEvent) {
        let world = &mut self.world;
        match event {
            InputEvent::KeyTyped(e) => each(&mut self.key_listeners, |l| l.key_typed(world, e)),
            InputEvent::KeyPressed(e) => each(&mut self.key_listeners, |l| l.key_pressed(world, e)),
            InputEvent::KeyReleased(e) => each(&mut self.key_listeners, |l| l.key_released(world, e)),
            InputEvent::MouseClicked(e) => each(&mut self.mouse_listeners, |l| l.mouse_clicked(world, e)),
            InputEvent::MousePressed(e) => each(&mut self.mouse_listeners, |l| l.mouse_pressed(world, e)),
            InputEvent::MouseReleased(e) => each(&mut self.mouse_listeners, |l| l.mouse_released(world, e)),
            InputEvent::MouseEntered(e) => each(&mut self.mouse_listeners, |l| l.mouse_entered(world, e)),
            InputEvent::MouseExited(e) => each(&mut self.mouse_listeners, |l| l.mouse_exited(world, e)),
            InputEvent::MouseWheelMoved(e) => {
                each(&mut self.mouse_wheel_listeners, |l| l.mouse_wheel_moved(world, e));
            }
            InputEvent::MouseDragged(e) => each(&mut self.mouse_motion_listeners, |l| l.mouse_dragged(world, e)),
            InputEvent::MouseMoved(e) => each(&mut self.mouse_motion_listeners, |l| l.mouse_moved(world, e)),
            InputEvent::FocusGained(e) => each(&mut self.focus_listeners, |l| l.focus_gained(world, e)),
            InputEvent::FocusLost(e) => each(&mut self.focus_listeners, |l| l.focus_lost(world, e)),
        }
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("initialized", &self.initialized)
            .field("entities", &self.world.len())
            .field("rendering_systems", &self.rendering_system_names())
            .field("logic_systems", &self.logic_system_names())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

fn add_all<T: ?Sized>(registry: &mut Registry<ListenerId, Box<T>>, listeners: Vec<Box<T>>) -> Vec<ListenerId> {
    let ids: Vec<_> = listeners.into_iter().map(|listener| registry.insert(listener)).collect();
    log::debug!("{:?}", ids);
    ids
}

fn remove_all<T: ?Sized>(registry: &mut Registry<ListenerId, Box<T>>, ids: &[ListenerId]) -> Vec<Box<T>> {
    log::debug!("{:?}", ids);
    ids.iter().filter_map(|id| registry.remove(*id)).collect()
}

fn each<T: ?Sized>(registry: &mut Registry<ListenerId, Box<T>>, mut f: impl FnMut(&mut T)) {
    for (_, listener) in registry.iter_mut() {
        f(listener.as_mut());
    }
}
