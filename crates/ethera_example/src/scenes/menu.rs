use ethera_engine::prelude::*;
use ethera_engine::ui::SliderMarker;

use super::GAME_SCENE;

/// Name the menu is registered under
pub const MENU_SCENE: &str = "menu";

/// Where the menu widgets sit for a given window size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuLayout {
    /// Title text position
    pub title: (f32, f32),
    /// Volume slider track
    pub volume: Rect,
    /// Play button
    pub play: Rect,
}

impl MenuLayout {
    /// Layout centred in a `width` x `height` window
    pub fn new(width: u32, height: u32) -> Self {
        let center_x = width as f32 / 2.0;
        let height = height as f32;

        Self {
            title: (center_x - 90.0, height * 0.2),
            volume: Rect::new(center_x - 150.0, height * 0.45, 300.0, 20.0),
            play: Rect::new(center_x - 100.0, height * 0.6, 200.0, 60.0),
        }
    }
}

/// Title, a volume slider and a play button
pub struct MenuScene {
    layout: MenuLayout,
    volume: f32,
    play: Option<EntityId>,
    start_requested: bool,
}

impl MenuScene {
    /// Create the menu with the slider at `volume` (0.0 - 1.0)
    pub fn new(layout: MenuLayout, volume: f32) -> Self {
        Self {
            layout,
            volume,
            play: None,
            start_requested: false,
        }
    }
}

/// Volume (0.0 - 1.0) currently selected on the menu's slider
pub fn selected_volume(world: &World) -> Option<f32> {
    let slider = world.get(world.first_with::<SliderMarker>()?)?;
    let value = slider.component::<Value<f32>>()?;
    (value.max_value > 0.0).then(|| value.value / value.max_value)
}

impl SceneBehaviour for MenuScene {
    fn on_initialize(&mut self, scene: &mut Scene) -> Result<(), SceneError> {
        let MenuLayout { title, volume, play } = self.layout;

        let ids = scene.add_entities(vec![
            label(title.0, title.1, Text::new("Ethera", 48.0, Color::WHITE, TextStyle::BOLD)),
            slider(
                volume.x,
                volume.y,
                volume.width,
                volume.height,
                "Volume",
                16.0,
                Color::LIGHT_GRAY,
                TextStyle::PLAIN,
                self.volume * 100.0,
                Some(100.0),
            ),
            button(
                play.x,
                play.y,
                play.width,
                play.height,
                Text::new("Play", 24.0, Color::WHITE, TextStyle::BOLD),
            ),
        ]);
        self.play = ids.last().copied();
        Ok(())
    }

    fn on_enable(&mut self, _scene: &mut Scene) {
        self.start_requested = false;
    }

    fn on_update(&mut self, world: &mut World, _delta_ms: u64) {
        let clicked = self
            .play
            .and_then(|id| world.get(id))
            .and_then(|entity| entity.component::<Clickable>())
            .is_some_and(|clickable| clickable.clicked);

        if clicked {
            log::info!("Play pressed");
            self.start_requested = true;
        }
    }

    fn next_scene(&mut self) -> Option<String> {
        std::mem::take(&mut self.start_requested).then(|| GAME_SCENE.to_string())
    }
}
