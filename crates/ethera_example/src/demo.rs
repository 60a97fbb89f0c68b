//! Scripted input for unattended runs
//!
//! Moves the volume slider, presses Play, then walks the player around and
//! swings at whatever comes close.

use crate::scenes::MenuLayout;
use ethera_engine::prelude::*;

/// Frame-indexed input script
#[derive(Debug, Clone)]
pub struct DemoInput {
    frame: u64,
    script: Vec<(u64, InputEvent)>,
    next: usize,
}

fn key(pressed: bool, key: KeyCode) -> InputEvent {
    if pressed {
        InputEvent::KeyPressed(KeyEvent::new(key))
    } else {
        InputEvent::KeyReleased(KeyEvent::new(key))
    }
}

impl DemoInput {
    /// Script for the menu laid out by `layout`
    pub fn new(layout: MenuLayout) -> Self {
        let volume = Vec2::new(layout.volume.x + layout.volume.width * 0.7, layout.volume.center().y);
        let play = layout.play.center();
        let left = |x: f32, y: f32| MouseEvent::at(x, y).with_button(MouseButton::Left);

        let mut script = vec![
            (5, InputEvent::MouseMoved(MouseEvent::at(volume.x, volume.y))),
            (8, InputEvent::MousePressed(left(volume.x, volume.y))),
            (12, InputEvent::MouseReleased(left(volume.x, volume.y))),
            (20, InputEvent::MouseMoved(MouseEvent::at(play.x, play.y))),
            (22, InputEvent::MousePressed(left(play.x, play.y))),
            (24, InputEvent::MouseReleased(left(play.x, play.y))),
            (40, key(true, KeyCode::D)),
            (80, key(false, KeyCode::D)),
            (85, key(true, KeyCode::W)),
            (105, key(false, KeyCode::W)),
        ];

        for (round, frame) in (120..480).step_by(30).enumerate() {
            let direction = if round % 2 == 0 { KeyCode::A } else { KeyCode::S };
            script.push((frame, key(true, KeyCode::Space)));
            script.push((frame + 2, key(false, KeyCode::Space)));
            script.push((frame + 5, key(true, direction)));
            script.push((frame + 15, key(false, direction)));
        }
        script.sort_by_key(|(frame, _)| *frame);

        Self { frame: 0, script, next: 0 }
    }

    /// Events due on the current frame; advances to the next frame
    pub fn poll(&mut self) -> Vec<InputEvent> {
        let start = self.next;
        while self.next < self.script.len() && self.script[self.next].0 <= self.frame {
            self.next += 1;
        }
        self.frame += 1;

        self.script[start..self.next].iter().map(|(_, event)| event.clone()).collect()
    }

    /// Whether every scripted event has been delivered
    pub fn is_finished(&self) -> bool {
        self.next >= self.script.len()
    }
}
