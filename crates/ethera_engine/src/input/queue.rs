//! Input event queue

use super::InputEvent;
use std::collections::VecDeque;

/// FIFO of input events waiting to be dispatched to the active scene
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<InputEvent>,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the next tick
    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Take every queued event in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.pending.drain(..)
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every queued event (used on scene transitions)
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{FocusEvent, KeyCode, KeyEvent};

    #[test]
    fn test_drain_preserves_arrival_order() {
        let mut queue = EventQueue::new();
        queue.push(InputEvent::KeyPressed(KeyEvent::new(KeyCode::A)));
        queue.push(InputEvent::FocusLost(FocusEvent::default()));

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], InputEvent::KeyPressed(_)));
        assert!(matches!(drained[1], InputEvent::FocusLost(_)));
        assert!(queue.is_empty());
    }
}
