//! Generic state component

use crate::ecs::Component;

/// Current state of an entity and when it was entered
#[derive(Debug, Clone, PartialEq)]
pub struct State<T> {
    /// Current state
    pub state: T,
    /// Time the state was entered, in milliseconds
    pub since_ms: u64,
}

impl<T: 'static> Component for State<T> {}

impl<T: PartialEq> State<T> {
    /// Create a state entered at time zero
    pub const fn new(state: T) -> Self {
        Self { state, since_ms: 0 }
    }

    /// Change the state; the entry time only moves when the state actually changes
    pub fn set(&mut self, state: T, now_ms: u64) -> bool {
        if self.state == state {
            return false;
        }
        self.state = state;
        self.since_ms = now_ms;
        true
    }

    /// Milliseconds spent in the current state
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.since_ms)
    }

    /// Whether the current state is one of `states`
    pub fn is_any(&self, states: &[T]) -> bool {
        states.contains(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Phase {
        Idle,
        Busy,
    }

    #[test]
    fn test_set_only_moves_time_on_change() {
        let mut state = State::new(Phase::Idle);
        assert!(state.set(Phase::Busy, 100));
        assert!(!state.set(Phase::Busy, 200));

        assert_eq!(state.since_ms, 100);
        assert_eq!(state.elapsed_ms(250), 150);
        assert!(state.is_any(&[Phase::Idle, Phase::Busy]));
    }
}
