//! Time management utilities

use std::time::{Duration, Instant};

/// Timing information for a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameTime {
    /// Game time of the frame in milliseconds
    pub now_ms: u64,
    /// Time since the previous frame in milliseconds
    pub delta_ms: u64,
}

impl FrameTime {
    /// Create a frame time
    pub const fn new(now_ms: u64, delta_ms: u64) -> Self {
        Self { now_ms, delta_ms }
    }

    /// Delta time in seconds
    pub fn delta_seconds(&self) -> f32 {
        self.delta_ms as f32 / 1_000.0
    }
}

/// Fixed-step game clock
#[derive(Debug, Default)]
pub struct Timer {
    delta_ms: u64,
    total_ms: u64,
    frame_count: u64,
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the timer by a fixed delta
    pub fn advance(&mut self, delta_ms: u64) {
        self.delta_ms = delta_ms;
        self.total_ms += delta_ms;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in milliseconds
    pub fn delta_ms(&self) -> u64 {
        self.delta_ms
    }

    /// Get the total elapsed time in milliseconds
    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Simple stopwatch for measuring wall-clock time
#[derive(Debug)]
pub struct Stopwatch {
    start_time: Option<Instant>,
    elapsed: Duration,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Create a new stopped stopwatch
    pub fn new() -> Self {
        Self {
            start_time: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Create a new stopwatch and start it immediately
    pub fn start_new() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }

    /// Start the stopwatch
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Stop the stopwatch and accumulate elapsed time
    pub fn stop(&mut self) {
        if let Some(start) = self.start_time.take() {
            self.elapsed += start.elapsed();
        }
    }

    /// Get the elapsed time
    pub fn elapsed(&self) -> Duration {
        self.elapsed + self.start_time.map_or(Duration::ZERO, |start| start.elapsed())
    }

    /// Get the elapsed time in milliseconds
    pub fn elapsed_millis(&self) -> f32 {
        self.elapsed().as_secs_f32() * 1000.0
    }

    /// Check if the stopwatch is currently running
    pub fn is_running(&self) -> bool {
        self.start_time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_time_seconds() {
        let time = FrameTime::new(0, 250);
        assert_eq!(time.delta_seconds(), 0.25);
    }

    #[test]
    fn test_timer_fixed_advance() {
        let mut timer = Timer::new();
        timer.advance(16);
        timer.advance(16);
        assert_eq!(timer.delta_ms(), 16);
        assert_eq!(timer.total_ms(), 32);
        assert_eq!(timer.frame_count(), 2);
    }

    #[test]
    fn test_stopwatch_stopped_by_default() {
        let stopwatch = Stopwatch::new();
        assert!(!stopwatch.is_running());
        assert_eq!(stopwatch.elapsed(), Duration::ZERO);
    }
}
