//! Movement component for entities that move in 2D space

use crate::ecs::Component;
use crate::foundation::math::Vec2;

/// Direction and speed of a moving entity
///
/// The displacement per second is `(vx, vy) * speed`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Movement2D {
    /// Horizontal direction, usually in [-1, 1]
    pub vx: f32,
    /// Vertical direction, usually in [-1, 1]
    pub vy: f32,
    /// Pixels per second along the direction
    pub speed: f32,
}

impl Component for Movement2D {}

impl Movement2D {
    /// Stationary movement with the given speed
    pub const fn new(speed: f32) -> Self {
        Self { vx: 0.0, vy: 0.0, speed }
    }

    /// Set the direction, normalising diagonals so they are not faster
    pub fn set_direction(&mut self, vx: f32, vy: f32) {
        let direction = Vec2::new(vx, vy);
        let length = direction.norm();
        if length > 1.0 {
            self.vx = vx / length;
            self.vy = vy / length;
        } else {
            self.vx = vx;
            self.vy = vy;
        }
    }

    /// Stop moving
    pub fn stop(&mut self) {
        self.vx = 0.0;
        self.vy = 0.0;
    }

    /// Whether the entity currently moves
    pub fn is_moving(&self) -> bool {
        (self.vx != 0.0 || self.vy != 0.0) && self.speed != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_diagonal_is_normalised() {
        let mut movement = Movement2D::new(100.0);
        movement.set_direction(1.0, 1.0);

        assert_relative_eq!(movement.vx, std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-6);
        assert_relative_eq!(movement.vy, std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-6);
        assert!(movement.is_moving());
    }

    #[test]
    fn test_stop() {
        let mut movement = Movement2D::new(100.0);
        movement.set_direction(-1.0, 0.0);
        movement.stop();
        assert!(!movement.is_moving());
    }
}
