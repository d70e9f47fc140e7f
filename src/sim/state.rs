//! Ball entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MASS_SCALE_BY_RADIUS;

/// A circular body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Unique per manager until its id counter wraps at `u32::MAX`
    pub id: u32,
    pub center: Vec2,
    pub radius: f32,
    pub vel: Vec2,
    pub acc: Vec2,
    /// Always `radius * mass scale`
    pub mass: f32,
}

impl Ball {
    /// Ball at rest with mass derived from radius
    pub fn new(id: u32, x: f32, y: f32, radius: f32) -> Self {
        Self {
            id,
            center: Vec2::new(x, y),
            radius,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            mass: radius * MASS_SCALE_BY_RADIUS,
        }
    }

    /// Re-derive mass from the current radius
    #[inline]
    pub fn recompute_mass(&mut self, mass_scale_by_radius: f32) {
        self.mass = self.radius * mass_scale_by_radius;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ball_is_at_rest() {
        let ball = Ball::new(3, 12.5, -40.0, 4.0);
        assert_eq!(ball.id, 3);
        assert_eq!(ball.center, Vec2::new(12.5, -40.0));
        assert_eq!(ball.radius, 4.0);
        assert_eq!(ball.vel, Vec2::ZERO);
        assert_eq!(ball.acc, Vec2::ZERO);
        assert_eq!(ball.mass, 40.0);
    }

    #[test]
    fn test_radius_is_not_validated() {
        let ball = Ball::new(0, 0.0, 0.0, -1.5);
        assert_eq!(ball.mass, -15.0);
    }

    #[test]
    fn test_recompute_mass_uses_given_scale() {
        let mut ball = Ball::new(0, 0.0, 0.0, 3.0);
        ball.radius = 6.0;
        ball.recompute_mass(2.5);
        assert_eq!(ball.mass, 15.0);
    }
}
