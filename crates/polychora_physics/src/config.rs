//! Integrator parameters

use serde::{Serialize, Deserialize};

/// Parameters of the rigid-body integrator
///
/// Resistances are per-tick multipliers (1.0 = no damping). Angular
/// velocities are in degrees per second before `angular_velocity_modifier`
/// is applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Linear velocity multiplier applied every tick
    pub air_resistance: f32,
    /// Angular velocity multiplier applied every tick
    pub angular_air_resistance: f32,
    /// Linear velocity multiplier applied on each floor bounce
    pub bounce_resistance: f32,
    /// Angular velocity multiplier applied on each floor bounce
    pub angular_bounce_resistance: f32,
    /// Downward acceleration along Y (positive = down)
    pub gravity: f32,
    /// Scale from angular velocity to degrees per second
    pub angular_velocity_modifier: f32,
    /// Maximum horizontal speed of a random flick
    pub flick_velocity: f32,
    /// Maximum angular speed of a random flick, per plane
    pub flick_angular_velocity: f32,
    /// Height of the floor plane
    pub floor_y: f32,
    /// Below this vertical speed a floor contact stops the body
    pub rest_threshold: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            air_resistance: 0.999,
            angular_air_resistance: 1.0,
            bounce_resistance: 0.95,
            angular_bounce_resistance: 0.9,
            gravity: 9.81,
            angular_velocity_modifier: 20.0,
            flick_velocity: 5.0,
            flick_angular_velocity: 5.0,
            floor_y: 1.0,
            rest_threshold: 0.5,
        }
    }
}

impl PhysicsConfig {
    /// Config with the given gravity and no damping anywhere
    pub fn frictionless(gravity: f32) -> Self {
        Self {
            air_resistance: 1.0,
            angular_air_resistance: 1.0,
            bounce_resistance: 1.0,
            angular_bounce_resistance: 1.0,
            gravity,
            ..Self::default()
        }
    }

    /// Set the floor height
    pub fn with_floor(mut self, floor_y: f32) -> Self {
        self.floor_y = floor_y;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PhysicsConfig::default();
        assert_eq!(config.air_resistance, 0.999);
        assert_eq!(config.gravity, 9.81);
        assert_eq!(config.angular_velocity_modifier, 20.0);
        assert_eq!(config.floor_y, 1.0);
        assert_eq!(config.rest_threshold, 0.5);
    }

    #[test]
    fn test_frictionless() {
        let config = PhysicsConfig::frictionless(0.0).with_floor(-100.0);
        assert_eq!(config.air_resistance, 1.0);
        assert_eq!(config.bounce_resistance, 1.0);
        assert_eq!(config.gravity, 0.0);
        assert_eq!(config.floor_y, -100.0);
        assert_eq!(config.flick_velocity, 5.0);
    }
}
