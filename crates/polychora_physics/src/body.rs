//! Rigid body integrator for 4D objects
//!
//! Explicit Euler integration of linear and angular velocity against a
//! horizontal floor plane. On each bounce part of the body's energy is
//! randomly redistributed between linear and angular motion, which keeps
//! tumbling shapes from settling into a single rotation plane.

use polychora_math::{RotationPlane, RotationState, Vec4};
use rand::Rng;

use crate::config::PhysicsConfig;

/// Planes in the order bounce energy is handed out to them
const SHUFFLE_PLANES: [RotationPlane; 6] = [
    RotationPlane::XY,
    RotationPlane::XZ,
    RotationPlane::XW,
    RotationPlane::YZ,
    RotationPlane::YW,
    RotationPlane::ZW,
];

/// What happened during one integration step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Integrated without touching the floor
    Moving,
    /// Hit the floor fast enough to bounce
    Bounced,
    /// Hit the floor too slowly to bounce; all motion was cleared
    Resting,
}

/// Motion state of one rigid body
///
/// The body does not own its position or rotation: those live in the
/// entity's transform and are passed into [`RigidBody4D::step`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RigidBody4D {
    /// Velocity in 4D space (units per second)
    pub velocity: Vec4,
    /// Constant acceleration (units per second squared), on top of gravity
    pub acceleration: Vec4,
    /// Angular velocity per plane (scaled by `angular_velocity_modifier`)
    pub angular_velocity: RotationState,
    /// Integrator parameters
    pub config: PhysicsConfig,
}

impl RigidBody4D {
    /// Create a body at rest
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            velocity: Vec4::ZERO,
            acceleration: Vec4::ZERO,
            angular_velocity: RotationState::ZERO,
            config,
        }
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: Vec4) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the initial angular velocity
    pub fn with_angular_velocity(mut self, angular_velocity: RotationState) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Add an instantaneous change in velocity
    pub fn flick(&mut self, impulse: Vec4) {
        self.velocity += impulse;
    }

    /// Random horizontal kick and random spin in every plane
    ///
    /// The configured limits are used by magnitude; a non-finite limit
    /// gives no kick.
    pub fn flick_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let v = flick_limit(self.config.flick_velocity);
        let x = rng.random_range(-v..=v);
        let z = rng.random_range(-v..=v);
        self.flick(Vec4::new(x, 0.0, z, 0.0));

        let a = flick_limit(self.config.flick_angular_velocity);
        for plane in RotationPlane::ALL {
            self.angular_velocity.set(plane, rng.random_range(-a..=a));
        }
    }

    /// Whether the body has no linear or angular motion
    pub fn is_at_rest(&self) -> bool {
        self.velocity == Vec4::ZERO
            && self.acceleration == Vec4::ZERO
            && self.angular_velocity.abs_sum() == 0.0
    }

    /// Advance the body by `dt` seconds
    ///
    /// Updates `position` and `rotation` in place. Rotation angles are
    /// wrapped into (-180, 180] afterwards.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        position: &mut Vec4,
        rotation: &mut RotationState,
        dt: f32,
        rng: &mut R,
    ) -> StepOutcome {
        self.velocity += self.acceleration * dt;
        *position += self.velocity * dt;

        rotation.add_scaled(&self.angular_velocity, dt * self.config.angular_velocity_modifier);
        *rotation = rotation.wrapped();

        let mut outcome = StepOutcome::Moving;
        if position.y < self.config.floor_y {
            if self.velocity.y.abs() < self.config.rest_threshold {
                self.velocity = Vec4::ZERO;
                self.acceleration = Vec4::ZERO;
                self.angular_velocity = RotationState::ZERO;
                return StepOutcome::Resting;
            }

            position.y = self.config.floor_y;
            self.velocity.y = -self.velocity.y;

            self.velocity *= self.config.bounce_resistance;
            self.angular_velocity.scale(self.config.angular_bounce_resistance);

            self.shuffle_energy(rng);
            outcome = StepOutcome::Bounced;
        }

        self.velocity *= self.config.air_resistance;
        self.angular_velocity.scale(self.config.angular_air_resistance);

        self.velocity.y -= self.config.gravity * dt;
        outcome
    }

    /// Redistribute half of the body's motion randomly
    ///
    /// Each of the nine components (linear xyz and six planes) keeps half its
    /// value and receives a random share of half the total magnitude, keeping
    /// its sign. The w velocity is left alone.
    fn shuffle_energy<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut shares = [0.0f32; 9];
        for share in shares.iter_mut() {
            *share = rng.random_range(0.0..1.0);
        }
        let sum: f32 = shares.iter().sum();
        if sum <= 0.0 {
            return;
        }
        for share in shares.iter_mut() {
            *share /= sum * 2.0;
        }

        let velocity_sum = self.velocity.x.abs() + self.velocity.y.abs() + self.velocity.z.abs();
        let total = velocity_sum + self.angular_velocity.abs_sum();

        let redistribute = |value: f32, share: f32| sign(value) * total * share + value / 2.0;

        self.velocity.x = redistribute(self.velocity.x, shares[0]);
        self.velocity.y = redistribute(self.velocity.y, shares[1]);
        self.velocity.z = redistribute(self.velocity.z, shares[2]);

        for (plane, &share) in SHUFFLE_PLANES.iter().zip(&shares[3..]) {
            let angle = self.angular_velocity.get_mut(*plane);
            *angle = redistribute(*angle, share);
        }
    }
}

/// Symmetric sampling bound for a configured flick limit
#[inline]
fn flick_limit(limit: f32) -> f32 {
    if limit.is_finite() {
        limit.abs()
    } else {
        0.0
    }
}

/// Sign with zero counted as positive
#[inline]
fn sign(value: f32) -> f32 {
    if value >= 0.0 {
        1.0
    } else {
        -1.0
    }
}
