//! 4D physics for polychora4d
//!
//! This crate provides a small rigid-body integrator for tumbling 4D shapes:
//! - Euler integration of velocity and per-plane angular velocity
//! - A hard-coded floor plane with damped bounces
//! - Random energy exchange between linear and angular motion on impact

pub mod body;
pub mod config;

// Re-export commonly used types
pub use body::{RigidBody4D, StepOutcome};
pub use config::PhysicsConfig;
