//! polychora4d - headless 4D polytope viewer
//!
//! Builds a world of regular polychora (or terrain chunks) from configuration,
//! drives it with a fixed-step rigid-body simulation and reduces every entity
//! to 3D geometry each tick.

pub mod config;
pub mod error;
pub mod systems;

pub use config::{AppConfig, ConfigError};
pub use error::AppError;
