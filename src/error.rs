//! Application level errors

use thiserror::Error;

use polychora_core::GeometryError;

use crate::config::ConfigError;

/// Anything that can stop a run
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}
