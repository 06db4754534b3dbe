//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`P4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use thiserror::Error;

use polychora_core::{GeometryError, RotationState, ShapeKind, Transform4D, Vec4};
use polychora_physics::PhysicsConfig;
use polychora_slice::{HyperplaneSlicer, OrthographicProjector, ProjectionMode, DEFAULT_DEPTH_FACTOR};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Which shape to build
    #[serde(default)]
    pub shape: ShapeConfig,
    /// Initial transform of the shape
    #[serde(default)]
    pub transform: TransformConfig,
    /// 4D to 3D reduction
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Rigid-body integrator parameters
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Headless run parameters
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`P4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // User config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // P4D_SHAPE__KIND=cell600 -> shape.kind = "cell600"
        figment = figment.merge(Env::prefixed("P4D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Shape configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Shape identifier (`hypercube`, `cell600`, `terrain`, ...)
    pub kind: String,
    /// Terrain only: side length of the chunk grid (only its border is built)
    pub terrain_ring: usize,
    /// Terrain only: height of the flat top surface
    pub terrain_height: f32,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Hypercube.name().to_string(),
            terrain_ring: 3,
            terrain_height: 8.0,
        }
    }
}

impl ShapeConfig {
    /// Parse the configured shape identifier
    ///
    /// Unknown names are an error; there is no fallback shape.
    pub fn shape_kind(&self) -> Result<ShapeKind, ConfigError> {
        Ok(self.kind.parse::<ShapeKind>()?)
    }
}

/// Initial transform configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Position [x, y, z, w]
    pub position: [f32; 4],
    /// Plane angles in degrees [xy, yz, xz, xw, yw, zw]
    pub rotation: [f32; 6],
    /// Per-axis scale [x, y, z, w]
    pub scale: [f32; 4],
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 5.0, 0.0, 0.0],
            rotation: [0.0; 6],
            scale: [1.0; 4],
        }
    }
}

impl TransformConfig {
    pub fn to_transform(&self) -> Transform4D {
        Transform4D::new(
            Vec4::from_array(self.position),
            RotationState::from_array(self.rotation),
            Vec4::from_array(self.scale),
        )
    }
}

/// Projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// `cross_section` or `orthographic`
    pub mode: ProjectionMode,
    /// The w of the slicing hyperplane
    pub slice_w: f32,
    /// Orthographic scale per unit of w
    pub depth_factor: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            mode: ProjectionMode::CrossSection,
            slice_w: 0.0,
            depth_factor: DEFAULT_DEPTH_FACTOR,
        }
    }
}

impl ProjectionConfig {
    pub fn slicer(&self) -> HyperplaneSlicer {
        HyperplaneSlicer::new(self.slice_w)
    }

    pub fn projector(&self) -> OrthographicProjector {
        OrthographicProjector::new(self.depth_factor)
    }
}

/// Headless simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of fixed ticks to run
    pub ticks: u32,
    /// Fixed time step in seconds
    pub fixed_dt: f32,
    /// RNG seed (None = seeded from the OS)
    pub seed: Option<u64>,
    /// Attach a rigid body to polychora
    pub physics: bool,
    /// Give bodies a random kick on spawn
    pub flick: bool,
    /// Constant rotation added every tick, degrees per plane [xy, yz, xz, xw, yw, zw]
    pub spin: [f32; 6],
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            ticks: 500,
            fixed_dt: 0.02,
            seed: None,
            physics: true,
            flick: true,
            spin: [0.0, 0.0, 0.0, 0.0, 0.5, 0.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace), overridden by `RUST_LOG`
    pub log_level: String,
    /// Log geometry statistics every this many ticks (0 = never)
    pub report_every: u32,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            report_every: 50,
        }
    }
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or did not match the schema
    #[error("Configuration error: {0}")]
    Load(String),
    /// The configured shape is unknown
    #[error(transparent)]
    Shape(#[from] GeometryError),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Load(e.to_string())
    }
}
