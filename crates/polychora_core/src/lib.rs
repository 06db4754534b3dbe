//! Core types for polychora4d
//!
//! This crate provides the 4D geometry kernel and the world that drives it:
//!
//! - [`ShapeKind`], [`seed_table`] - The regular convex 4-polytopes and their generating seeds
//! - [`orbit`] - Sign and permutation orbits of seed vertices
//! - [`Polytope`], [`generate`] - Vertex/edge skeletons built from the seeds
//! - [`TerrainChunk`] - Procedural terrain skeletons over an injected [`HeightField`]
//! - [`Transform4D`] - Position, plane-angle rotation, and scale in 4D space
//! - [`Entity`] - An object in the world with skeleton, transform, and optional body
//! - [`World`] - Container for all entities
//! - [`EntityKey`] - Generational key to an entity in the world

mod error;
mod shape;
mod seeds;
pub mod orbit;
mod polytope;
mod terrain;
mod transform;
mod entity;
mod world;

pub use error::GeometryError;
pub use shape::{Edge, Skeleton4D};
pub use seeds::{seed_table, Parity, SeedVertex, ShapeKind, ShapeSeed, PHI};
pub use polytope::{generate, infer_edges, Polytope, EDGE_TOLERANCE};
pub use terrain::{terrain_edges, terrain_ring, FlatHeight, HeightField, TerrainChunk, GRID_DISTANCE};
pub use transform::{apply, compose_rotation, DirtyFlags, Transform4D};
pub use entity::Entity;
pub use world::{EntityKey, TickStats, World};

// Re-export commonly used types from polychora_math for convenience
pub use polychora_math::{Mat4, RotationPlane, RotationState, Vec3, Vec4};

// Re-export physics types for convenient access through polychora_core
pub use polychora_physics::{PhysicsConfig, RigidBody4D, StepOutcome};
