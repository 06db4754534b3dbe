//! Entity type
//!
//! An Entity is one object in the 4D world: a shared static skeleton, its own
//! transform, an optional physics body, and a cache of world-space vertices.

use std::sync::Arc;

use polychora_math::Vec4;
use polychora_physics::{RigidBody4D, StepOutcome};
use rand::Rng;

use crate::shape::Skeleton4D;
use crate::Transform4D;

/// An entity in the 4D world
///
/// Each entity has:
/// - An optional name (for lookup by name)
/// - A skeleton (shared read-only between entities of the same shape)
/// - A transform (position, rotation, scale)
/// - An optional rigid body driving the transform
/// - World-space vertices, index-parallel to the skeleton's vertices
pub struct Entity {
    /// Optional name for this entity (for lookup)
    pub name: Option<String>,
    /// The entity's transform in world space
    pub transform: Transform4D,
    /// Optional rigid body (None = the entity only moves when told to)
    pub body: Option<RigidBody4D>,
    skeleton: Arc<dyn Skeleton4D>,
    world_vertices: Vec<Vec4>,
}

impl Entity {
    /// Create a new entity from a shared skeleton
    pub fn new(skeleton: Arc<dyn Skeleton4D>) -> Self {
        let mut entity = Self {
            name: None,
            transform: Transform4D::identity(),
            body: None,
            skeleton,
            world_vertices: Vec::new(),
        };
        entity.refresh_world_vertices();
        entity
    }

    /// Create a new entity that owns its skeleton
    pub fn from_shape<S: Skeleton4D + 'static>(shape: S) -> Self {
        Self::new(Arc::new(shape))
    }

    /// Set the name of this entity (for lookup)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the transform
    pub fn with_transform(mut self, transform: Transform4D) -> Self {
        self.transform = transform;
        self.refresh_world_vertices();
        self
    }

    /// Attach a rigid body
    pub fn with_body(mut self, body: RigidBody4D) -> Self {
        self.body = Some(body);
        self
    }

    /// The static skeleton in local space
    #[inline]
    pub fn skeleton(&self) -> &dyn Skeleton4D {
        self.skeleton.as_ref()
    }

    /// A new handle to the shared skeleton
    pub fn skeleton_arc(&self) -> Arc<dyn Skeleton4D> {
        Arc::clone(&self.skeleton)
    }

    /// World-space vertices as of the last refresh
    #[inline]
    pub fn world_vertices(&self) -> &[Vec4] {
        &self.world_vertices
    }

    /// Recompute world-space vertices if the transform changed
    ///
    /// Returns whether the buffer was rewritten.
    pub fn refresh_world_vertices(&mut self) -> bool {
        let stale = self.world_vertices.len() != self.skeleton.vertex_count();
        if !self.transform.take_vertices_dirty() && !stale {
            return false;
        }
        self.transform
            .apply_into(self.skeleton.vertices(), &mut self.world_vertices);
        true
    }

    /// Step the rigid body (if any), writing into the transform
    pub fn step_physics<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) -> Option<StepOutcome> {
        let body = self.body.as_mut()?;
        let (position, rotation) = self.transform.position_rotation_mut();
        Some(body.step(position, rotation, dt, rng))
    }
}
