//! 4D to 3D reduction
//!
//! This crate turns transformed 4D skeletons into 3D geometry for a display
//! layer to draw.
//!
//! ## Key Components
//!
//! - [`HyperplaneSlicer`] - Intersects skeleton edges with a hyperplane of constant w
//! - [`ConvexHull3D`] - Incremental convex hull of the resulting point cloud
//! - [`ConvexHullMesher`] - Writes hull faces into a pooled [`Mesh3D`]
//! - [`OrthographicProjector`] - Wireframe projection with w-dependent shrinking
//! - [`Reducer`] - Runs one of the two pipelines per entity

pub mod slicer;
pub mod hull;
pub mod mesh;
pub mod mesher;
pub mod projector;
pub mod reducer;

pub use slicer::{cut_edge, EdgeCut, HyperplaneSlicer};
pub use hull::ConvexHull3D;
pub use mesh::Mesh3D;
pub use mesher::{ConvexHullMesher, NoMeshReason, Triangulation};
pub use projector::{OrthographicProjector, Segment3, DEFAULT_DEPTH_FACTOR};
pub use reducer::{ProjectionMode, ReducedGeometry, Reducer};
