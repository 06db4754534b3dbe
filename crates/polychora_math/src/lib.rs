//! 4D Mathematics Library
//!
//! This crate provides the numeric primitives for the polychora4d kernel.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Vec3`] - 3D vector for cross-section and projection output
//! - [`Mat4`] - 4x4 column-major matrix for transformations
//! - [`RotationState`] - six plane angles composed into a rotation matrix

mod ops;
mod vec3;
mod vec4;
pub mod mat4;
pub mod rotation;

pub use vec3::Vec3;
pub use vec4::Vec4;
pub use mat4::Mat4;
pub use rotation::{RotationPlane, RotationState, wrap_degrees};
