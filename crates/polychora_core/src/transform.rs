//! 4D Transform (position, rotation, scale)
//!
//! A Transform4D represents the position, rotation, and non-uniform scale of
//! an entity in 4D space. Points are rotated about the origin, then scaled
//! per component, then translated.

use bitflags::bitflags;
use polychora_math::{Mat4, RotationState, Vec4};

use crate::GeometryError;

bitflags! {
    /// Flags indicating which derived data of a transform is stale
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE = 0;
        /// Rotation angles changed, cached matrices must be rebuilt
        const ROTATION = 1 << 0;
        /// Any component changed, world-space vertices must be recomputed
        const VERTICES = 1 << 1;
        /// All flags set
        const ALL = Self::ROTATION.bits() | Self::VERTICES.bits();
    }
}

/// Compose the six plane rotations of a state into one matrix
#[inline]
pub fn compose_rotation(rotation: &RotationState) -> Mat4 {
    rotation.compose()
}

/// Transform one vertex: rotate, scale per component, then translate
#[inline]
pub fn apply(vertex: Vec4, position: Vec4, rotation_matrix: &Mat4, scale: Vec4) -> Vec4 {
    (rotation_matrix * vertex).component_mul(scale) + position
}

/// A 4D transform with position, plane-angle rotation and per-axis scale
///
/// The rotation matrix and its inverse are derived from the angles and cached.
/// They are rebuilt lazily the next time they are read after the rotation was
/// touched.
#[derive(Clone, Debug)]
pub struct Transform4D {
    position: Vec4,
    rotation: RotationState,
    scale: Vec4,
    rotation_matrix: Mat4,
    inverse_rotation_matrix: Mat4,
    dirty: DirtyFlags,
}

impl Default for Transform4D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform4D {
    /// Create an identity transform (no translation, rotation, or scale change)
    pub fn identity() -> Self {
        Self {
            position: Vec4::ZERO,
            rotation: RotationState::ZERO,
            scale: Vec4::ONE,
            rotation_matrix: Mat4::IDENTITY,
            inverse_rotation_matrix: Mat4::IDENTITY,
            dirty: DirtyFlags::VERTICES,
        }
    }

    /// Create a transform from all three components
    pub fn new(position: Vec4, rotation: RotationState, scale: Vec4) -> Self {
        Self {
            position,
            rotation,
            scale,
            rotation_matrix: Mat4::IDENTITY,
            inverse_rotation_matrix: Mat4::IDENTITY,
            dirty: DirtyFlags::ALL,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec4) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Translation applied after rotation
    #[inline]
    pub fn position(&self) -> Vec4 {
        self.position
    }

    /// Mutable access to the position
    pub fn position_mut(&mut self) -> &mut Vec4 {
        self.dirty |= DirtyFlags::VERTICES;
        &mut self.position
    }

    /// Replace the position; only world vertices go stale
    pub fn set_position(&mut self, position: Vec4) {
        *self.position_mut() = position;
    }

    /// Plane angles in degrees
    #[inline]
    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    /// Mutable access to the rotation angles
    ///
    /// Marks the cached rotation matrices stale.
    pub fn rotation_mut(&mut self) -> &mut RotationState {
        self.dirty |= DirtyFlags::ALL;
        &mut self.rotation
    }

    /// Replace the plane angles
    ///
    /// Marks the cached rotation matrices stale.
    pub fn set_rotation(&mut self, rotation: RotationState) {
        *self.rotation_mut() = rotation;
    }

    /// Mutable access to position and rotation at once (for integrators)
    pub fn position_rotation_mut(&mut self) -> (&mut Vec4, &mut RotationState) {
        self.dirty |= DirtyFlags::ALL;
        (&mut self.position, &mut self.rotation)
    }

    /// Per-axis scale, applied before rotation
    #[inline]
    pub fn scale(&self) -> Vec4 {
        self.scale
    }

    /// Replace the per-axis scale
    pub fn set_scale(&mut self, scale: Vec4) {
        self.dirty |= DirtyFlags::VERTICES;
        self.scale = scale;
    }

    /// Translate the transform by an offset
    pub fn translate(&mut self, offset: Vec4) {
        *self.position_mut() += offset;
    }

    /// Current dirty state
    #[inline]
    pub fn dirty(&self) -> DirtyFlags {
        self.dirty
    }

    /// Clear the vertex flag, returning whether it was set
    ///
    /// Called by owners of world-space vertex buffers once they have been
    /// refreshed.
    pub fn take_vertices_dirty(&mut self) -> bool {
        let was_dirty = self.dirty.contains(DirtyFlags::VERTICES);
        self.dirty.remove(DirtyFlags::VERTICES);
        was_dirty
    }

    fn refresh_rotation(&mut self) {
        if self.dirty.contains(DirtyFlags::ROTATION) {
            self.rotation_matrix = compose_rotation(&self.rotation);
            // Orthonormal, so the transpose is the inverse
            self.inverse_rotation_matrix = self.rotation_matrix.transpose();
            self.dirty.remove(DirtyFlags::ROTATION);
        }
    }

    /// The composed rotation matrix (rebuilt if stale)
    pub fn rotation_matrix(&mut self) -> Mat4 {
        self.refresh_rotation();
        self.rotation_matrix
    }

    /// The inverse of the composed rotation matrix (rebuilt if stale)
    pub fn inverse_rotation_matrix(&mut self) -> Mat4 {
        self.refresh_rotation();
        self.inverse_rotation_matrix
    }

    /// Transform a point from local space to world space
    pub fn transform_point(&mut self, p: Vec4) -> Vec4 {
        self.refresh_rotation();
        apply(p, self.position, &self.rotation_matrix, self.scale)
    }

    /// Map a world-space point back into local space
    ///
    /// Zero scale components are treated as 1 so the result stays finite.
    pub fn inverse_transform_point(&mut self, p: Vec4) -> Vec4 {
        self.refresh_rotation();
        let safe = |s: f32| if s.abs() > 1e-10 { s } else { 1.0 };
        let unscaled = p - self.position;
        let unscaled = Vec4::new(
            unscaled.x / safe(self.scale.x),
            unscaled.y / safe(self.scale.y),
            unscaled.z / safe(self.scale.z),
            unscaled.w / safe(self.scale.w),
        );
        self.inverse_rotation_matrix * unscaled
    }

    /// Transform every local vertex into the caller's buffer
    ///
    /// `out` must have exactly as many elements as `local`; vertex indices are
    /// preserved.
    pub fn apply_all(&mut self, local: &[Vec4], out: &mut [Vec4]) -> Result<(), GeometryError> {
        if local.len() != out.len() {
            return Err(GeometryError::LengthMismatch {
                expected: local.len(),
                actual: out.len(),
            });
        }

        self.refresh_rotation();
        for (dst, &src) in out.iter_mut().zip(local) {
            *dst = apply(src, self.position, &self.rotation_matrix, self.scale);
        }
        Ok(())
    }

    /// Transform every local vertex into a growable buffer
    ///
    /// The buffer is cleared first, so it always ends up with `local.len()`
    /// elements.
    pub fn apply_into(&mut self, local: &[Vec4], out: &mut Vec<Vec4>) {
        self.refresh_rotation();
        out.clear();
        out.extend(
            local
                .iter()
                .map(|&v| apply(v, self.position, &self.rotation_matrix, self.scale)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polychora_math::RotationPlane;
    use proptest::prelude::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
    }

    #[test]
    fn test_identity_transform() {
        let mut t = Transform4D::identity();
        let p = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert!(vec_approx_eq(t.transform_point(p), p));
    }

    #[test]
    fn test_translation_only() {
        let mut t = Transform4D::from_position(Vec4::new(0.0, 0.0, 0.0, 0.5));
        let p = t.transform_point(Vec4::new(1.0, 1.0, 1.0, -1.0));
        assert!(vec_approx_eq(p, Vec4::new(1.0, 1.0, 1.0, -0.5)));
    }

    #[test]
    fn test_apply_order_rotate_then_scale_then_translate() {
        // X rotates to Z, is then scaled by z=3, then translated.
        let mut t = Transform4D::new(
            Vec4::new(10.0, 0.0, 0.0, 0.0),
            RotationState::single(RotationPlane::XZ, 90.0),
            Vec4::new(2.0, 1.0, 3.0, 1.0),
        );
        let p = t.transform_point(Vec4::X);
        assert!(vec_approx_eq(p, Vec4::new(10.0, 0.0, 3.0, 0.0)), "got {:?}", p);
    }

    #[test]
    fn test_rotation_cache_rebuilds_when_touched() {
        let mut t = Transform4D::identity();
        assert!(vec_approx_eq(t.transform_point(Vec4::Z), Vec4::Z));

        t.rotation_mut().zw = 90.0;
        assert!(t.dirty().contains(DirtyFlags::ROTATION));
        assert!(vec_approx_eq(t.transform_point(Vec4::Z), Vec4::W));
        assert!(!t.dirty().contains(DirtyFlags::ROTATION));
    }

    #[test]
    fn test_position_change_does_not_dirty_rotation() {
        let mut t = Transform4D::identity();
        t.take_vertices_dirty();
        t.translate(Vec4::Y);
        assert!(t.dirty().contains(DirtyFlags::VERTICES));
        assert!(!t.dirty().contains(DirtyFlags::ROTATION));
        assert!(t.take_vertices_dirty());
        assert!(!t.take_vertices_dirty());
    }

    #[test]
    fn test_inverse_rotation_matrix_is_inverse() {
        let mut t = Transform4D::identity();
        t.set_rotation(RotationState::from_array([10.0, 20.0, 30.0, 40.0, 50.0, 60.0]));
        let m = t.rotation_matrix();
        let inv = t.inverse_rotation_matrix();
        assert!((m * inv).max_abs_diff(&Mat4::IDENTITY) < EPSILON);
    }

    #[test]
    fn test_inverse_transform_point() {
        let mut t = Transform4D::new(
            Vec4::new(1.0, -2.0, 3.0, 0.5),
            RotationState::from_array([15.0, -30.0, 45.0, 60.0, -75.0, 90.0]),
            Vec4::new(2.0, 2.0, 2.0, 2.0),
        );
        let p = Vec4::new(0.3, 0.7, -1.1, 2.0);
        let world = t.transform_point(p);
        assert!(vec_approx_eq(t.inverse_transform_point(world), p));
    }

    #[test]
    fn test_apply_all_length_mismatch() {
        let mut t = Transform4D::identity();
        let local = [Vec4::X, Vec4::Y, Vec4::Z];
        let mut out = [Vec4::ZERO; 2];
        let err = t.apply_all(&local, &mut out).unwrap_err();
        assert_eq!(err, GeometryError::LengthMismatch { expected: 3, actual: 2 });
    }

    #[test]
    fn test_apply_all_preserves_indices() {
        let mut t = Transform4D::from_position(Vec4::W);
        let local = [Vec4::X, Vec4::Y, Vec4::Z];
        let mut out = [Vec4::ZERO; 3];
        t.apply_all(&local, &mut out).unwrap();
        assert!(vec_approx_eq(out[0], Vec4::new(1.0, 0.0, 0.0, 1.0)));
        assert!(vec_approx_eq(out[1], Vec4::new(0.0, 1.0, 0.0, 1.0)));
        assert!(vec_approx_eq(out[2], Vec4::new(0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn test_apply_into_resizes() {
        let mut t = Transform4D::identity();
        let mut out = vec![Vec4::ONE; 10];
        t.apply_into(&[Vec4::X, Vec4::W], &mut out);
        assert_eq!(out, vec![Vec4::X, Vec4::W]);
    }

    proptest! {
        #[test]
        fn rigid_transform_preserves_distances(
            angles in prop::array::uniform6(-180.0f32..=180.0),
            offset in prop::array::uniform4(-5.0f32..5.0),
            a in prop::array::uniform4(-3.0f32..3.0),
            b in prop::array::uniform4(-3.0f32..3.0),
        ) {
            let mut t = Transform4D::new(
                Vec4::from_array(offset),
                RotationState::from_array(angles),
                Vec4::ONE,
            );
            let (a, b) = (Vec4::from_array(a), Vec4::from_array(b));
            let before = a.distance(b);
            let after = t.transform_point(a).distance(t.transform_point(b));
            prop_assert!((before - after).abs() < 1e-3);
        }
    }
}
