//! Plane rotations in 4D space
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, YZ, XZ, XW, YW, ZW.
//!
//! A [`RotationState`] stores one angle (in degrees) per plane and composes
//! them into a single rotation matrix. 4D rotations do not commute, so the
//! composition order is fixed: `XY * YZ * XZ * XW * YW * ZW`.

use serde::{Serialize, Deserialize};

use crate::Mat4;

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// XY plane - yaw (rotation around Z axis in 3D)
    XY,
    /// YZ plane - roll (rotation around X axis in 3D)
    YZ,
    /// XZ plane - pitch (rotation around Y axis in 3D)
    XZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// All planes in composition order
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::YZ,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// Axis pair `(from, towards)` for a positive angle.
    ///
    /// A positive angle rotates basis vector `from` towards `towards`.
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (1, 0),
            RotationPlane::YZ => (2, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::XW => (3, 0),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }

    /// Elementary rotation matrix for this plane
    ///
    /// # Arguments
    /// * `degrees` - Rotation angle in degrees
    pub fn matrix(self, degrees: f32) -> Mat4 {
        let (p1, p2) = self.axes();
        Mat4::plane_rotation(degrees.to_radians(), p1, p2)
    }
}

/// Wrap an angle in degrees into the range (-180, 180]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = (angle + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}

/// Six plane angles in degrees, one per [`RotationPlane`]
///
/// Angles are logically bounded to (-180, 180], but nothing here enforces
/// it. Integrators that accumulate angles call [`RotationState::wrapped`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationState {
    pub xy: f32,
    pub yz: f32,
    pub xz: f32,
    pub xw: f32,
    pub yw: f32,
    pub zw: f32,
}

impl RotationState {
    /// No rotation
    pub const ZERO: Self = Self { xy: 0.0, yz: 0.0, xz: 0.0, xw: 0.0, yw: 0.0, zw: 0.0 };

    /// Create from angles in composition order `[xy, yz, xz, xw, yw, zw]`
    pub const fn from_array(a: [f32; 6]) -> Self {
        Self { xy: a[0], yz: a[1], xz: a[2], xw: a[3], yw: a[4], zw: a[5] }
    }

    /// Angles in composition order `[xy, yz, xz, xw, yw, zw]`
    pub const fn to_array(self) -> [f32; 6] {
        [self.xy, self.yz, self.xz, self.xw, self.yw, self.zw]
    }

    /// A state with a single non-zero plane angle
    pub fn single(plane: RotationPlane, degrees: f32) -> Self {
        let mut state = Self::ZERO;
        state.set(plane, degrees);
        state
    }

    /// Get the angle for one plane
    pub fn get(&self, plane: RotationPlane) -> f32 {
        match plane {
            RotationPlane::XY => self.xy,
            RotationPlane::YZ => self.yz,
            RotationPlane::XZ => self.xz,
            RotationPlane::XW => self.xw,
            RotationPlane::YW => self.yw,
            RotationPlane::ZW => self.zw,
        }
    }

    /// Set the angle for one plane
    pub fn set(&mut self, plane: RotationPlane, degrees: f32) {
        *self.get_mut(plane) = degrees;
    }

    /// Mutable access to the angle for one plane
    pub fn get_mut(&mut self, plane: RotationPlane) -> &mut f32 {
        match plane {
            RotationPlane::XY => &mut self.xy,
            RotationPlane::YZ => &mut self.yz,
            RotationPlane::XZ => &mut self.xz,
            RotationPlane::XW => &mut self.xw,
            RotationPlane::YW => &mut self.yw,
            RotationPlane::ZW => &mut self.zw,
        }
    }

    /// Add `other * factor` to every plane angle
    pub fn add_scaled(&mut self, other: &Self, factor: f32) {
        for plane in RotationPlane::ALL {
            *self.get_mut(plane) += other.get(plane) * factor;
        }
    }

    /// Multiply every plane angle by `factor`
    pub fn scale(&mut self, factor: f32) {
        for plane in RotationPlane::ALL {
            *self.get_mut(plane) *= factor;
        }
    }

    /// Sum of the absolute plane angles
    pub fn abs_sum(&self) -> f32 {
        self.to_array().iter().map(|a| a.abs()).sum()
    }

    /// Copy with every angle wrapped into (-180, 180]
    pub fn wrapped(&self) -> Self {
        let mut state = *self;
        for plane in RotationPlane::ALL {
            let angle = state.get_mut(plane);
            *angle = wrap_degrees(*angle);
        }
        state
    }

    /// Compose the six plane rotations into one matrix
    ///
    /// The product is `XY * YZ * XZ * XW * YW * ZW`, so when the result is
    /// applied to a vector the ZW rotation acts first and XY last.
    pub fn compose(&self) -> Mat4 {
        RotationPlane::ALL
            .iter()
            .fold(Mat4::IDENTITY, |m, &plane| m * plane.matrix(self.get(plane)))
    }
}
