//! 4x4 matrices for rotations in 4D
//!
//! Storage is column-major: `cols[c][r]`. `a * b` applies `b` first, then `a`.

use std::ops::Mul;

use crate::Vec4;

/// 4x4 column-major matrix
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    pub cols: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Rotation by `radians` in the plane of axes `from` and `to`
    ///
    /// Axis `from` turns towards axis `to`:
    /// `e[from] -> cos * e[from] + sin * e[to]`. Swapping the axes reverses
    /// the direction. Axes are 0=X, 1=Y, 2=Z, 3=W.
    ///
    /// ```
    /// use polychora_math::{Mat4, Vec4};
    /// let m = Mat4::plane_rotation(std::f32::consts::FRAC_PI_2, 0, 3);
    /// assert!((m * Vec4::X - Vec4::W).length() < 1e-6);
    /// ```
    pub fn plane_rotation(radians: f32, from: usize, to: usize) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut m = Self::IDENTITY;
        m.cols[from][from] = cos;
        m.cols[to][to] = cos;
        m.cols[from][to] = sin;
        m.cols[to][from] = -sin;
        m
    }

    /// Column `c` as a vector (the image of basis vector `c`)
    #[inline]
    pub fn column(&self, c: usize) -> Vec4 {
        Vec4::from_array(self.cols[c])
    }

    /// Row `r` as a vector
    #[inline]
    pub fn row(&self, r: usize) -> Vec4 {
        Vec4::new(self.cols[0][r], self.cols[1][r], self.cols[2][r], self.cols[3][r])
    }

    /// Transpose; the inverse of a pure rotation
    pub fn transpose(&self) -> Self {
        Self {
            cols: std::array::from_fn(|c| self.row(c).to_array()),
        }
    }

    /// Largest absolute component-wise difference to `other`
    pub fn max_abs_diff(&self, other: &Self) -> f32 {
        self.cols
            .iter()
            .flatten()
            .zip(other.cols.iter().flatten())
            .fold(0.0, |acc, (a, b)| acc.max((a - b).abs()))
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, v: Vec4) -> Vec4 {
        Vec4::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v), self.row(3).dot(v))
    }
}

impl Mul<Vec4> for &Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, v: Vec4) -> Vec4 {
        *self * v
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        // Column c of the product is self applied to column c of rhs
        Self {
            cols: std::array::from_fn(|c| (self * rhs.column(c)).to_array()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Mat4::IDENTITY * v, v);
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
    }

    #[test]
    fn test_plane_rotation_yz() {
        let m = Mat4::plane_rotation(FRAC_PI_2, 1, 2);

        assert!(vec_approx_eq(m * Vec4::Y, Vec4::Z), "Y should become Z, got {:?}", m * Vec4::Y);
        assert!(vec_approx_eq(m * Vec4::Z, -Vec4::Y), "Z should become -Y, got {:?}", m * Vec4::Z);
        assert!(vec_approx_eq(m * Vec4::X, Vec4::X));
        assert!(vec_approx_eq(m * Vec4::W, Vec4::W));
    }

    #[test]
    fn test_swapping_axes_reverses_direction() {
        let a = Mat4::plane_rotation(0.7, 0, 3);
        let b = Mat4::plane_rotation(-0.7, 3, 0);
        assert!(a.max_abs_diff(&b) < EPSILON);
    }

    #[test]
    fn test_two_eighth_turns_make_a_quarter() {
        let r45 = Mat4::plane_rotation(FRAC_PI_4, 0, 1);
        let r90 = Mat4::plane_rotation(FRAC_PI_2, 0, 1);
        assert!((r45 * r45).max_abs_diff(&r90) < EPSILON);
    }

    #[test]
    fn test_product_applies_right_operand_first() {
        // X -> Y, then Y -> Z
        let xy = Mat4::plane_rotation(FRAC_PI_2, 0, 1);
        let yz = Mat4::plane_rotation(FRAC_PI_2, 1, 2);
        let result = (yz * xy) * Vec4::X;
        assert!(vec_approx_eq(result, Vec4::Z), "got {:?}", result);
    }

    #[test]
    fn test_transpose_inverts_rotation() {
        let m = Mat4::plane_rotation(0.3, 0, 2) * Mat4::plane_rotation(1.1, 1, 3);
        assert!((m * m.transpose()).max_abs_diff(&Mat4::IDENTITY) < EPSILON);
    }

    #[test]
    fn test_columns_are_basis_images() {
        let m = Mat4::plane_rotation(0.5, 1, 2);
        assert_eq!(m.column(0), Vec4::X);
        assert!(vec_approx_eq(m.column(1), m * Vec4::Y));
    }
}
