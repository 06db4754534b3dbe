//! Orthographic projection of 4D skeletons
//!
//! Drops w, shrinking points exponentially with their w coordinate so that
//! depth along w stays readable in the 3D wireframe.

use bytemuck::{Pod, Zeroable};
use polychora_core::{Edge, GeometryError, Vec3, Vec4};

/// Default per-unit-w scale factor
pub const DEFAULT_DEPTH_FACTOR: f32 = 1.0 / 1.5;

/// A 3D line segment of the wireframe display
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Segment3 {
    pub start: Vec3,
    pub end: Vec3,
}

impl Segment3 {
    pub const fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }
}

/// Projects 4D points to 3D as `xyz * depth_factor^w`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrthographicProjector {
    depth_factor: f32,
}

impl Default for OrthographicProjector {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH_FACTOR)
    }
}

impl OrthographicProjector {
    pub fn new(depth_factor: f32) -> Self {
        Self { depth_factor }
    }

    #[inline]
    pub fn depth_factor(&self) -> f32 {
        self.depth_factor
    }

    /// Project a single point
    #[inline]
    pub fn project_point(&self, v: Vec4) -> Vec3 {
        v.xyz() * self.depth_factor.powf(v.w)
    }

    /// Project every vertex into `out` (cleared first), keeping indices
    pub fn project(&self, vertices: &[Vec4], out: &mut Vec<Vec3>) {
        out.clear();
        out.extend(vertices.iter().map(|&v| self.project_point(v)));
    }

    /// One projected segment per edge, written into `out` (cleared first)
    pub fn segments(
        &self,
        vertices: &[Vec4],
        edges: &[Edge],
        out: &mut Vec<Segment3>,
    ) -> Result<usize, GeometryError> {
        out.clear();
        for edge in edges {
            let (Some(&a), Some(&b)) = (vertices.get(edge.i0), vertices.get(edge.i1)) else {
                return Err(GeometryError::EdgeOutOfRange {
                    i0: edge.i0,
                    i1: edge.i1,
                    vertex_count: vertices.len(),
                });
            };
            out.push(Segment3::new(self.project_point(a), self.project_point(b)));
        }
        Ok(out.len())
    }
}
