//! Hyperplane cross-sections of 4D edge skeletons
//!
//! Every edge of a skeleton is intersected with the hyperplane `w = slice_w`.
//! The result is an unordered 3D point cloud (w dropped); for a convex
//! polytope its convex hull is the cross-section solid.

use polychora_core::{Edge, GeometryError, Vec3, Vec4};

/// Intersection of one edge with the slicing hyperplane
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeCut {
    /// The edge misses the hyperplane (or runs parallel to it off-plane)
    Miss,
    /// The edge crosses the hyperplane at one point
    Point(Vec3),
    /// The edge lies inside the hyperplane
    Both(Vec3, Vec3),
}

/// Intersect the segment `v0 v1` with the hyperplane `w = 0`
pub fn cut_edge(v0: Vec4, v1: Vec4) -> EdgeCut {
    if v0.w == 0.0 && v1.w == 0.0 {
        return EdgeCut::Both(v0.xyz(), v1.xyz());
    }
    if v1.w == v0.w {
        return EdgeCut::Miss;
    }

    let t = -v0.w / (v1.w - v0.w);
    if !(0.0..=1.0).contains(&t) {
        return EdgeCut::Miss;
    }
    EdgeCut::Point(v0.lerp(v1, t).xyz())
}

/// Slices 4D skeletons with a hyperplane of constant w
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HyperplaneSlicer {
    slice_w: f32,
}

impl Default for HyperplaneSlicer {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl HyperplaneSlicer {
    /// Create a slicer for the hyperplane `w = slice_w`
    pub fn new(slice_w: f32) -> Self {
        Self { slice_w }
    }

    /// The w of the slicing hyperplane
    #[inline]
    pub fn slice_w(&self) -> f32 {
        self.slice_w
    }

    /// Move the slicing hyperplane to `w = slice_w`
    pub fn set_slice_w(&mut self, slice_w: f32) {
        self.slice_w = slice_w;
    }

    /// Intersect every edge with the hyperplane, writing points into `out`
    ///
    /// `out` is cleared first. Returns the number of points written. An edge
    /// lying in the hyperplane contributes both endpoints, so shared vertices
    /// can appear more than once.
    pub fn slice_into(
        &self,
        edges: &[Edge],
        vertices: &[Vec4],
        out: &mut Vec<Vec3>,
    ) -> Result<usize, GeometryError> {
        out.clear();
        let offset = Vec4::new(0.0, 0.0, 0.0, self.slice_w);

        for edge in edges {
            let (Some(&v0), Some(&v1)) = (vertices.get(edge.i0), vertices.get(edge.i1)) else {
                return Err(GeometryError::EdgeOutOfRange {
                    i0: edge.i0,
                    i1: edge.i1,
                    vertex_count: vertices.len(),
                });
            };

            match cut_edge(v0 - offset, v1 - offset) {
                EdgeCut::Miss => {}
                EdgeCut::Point(p) => out.push(p),
                EdgeCut::Both(a, b) => {
                    out.push(a);
                    out.push(b);
                }
            }
        }

        Ok(out.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossing_edge_gives_midpoint() {
        let cut = cut_edge(Vec4::new(0.0, 2.0, 0.0, -1.0), Vec4::new(2.0, 2.0, 0.0, 1.0));
        assert_eq!(cut, EdgeCut::Point(Vec3::new(1.0, 2.0, 0.0)));
    }

    #[test]
    fn test_edge_off_plane_misses() {
        let cut = cut_edge(Vec4::new(0.0, 0.0, 0.0, 2.0), Vec4::new(1.0, 0.0, 0.0, 3.0));
        assert_eq!(cut, EdgeCut::Miss);
    }

    #[test]
    fn test_parallel_edge_misses() {
        let cut = cut_edge(Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(cut, EdgeCut::Miss);
    }

    #[test]
    fn test_edge_in_plane_gives_both_endpoints() {
        let cut = cut_edge(Vec4::new(1.0, 2.0, 3.0, 0.0), Vec4::new(4.0, 5.0, 6.0, 0.0));
        assert_eq!(cut, EdgeCut::Both(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)));
    }

    #[test]
    fn test_endpoint_touching_plane() {
        let cut = cut_edge(Vec4::new(1.0, 1.0, 1.0, 0.0), Vec4::new(3.0, 3.0, 3.0, 2.0));
        assert_eq!(cut, EdgeCut::Point(Vec3::new(1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_slice_into_clears_buffer() {
        let vertices = [Vec4::new(0.0, 0.0, 0.0, -1.0), Vec4::new(0.0, 0.0, 2.0, 1.0)];
        let edges = [Edge::new(0, 1)];
        let mut out = vec![Vec3::X; 5];

        let n = HyperplaneSlicer::default().slice_into(&edges, &vertices, &mut out).unwrap();

        assert_eq!(n, 1);
        assert_eq!(out, vec![Vec3::new(0.0, 0.0, 1.0)]);
    }

    #[test]
    fn test_slice_w_offset() {
        let vertices = [Vec4::new(0.0, 0.0, 0.0, 0.0), Vec4::new(4.0, 0.0, 0.0, 2.0)];
        let edges = [Edge::new(0, 1)];
        let mut out = Vec::new();

        let slicer = HyperplaneSlicer::new(0.5);
        assert_eq!(slicer.slice_w(), 0.5);
        slicer.slice_into(&edges, &vertices, &mut out).unwrap();

        assert_eq!(out, vec![Vec3::new(1.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_edge_out_of_range() {
        let vertices = [Vec4::ZERO, Vec4::W];
        let edges = [Edge::new(0, 1), Edge::new(1, 7)];
        let mut out = Vec::new();

        let err = HyperplaneSlicer::default()
            .slice_into(&edges, &vertices, &mut out)
            .unwrap_err();
        assert_eq!(err, GeometryError::EdgeOutOfRange { i0: 1, i1: 7, vertex_count: 2 });
    }
}
