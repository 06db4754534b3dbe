//! Skeleton traits and primitives for 4D geometry
//!
//! A skeleton is the vertex/edge structure of a 4D object. Skeletons are pure
//! geometric data: no colors, materials, or rendering info.

use polychora_math::Vec4;

/// An edge defined by two vertex indices
///
/// Edges are unordered: `(a, b)` and `(b, a)` denote the same edge.
/// Generated polytopes always store the smaller index first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Index of the first endpoint in the parent vertex array
    pub i0: usize,
    /// Index of the second endpoint in the parent vertex array
    pub i1: usize,
}

impl Edge {
    /// Create a new edge with the given vertex indices
    #[inline]
    pub const fn new(i0: usize, i1: usize) -> Self {
        Self { i0, i1 }
    }

    /// Create a new edge with the smaller index first (canonical form)
    pub fn new_canonical(a: usize, b: usize) -> Self {
        if a <= b {
            Self::new(a, b)
        } else {
            Self::new(b, a)
        }
    }

    /// Get the indices as a sorted pair (canonical form)
    pub fn canonical(&self) -> (usize, usize) {
        (self.i0.min(self.i1), self.i0.max(self.i1))
    }

    /// Whether this edge connects the same two vertices as `other`
    pub fn same_as(&self, other: &Edge) -> bool {
        self.canonical() == other.canonical()
    }
}

/// Trait for 4D vertex/edge skeletons
///
/// A Skeleton4D provides the geometric data needed for 4D reduction:
/// - Vertices: the 4D points of the shape in local space
/// - Edges: index pairs into the vertex list
///
/// Implementations must keep indices stable for their whole lifetime, since
/// transformed vertex buffers are indexed in parallel.
pub trait Skeleton4D: Send + Sync {
    /// Get the vertices of this skeleton
    fn vertices(&self) -> &[Vec4];

    /// Get the edges of this skeleton
    fn edges(&self) -> &[Edge];

    /// Get the number of vertices
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Get the number of edges
    #[inline]
    fn edge_count(&self) -> usize {
        self.edges().len()
    }
}
