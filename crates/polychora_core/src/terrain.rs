//! Procedural terrain chunks
//!
//! A chunk is a 2x2x2 block of columns in (x, z, w): a flat base at y = 0 and
//! a top surface whose height comes from an injected [`HeightField`]. The
//! height function (typically a noise call) lives outside the kernel.

use polychora_math::Vec4;

use crate::shape::{Edge, Skeleton4D};

/// Distance between neighbouring grid columns of a chunk
pub const GRID_DISTANCE: f32 = 2.0;

const GRID_TOLERANCE: f32 = 1e-4;

/// Height of the terrain surface at a point of the (x, z, w) grid
pub trait HeightField {
    fn height(&self, x: f32, z: f32, w: f32) -> f32;
}

/// A constant-height surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatHeight(pub f32);

impl HeightField for FlatHeight {
    fn height(&self, _x: f32, _z: f32, _w: f32) -> f32 {
        self.0
    }
}

impl<F> HeightField for F
where
    F: Fn(f32, f32, f32) -> f32,
{
    fn height(&self, x: f32, z: f32, w: f32) -> f32 {
        self(x, z, w)
    }
}

/// One terrain chunk skeleton
///
/// Vertices come in base/top pairs: index `2n` is the base vertex of column
/// `n` and `2n + 1` its top vertex.
#[derive(Clone, Debug)]
pub struct TerrainChunk {
    origin: [f32; 2],
    vertices: Vec<Vec4>,
    edges: Vec<Edge>,
}

impl TerrainChunk {
    /// Build a chunk whose columns sample `heights` at `origin + (x, z)`
    pub fn new(origin_xz: [f32; 2], heights: &impl HeightField) -> Self {
        let mut vertices = Vec::with_capacity(16);
        for i in [-1.0f32, 1.0] {
            for j in [-1.0f32, 1.0] {
                for k in [-1.0f32, 1.0] {
                    let h = heights.height(i + origin_xz[0], j + origin_xz[1], k);
                    vertices.push(Vec4::new(i, 0.0, j, k));
                    vertices.push(Vec4::new(i, h, j, k));
                }
            }
        }
        let edges = terrain_edges(&vertices, GRID_DISTANCE);

        log::trace!(
            "Terrain chunk at ({}, {}): {} vertices, {} edges",
            origin_xz[0],
            origin_xz[1],
            vertices.len(),
            edges.len()
        );

        Self {
            origin: origin_xz,
            vertices,
            edges,
        }
    }

    /// Chunk origin in the (x, z) plane
    #[inline]
    pub fn origin(&self) -> [f32; 2] {
        self.origin
    }
}

impl Skeleton4D for TerrainChunk {
    fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Edges of a terrain skeleton
///
/// Two vertices are joined when they sit one grid unit apart in (x, z, w)
/// and are both on the base or both on the top surface, or when they share
/// the same column.
pub fn terrain_edges(vertices: &[Vec4], grid_distance: f32) -> Vec<Edge> {
    let mut edges = Vec::new();
    for i in 0..vertices.len() {
        let a = vertices[i];
        for j in (i + 1)..vertices.len() {
            let b = vertices[j];

            let same_column = a.x == b.x && a.z == b.z && a.w == b.w;
            let same_layer = (a.y == 0.0) == (b.y == 0.0);
            let (dx, dz, dw) = (a.x - b.x, a.z - b.z, a.w - b.w);
            let grid_dist = (dx * dx + dz * dz + dw * dw).sqrt();
            let neighbours = (grid_dist - grid_distance).abs() < GRID_TOLERANCE;

            if (neighbours && same_layer) || same_column {
                edges.push(Edge::new(i, j));
            }
        }
    }
    edges
}

/// Chunk origins on the outer border of a `size` x `size` grid
///
/// Chunks are spaced [`GRID_DISTANCE`] apart and centred on the origin.
pub fn terrain_ring(size: usize) -> Vec<[f32; 2]> {
    let half = (size / 2) as i32;
    let mut origins = Vec::new();
    for x in -half..=half {
        for z in -half..=half {
            let interior = x > -half && x < half && z > -half && z < half;
            if interior {
                continue;
            }
            origins.push([x as f32 * GRID_DISTANCE, z as f32 * GRID_DISTANCE]);
        }
    }
    origins
}
