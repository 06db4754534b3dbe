//! Polytope generation from the seed table
//!
//! Expands seeds under the sign/permutation orbits, removes duplicates and
//! infers edges by distance. Generation runs once per shape; the result is a
//! static skeleton that transforms read from every tick.

use polychora_math::Vec4;

use crate::orbit;
use crate::seeds::{seed_table, ShapeKind, ShapeSeed};
use crate::shape::{Edge, Skeleton4D};
use crate::GeometryError;

/// Absolute tolerance used when matching pair distances to the edge length
pub const EDGE_TOLERANCE: f32 = 1e-4;

/// A generated 4D polytope: deduplicated vertices plus inferred edges
///
/// Every edge connects two vertices whose distance is the polytope's edge
/// length within [`EDGE_TOLERANCE`]. Edges are emitted with `i0 < i1`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polytope {
    vertices: Vec<Vec4>,
    edges: Vec<Edge>,
    edge_length: f32,
}

impl Polytope {
    /// Build a polytope from its generating seed
    pub fn from_seed(seed: &ShapeSeed) -> Self {
        let mut points: Vec<[f32; 4]> = if seed.seed_is_final {
            seed.seeds.iter().map(|s| s.coords).collect()
        } else {
            seed.seeds
                .iter()
                .flat_map(|s| orbit::orbit(s.coords, s.parity))
                .collect()
        };
        orbit::dedup_exact(&mut points);

        let vertices: Vec<Vec4> = points.into_iter().map(Vec4::from_array).collect();
        let edges = infer_edges(&vertices, seed.edge_length);

        Self {
            vertices,
            edges,
            edge_length: seed.edge_length,
        }
    }

    /// Build a polytope from explicit vertices and edges
    ///
    /// Used for procedural skeletons whose edges follow their own rules.
    pub fn from_parts(vertices: Vec<Vec4>, edges: Vec<Edge>, edge_length: f32) -> Self {
        Self { vertices, edges, edge_length }
    }

    /// The edge length this polytope was generated with
    #[inline]
    pub fn edge_length(&self) -> f32 {
        self.edge_length
    }

    /// Whether the polytope has no vertices (the `None` shape)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl Skeleton4D for Polytope {
    fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Generate the polytope for a shape identifier
///
/// Fails with [`GeometryError::Configuration`] for identifiers without a
/// seed entry.
pub fn generate(kind: ShapeKind) -> Result<Polytope, GeometryError> {
    let seed = seed_table(kind)?;
    let polytope = Polytope::from_seed(&seed);
    log::debug!(
        "Generated {}: {} vertices, {} edges (edge length {})",
        kind,
        polytope.vertex_count(),
        polytope.edge_count(),
        seed.edge_length
    );
    Ok(polytope)
}

/// Every unordered vertex pair whose distance matches `edge_length`
pub fn infer_edges(vertices: &[Vec4], edge_length: f32) -> Vec<Edge> {
    let mut edges = Vec::new();
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            let dist = vertices[i].distance(vertices[j]);
            if (dist - edge_length).abs() < EDGE_TOLERANCE {
                edges.push(Edge::new(i, j));
            }
        }
    }
    edges
}
