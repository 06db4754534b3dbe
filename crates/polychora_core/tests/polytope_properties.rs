//! Integration tests for polytope generation
//!
//! These tests check the generated skeletons of every regular polychoron:
//! 1. Vertex and edge counts
//! 2. Every edge has the shape's edge length
//! 3. No two vertices are closer than one edge length
//! 4. Every vertex has the same degree

use polychora_core::{generate, seed_table, ShapeKind, Skeleton4D, EDGE_TOLERANCE};

/// (shape, vertices, edges, vertex degree)
const EXPECTED: [(ShapeKind, usize, usize, usize); 6] = [
    (ShapeKind::Cell5, 5, 10, 4),
    (ShapeKind::Hypercube, 16, 32, 4),
    (ShapeKind::Cell16, 8, 24, 6),
    (ShapeKind::Cell24, 24, 96, 8),
    (ShapeKind::Cell120, 600, 1200, 4),
    (ShapeKind::Cell600, 120, 720, 12),
];

// ==================== Counts ====================

#[test]
fn test_vertex_and_edge_counts() {
    for (kind, vertices, edges, _) in EXPECTED {
        let polytope = generate(kind).expect("polychoron should generate");
        assert_eq!(polytope.vertex_count(), vertices, "{} vertex count", kind);
        assert_eq!(polytope.edge_count(), edges, "{} edge count", kind);
    }
}

#[test]
fn test_none_shape_is_empty() {
    let polytope = generate(ShapeKind::None).unwrap();
    assert_eq!(polytope.vertex_count(), 0);
    assert_eq!(polytope.edge_count(), 0);
}

#[test]
fn test_every_vertex_has_same_degree() {
    for (kind, vertices, _, degree) in EXPECTED {
        let polytope = generate(kind).unwrap();
        let mut degrees = vec![0usize; vertices];
        for edge in polytope.edges() {
            degrees[edge.i0] += 1;
            degrees[edge.i1] += 1;
        }
        assert!(
            degrees.iter().all(|&d| d == degree),
            "{}: expected every vertex to have degree {}",
            kind,
            degree
        );
    }
}

// ==================== Distances ====================

#[test]
fn test_edges_have_edge_length() {
    for (kind, _, _, _) in EXPECTED {
        let polytope = generate(kind).unwrap();
        let edge_length = seed_table(kind).unwrap().edge_length;
        let vertices = polytope.vertices();

        for edge in polytope.edges() {
            assert!(edge.i0 < edge.i1, "{}: edge {:?} not canonical", kind, edge);
            let dist = vertices[edge.i0].distance(vertices[edge.i1]);
            assert!(
                (dist - edge_length).abs() < EDGE_TOLERANCE,
                "{}: edge {:?} has length {}, expected {}",
                kind,
                edge,
                dist,
                edge_length
            );
        }
    }
}

#[test]
fn test_no_vertices_closer_than_an_edge() {
    for (kind, _, _, _) in EXPECTED {
        let polytope = generate(kind).unwrap();
        let edge_length = seed_table(kind).unwrap().edge_length;
        let vertices = polytope.vertices();

        for i in 0..vertices.len() {
            for j in (i + 1)..vertices.len() {
                let dist = vertices[i].distance(vertices[j]);
                assert!(
                    dist > edge_length - EDGE_TOLERANCE,
                    "{}: vertices {} and {} are only {} apart",
                    kind,
                    i,
                    j,
                    dist
                );
            }
        }
    }
}

#[test]
fn test_orbit_shapes_are_centred() {
    for kind in [ShapeKind::Hypercube, ShapeKind::Cell16, ShapeKind::Cell24, ShapeKind::Cell120, ShapeKind::Cell600] {
        let polytope = generate(kind).unwrap();
        let n = polytope.vertex_count() as f32;
        let sum = polytope
            .vertices()
            .iter()
            .fold([0.0f32; 4], |acc, v| [acc[0] + v.x, acc[1] + v.y, acc[2] + v.z, acc[3] + v.w]);
        for c in sum {
            assert!((c / n).abs() < 1e-4, "{} centroid is off-centre", kind);
        }
    }
}

#[test]
fn test_orbit_shapes_lie_on_a_sphere() {
    for kind in [ShapeKind::Hypercube, ShapeKind::Cell16, ShapeKind::Cell24, ShapeKind::Cell120, ShapeKind::Cell600] {
        let polytope = generate(kind).unwrap();
        let radius = polytope.vertices()[0].length();
        for v in polytope.vertices() {
            assert!((v.length() - radius).abs() < 1e-4, "{} is not vertex-transitive", kind);
        }
    }
}

// ==================== Parsing ====================

#[test]
fn test_generate_from_config_name() {
    let kind: ShapeKind = "600-cell".parse().unwrap();
    assert_eq!(generate(kind).unwrap().vertex_count(), 120);
    assert!("dodecaplex".parse::<ShapeKind>().is_err());
}
