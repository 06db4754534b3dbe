//! Triangulation of cross-section point clouds

use std::fmt;

use polychora_core::Vec3;

use crate::hull::ConvexHull3D;
use crate::mesh::Mesh3D;

/// Why a point cloud produced no mesh
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoMeshReason {
    /// Fewer than 3 points
    TooFewPoints,
    /// The points have no 3D hull (duplicates, collinear or coplanar)
    Degenerate,
}

impl fmt::Display for NoMeshReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoMeshReason::TooFewPoints => f.write_str("too few points"),
            NoMeshReason::Degenerate => f.write_str("degenerate point cloud"),
        }
    }
}

/// Result of one triangulation
///
/// Not having a mesh is a normal outcome: a shape that misses the slicing
/// hyperplane, or only touches it, has nothing to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Triangulation {
    /// The mesh holds this many triangles
    Mesh { triangles: usize },
    /// The mesh was emptied
    NoMesh(NoMeshReason),
}

impl Triangulation {
    /// True when a closed mesh was written
    #[inline]
    pub fn is_mesh(&self) -> bool {
        matches!(self, Triangulation::Mesh { .. })
    }
}

/// Turns slice point clouds into closed triangle meshes via their convex hull
#[derive(Clone, Copy, Debug, Default)]
pub struct ConvexHullMesher;

impl ConvexHullMesher {
    /// Create a mesher; it holds no state
    pub fn new() -> Self {
        Self
    }

    /// Triangulate `points` into `mesh`
    ///
    /// Every hull face becomes one triangle with three fresh vertices, wound
    /// outwards. On [`Triangulation::NoMesh`] the mesh is emptied.
    pub fn triangulate(&self, points: &[Vec3], mesh: &mut Mesh3D) -> Triangulation {
        if points.len() < 3 {
            mesh.clear();
            return Triangulation::NoMesh(NoMeshReason::TooFewPoints);
        }

        let Some(hull) = ConvexHull3D::compute(points) else {
            mesh.clear();
            return Triangulation::NoMesh(NoMeshReason::Degenerate);
        };

        mesh.set_triangles(hull.triangles());
        Triangulation::Mesh {
            triangles: mesh.triangle_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_points() {
        let mut mesh = Mesh3D::new();
        let result = ConvexHullMesher::new().triangulate(&[Vec3::X, Vec3::Y], &mut mesh);
        assert_eq!(result, Triangulation::NoMesh(NoMeshReason::TooFewPoints));
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_three_points_are_degenerate() {
        let mut mesh = Mesh3D::new();
        let result = ConvexHullMesher::new().triangulate(&[Vec3::X, Vec3::Y, Vec3::Z], &mut mesh);
        assert_eq!(result, Triangulation::NoMesh(NoMeshReason::Degenerate));
    }

    #[test]
    fn test_tetrahedron() {
        let mut mesh = Mesh3D::new();
        let points = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z];
        let result = ConvexHullMesher::new().triangulate(&points, &mut mesh);

        assert_eq!(result, Triangulation::Mesh { triangles: 4 });
        assert!(result.is_mesh());
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.indices(), (0..12).collect::<Vec<u32>>().as_slice());
    }

    #[test]
    fn test_normals_point_outwards() {
        let mut mesh = Mesh3D::new();
        let points = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z];
        ConvexHullMesher::new().triangulate(&points, &mut mesh);

        let centroid = Vec3::new(0.25, 0.25, 0.25);
        for (p, n) in mesh.positions().iter().zip(mesh.normals()) {
            assert!(n.dot(*p - centroid) > 0.0);
            assert!((n.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_no_mesh_empties_previous_mesh() {
        let mut mesh = Mesh3D::new();
        let mesher = ConvexHullMesher::new();
        mesher.triangulate(&[Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z], &mut mesh);
        assert!(!mesh.is_empty());

        let result = mesher.triangulate(&[Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::X + Vec3::Y], &mut mesh);
        assert_eq!(result, Triangulation::NoMesh(NoMeshReason::Degenerate));
        assert!(mesh.is_empty());
        assert_eq!(mesh.capacity(), 12);
    }

    #[test]
    fn test_no_mesh_reason_display() {
        assert_eq!(NoMeshReason::TooFewPoints.to_string(), "too few points");
        assert_eq!(NoMeshReason::Degenerate.to_string(), "degenerate point cloud");
    }
}
