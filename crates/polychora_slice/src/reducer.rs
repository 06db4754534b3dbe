//! Reduction of transformed 4D skeletons to displayable 3D geometry
//!
//! The [`Reducer`] owns every scratch buffer of the pipeline, so reducing an
//! entity each tick allocates nothing once the buffers have grown to size.

use serde::{Serialize, Deserialize};

use polychora_core::{Entity, GeometryError, Skeleton4D, Vec3, Vec4};

use crate::mesh::Mesh3D;
use crate::mesher::{ConvexHullMesher, Triangulation};
use crate::projector::{OrthographicProjector, Segment3};
use crate::slicer::HyperplaneSlicer;

/// How a 4D skeleton is turned into 3D geometry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Slice with the hyperplane and mesh the cross-section
    #[default]
    CrossSection,
    /// Project every edge to a wireframe segment
    Orthographic,
}

/// Output of one reduction, borrowed from the reducer's buffers
#[derive(Clone, Copy, Debug)]
pub enum ReducedGeometry<'a> {
    /// A closed cross-section mesh
    Mesh(&'a Mesh3D),
    /// One segment per skeleton edge
    Wireframe(&'a [Segment3]),
    /// Nothing to display this tick
    Nothing,
}

impl ReducedGeometry<'_> {
    /// Number of primitives (triangles or segments)
    pub fn primitive_count(&self) -> usize {
        match self {
            ReducedGeometry::Mesh(mesh) => mesh.triangle_count(),
            ReducedGeometry::Wireframe(segments) => segments.len(),
            ReducedGeometry::Nothing => 0,
        }
    }
}

/// Slicer, mesher and projector plus their pooled buffers
#[derive(Debug, Default)]
pub struct Reducer {
    mode: ProjectionMode,
    slicer: HyperplaneSlicer,
    mesher: ConvexHullMesher,
    projector: OrthographicProjector,
    slice_points: Vec<Vec3>,
    mesh: Mesh3D,
    segments: Vec<Segment3>,
    last_triangulation: Option<Triangulation>,
}

impl Reducer {
    pub fn new(mode: ProjectionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Use a custom slicing hyperplane
    pub fn with_slicer(mut self, slicer: HyperplaneSlicer) -> Self {
        self.slicer = slicer;
        self
    }

    /// Use a custom projector
    pub fn with_projector(mut self, projector: OrthographicProjector) -> Self {
        self.projector = projector;
        self
    }

    #[inline]
    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ProjectionMode) {
        self.mode = mode;
    }

    pub fn slicer_mut(&mut self) -> &mut HyperplaneSlicer {
        &mut self.slicer
    }

    /// Points of the most recent cross-section
    pub fn slice_points(&self) -> &[Vec3] {
        &self.slice_points
    }

    /// Outcome of the most recent triangulation, if any ran
    pub fn last_triangulation(&self) -> Option<Triangulation> {
        self.last_triangulation
    }

    /// Reduce a skeleton whose vertices have already been transformed
    ///
    /// `world_vertices` must be index-parallel to `skeleton.vertices()`.
    pub fn reduce(
        &mut self,
        skeleton: &dyn Skeleton4D,
        world_vertices: &[Vec4],
    ) -> Result<ReducedGeometry<'_>, GeometryError> {
        if world_vertices.len() != skeleton.vertex_count() {
            return Err(GeometryError::LengthMismatch {
                expected: skeleton.vertex_count(),
                actual: world_vertices.len(),
            });
        }

        match self.mode {
            ProjectionMode::CrossSection => {
                self.slicer
                    .slice_into(skeleton.edges(), world_vertices, &mut self.slice_points)?;
                let result = self.mesher.triangulate(&self.slice_points, &mut self.mesh);
                self.last_triangulation = Some(result);

                match result {
                    Triangulation::Mesh { .. } => Ok(ReducedGeometry::Mesh(&self.mesh)),
                    Triangulation::NoMesh(reason) => {
                        log::trace!(
                            "No cross-section mesh from {} points: {}",
                            self.slice_points.len(),
                            reason
                        );
                        Ok(ReducedGeometry::Nothing)
                    }
                }
            }
            ProjectionMode::Orthographic => {
                self.projector
                    .segments(world_vertices, skeleton.edges(), &mut self.segments)?;
                if self.segments.is_empty() {
                    Ok(ReducedGeometry::Nothing)
                } else {
                    Ok(ReducedGeometry::Wireframe(&self.segments))
                }
            }
        }
    }

    /// Reduce an entity using its cached world-space vertices
    pub fn reduce_entity(&mut self, entity: &Entity) -> Result<ReducedGeometry<'_>, GeometryError> {
        self.reduce(entity.skeleton(), entity.world_vertices())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polychora_core::{generate, ShapeKind, Transform4D};

    fn hypercube_at_w(w: f32) -> Entity {
        Entity::from_shape(generate(ShapeKind::Hypercube).unwrap())
            .with_transform(Transform4D::from_position(Vec4::new(0.0, 0.0, 0.0, w)))
    }

    #[test]
    fn test_default_mode_is_cross_section() {
        assert_eq!(Reducer::default().mode(), ProjectionMode::CrossSection);
        assert_eq!(ProjectionMode::default(), ProjectionMode::CrossSection);
    }

    #[test]
    fn test_cross_section_of_hypercube() {
        let mut reducer = Reducer::new(ProjectionMode::CrossSection);
        let entity = hypercube_at_w(0.5);

        let geometry = reducer.reduce_entity(&entity).unwrap();
        assert!(matches!(geometry, ReducedGeometry::Mesh(_)));
        assert_eq!(geometry.primitive_count(), 12);
        assert_eq!(reducer.slice_points().len(), 8);
    }

    #[test]
    fn test_hypercube_out_of_reach_gives_nothing() {
        let mut reducer = Reducer::new(ProjectionMode::CrossSection);
        let entity = hypercube_at_w(5.0);

        let geometry = reducer.reduce_entity(&entity).unwrap();
        assert!(matches!(geometry, ReducedGeometry::Nothing));
        assert_eq!(
            reducer.last_triangulation(),
            Some(Triangulation::NoMesh(crate::NoMeshReason::TooFewPoints))
        );
    }

    #[test]
    fn test_orthographic_wireframe() {
        let mut reducer = Reducer::new(ProjectionMode::Orthographic);
        let entity = hypercube_at_w(0.0);

        let geometry = reducer.reduce_entity(&entity).unwrap();
        assert!(matches!(geometry, ReducedGeometry::Wireframe(s) if s.len() == 32));
    }

    #[test]
    fn test_none_shape_gives_nothing() {
        let mut reducer = Reducer::new(ProjectionMode::Orthographic);
        let entity = Entity::from_shape(generate(ShapeKind::None).unwrap());
        assert!(matches!(reducer.reduce_entity(&entity).unwrap(), ReducedGeometry::Nothing));
    }

    #[test]
    fn test_length_mismatch() {
        let mut reducer = Reducer::default();
        let polytope = generate(ShapeKind::Cell16).unwrap();
        let err = reducer.reduce(&polytope, &[Vec4::ZERO; 3]).unwrap_err();
        assert_eq!(err, GeometryError::LengthMismatch { expected: 8, actual: 3 });
    }
}
