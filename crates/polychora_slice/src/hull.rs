//! 3D convex hull of a point cloud
//!
//! Hulls are computed in `f64` by `chull` (quickhull). Before that, points
//! closer than a tolerance are merged and flat clouds are rejected; the
//! tolerance scales with the extent of the input, so the same hull comes out
//! whether a cross-section is a unit cube or a hundred units across.

use chull::ConvexHullWrapper;

use polychora_core::Vec3;

/// Tolerance relative to the bounding-box diagonal of the input
pub const RELATIVE_EPSILON: f32 = 1e-5;

/// Convex hull of a 3D point set, as outward-wound triangles
///
/// Faces wind counter-clockwise when seen from outside, so
/// `(b - a) x (c - a)` points away from the hull.
#[derive(Clone, Debug)]
pub struct ConvexHull3D {
    points: Vec<Vec3>,
    faces: Vec<[usize; 3]>,
}

impl ConvexHull3D {
    /// Compute the hull of `input`
    ///
    /// Returns `None` when the hull has no volume: fewer than 4 distinct
    /// points, all points collinear or coplanar, or `chull` rejecting the
    /// input.
    pub fn compute(input: &[Vec3]) -> Option<Self> {
        let (min, max) = bounds(input)?;
        let extent = (max - min).length();
        if extent <= 0.0 || !extent.is_finite() {
            return None;
        }
        let eps = extent * RELATIVE_EPSILON;

        let merged = merge_near_duplicates(input, eps);
        if merged.len() < 4 || !spans_volume(&merged, eps) {
            return None;
        }

        let coords: Vec<Vec<f64>> = merged
            .iter()
            .map(|p| vec![f64::from(p.x), f64::from(p.y), f64::from(p.z)])
            .collect();
        let hull = match ConvexHullWrapper::try_new(&coords, None) {
            Ok(hull) => hull,
            Err(e) => {
                log::trace!("No hull for {} points: {:?}", merged.len(), e);
                return None;
            }
        };

        let (vertices, indices) = hull.vertices_indices();
        let centroid = centroid(&vertices)?;
        let faces: Vec<[usize; 3]> = indices
            .chunks_exact(3)
            .map(|t| outward([t[0], t[1], t[2]], &vertices, centroid))
            .collect();
        if faces.len() < 4 {
            return None;
        }

        let points = vertices
            .iter()
            .map(|v| Vec3::new(v[0] as f32, v[1] as f32, v[2] as f32))
            .collect();
        Some(Self { points, faces })
    }

    /// Points the face indices refer to
    ///
    /// This is the input after duplicate merging; interior points stay in
    /// the list but no face uses them.
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Hull faces as index triples into [`ConvexHull3D::points`]
    #[inline]
    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Iterate faces as position triples
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.faces.iter().map(|f| f.map(|i| self.points[i]))
    }
}

fn centroid(vertices: &[Vec<f64>]) -> Option<[f64; 3]> {
    if vertices.is_empty() {
        return None;
    }
    let mut sum = [0.0f64; 3];
    for v in vertices {
        for (s, c) in sum.iter_mut().zip(v) {
            *s += c;
        }
    }
    let n = vertices.len() as f64;
    Some(sum.map(|s| s / n))
}

/// Reorder a face so its winding normal points away from `centroid`
///
/// The centroid of the hull vertices is interior to a convex hull.
fn outward(face: [usize; 3], vertices: &[Vec<f64>], centroid: [f64; 3]) -> [usize; 3] {
    let [a, b, c] = face.map(|i| [vertices[i][0], vertices[i][1], vertices[i][2]]);
    let ab = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let ac = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
    let normal = [
        ab[1] * ac[2] - ab[2] * ac[1],
        ab[2] * ac[0] - ab[0] * ac[2],
        ab[0] * ac[1] - ab[1] * ac[0],
    ];
    let out = [a[0] - centroid[0], a[1] - centroid[1], a[2] - centroid[2]];
    let facing = normal[0] * out[0] + normal[1] * out[1] + normal[2] * out[2];
    if facing < 0.0 {
        [face[0], face[2], face[1]]
    } else {
        face
    }
}

fn bounds(points: &[Vec3]) -> Option<(Vec3, Vec3)> {
    let first = *points.first()?;
    Some(points.iter().fold((first, first), |(lo, hi), &p| {
        (lo.min_components(p), hi.max_components(p))
    }))
}

/// Keep the first of every cluster of points closer than `eps`
fn merge_near_duplicates(points: &[Vec3], eps: f32) -> Vec<Vec3> {
    let eps_sq = eps * eps;
    let mut unique: Vec<Vec3> = Vec::with_capacity(points.len());
    for &p in points {
        if unique.iter().all(|&q| (p - q).length_squared() > eps_sq) {
            unique.push(p);
        }
    }
    unique
}

/// Whether the points span a volume thicker than `eps`
///
/// Checked before the hull is built so that flat slices are rejected with
/// the same extent-relative tolerance as duplicate merging.
fn spans_volume(points: &[Vec3], eps: f32) -> bool {
    let Some(&origin) = points.first() else {
        return false;
    };

    let Some((b, _)) = farthest(points, |p| (p - origin).length_squared()) else {
        return false;
    };
    let axis = points[b] - origin;
    if axis.length() <= eps {
        return false;
    }

    let dir = axis.normalized();
    let Some((c, line_dist)) = farthest(points, |p| {
        let v = p - origin;
        (v - dir * v.dot(dir)).length()
    }) else {
        return false;
    };
    if line_dist <= eps {
        return false;
    }

    let normal = axis.cross(points[c] - origin).normalized();
    farthest(points, |p| normal.dot(p - origin).abs())
        .is_some_and(|(_, plane_dist)| plane_dist > eps)
}

fn farthest(points: &[Vec3], metric: impl Fn(Vec3) -> f32) -> Option<(usize, f32)> {
    points
        .iter()
        .enumerate()
        .map(|(i, &p)| (i, metric(p)))
        .max_by(|x, y| x.1.total_cmp(&y.1))
}
