//! Pooled 3D triangle mesh
//!
//! The mesh is rewritten every tick. Backing buffers only ever grow: they are
//! kept at the largest size seen so far, and when a smaller mesh is written the
//! unused tail is zero-filled. Consumers read the active prefix through the
//! accessors, which makes the tail invisible to them.

use polychora_core::Vec3;

/// A triangle list with per-vertex normals
///
/// Every triangle owns three fresh vertices, so index `3n..3n + 3` always
/// holds triangle `n` and indices increase monotonically.
#[derive(Clone, Debug, Default)]
pub struct Mesh3D {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
    vertex_count: usize,
}

impl Mesh3D {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with room for `triangles` triangles
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            positions: vec![Vec3::ZERO; triangles * 3],
            normals: vec![Vec3::ZERO; triangles * 3],
            indices: vec![0; triangles * 3],
            vertex_count: 0,
        }
    }

    /// Replace the mesh contents with the given triangles
    ///
    /// Normals are recomputed from the winding afterwards.
    pub fn set_triangles<I>(&mut self, triangles: I)
    where
        I: IntoIterator<Item = [Vec3; 3]>,
    {
        let previous = self.vertex_count;
        let mut n = 0;
        for triangle in triangles {
            for p in triangle {
                if n < self.positions.len() {
                    self.positions[n] = p;
                    self.indices[n] = n as u32;
                } else {
                    self.positions.push(p);
                    self.normals.push(Vec3::ZERO);
                    self.indices.push(n as u32);
                }
                n += 1;
            }
        }
        self.vertex_count = n;
        self.zero_tail(previous);
        self.recalculate_normals();
    }

    /// Empty the mesh, keeping its buffers
    pub fn clear(&mut self) {
        let previous = self.vertex_count;
        self.vertex_count = 0;
        self.zero_tail(previous);
    }

    fn zero_tail(&mut self, previous: usize) {
        if previous > self.vertex_count {
            let tail = self.vertex_count..previous;
            self.positions[tail.clone()].fill(Vec3::ZERO);
            self.normals[tail.clone()].fill(Vec3::ZERO);
            self.indices[tail].fill(0);
        }
    }

    /// Recompute per-vertex normals from triangle winding
    ///
    /// Face normals are accumulated onto their vertices and normalized, so
    /// shared vertices would get an area-weighted average.
    pub fn recalculate_normals(&mut self) {
        let active = self.vertex_count;
        self.normals[..active].fill(Vec3::ZERO);

        for tri in self.indices[..active].chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| i as usize);
            let face = (self.positions[b] - self.positions[a])
                .cross(self.positions[c] - self.positions[a]);
            for i in [a, b, c] {
                self.normals[i] += face;
            }
        }

        for n in &mut self.normals[..active] {
            *n = n.normalized();
        }
    }

    /// Active vertex positions
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions[..self.vertex_count]
    }

    /// Active vertex normals
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals[..self.vertex_count]
    }

    /// Active triangle indices
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices[..self.vertex_count]
    }

    /// Positions as raw bytes, for upload to a display layer
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.positions())
    }

    /// Normals as raw bytes, for upload to a display layer
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.normals())
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertex_count / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Size of the pooled buffers in vertices
    #[inline]
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// Iterate active triangles as position triples
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.positions()
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
    }
}
