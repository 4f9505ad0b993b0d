//! Indexed triangle meshes: the source of initial particle positions.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Vertex positions plus triangle index triples.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriMesh<F: Float> {
    pub vertices: AllocVec<Vec3<F>>,
    pub faces: AllocVec<[usize; 3]>,
}

impl<F: Float> TriMesh<F> {
    pub fn new(vertices: AllocVec<Vec3<F>>, faces: AllocVec<[usize; 3]>) -> Self {
        TriMesh { vertices, faces }
    }

    /// Check that the mesh is non-empty and every face names three distinct,
    /// existing vertices.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.vertices.is_empty() || self.faces.is_empty() {
            return Err(PhysicsError::EmptyMesh);
        }
        let count = self.vertices.len();
        for (face, &[a, b, c]) in self.faces.iter().enumerate() {
            for index in [a, b, c] {
                if index >= count {
                    return Err(PhysicsError::FaceOutOfBounds { face, index, count });
                }
            }
            if a == b || b == c || a == c {
                return Err(PhysicsError::DegenerateFace { face });
            }
        }
        Ok(())
    }

    /// Unique undirected edges as `(low, high)` pairs, sorted.
    pub fn edges(&self) -> AllocVec<(usize, usize)> {
        let mut edges = AllocVec::with_capacity(self.faces.len() * 3);
        for &[a, b, c] in &self.faces {
            for (i, j) in [(a, b), (b, c), (c, a)] {
                edges.push(if i < j { (i, j) } else { (j, i) });
            }
        }
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    /// Scale every vertex component-wise.
    pub fn scale(&mut self, factors: Vec3<F>) {
        for v in self.vertices.iter_mut() {
            *v = v.component_mul(factors);
        }
    }

    /// UV sphere centred on the origin with its poles on the y axis.
    ///
    /// Layout: north pole at index 0, then `latitude - 1` rings of
    /// `longitude` vertices from north to south, then the south pole.
    /// Faces wind counter-clockwise seen from outside.
    pub fn uv_sphere(longitude: usize, latitude: usize, radius: F) -> Result<Self, PhysicsError> {
        if longitude < 3 {
            return Err(PhysicsError::InvalidConfig("uv sphere needs at least 3 longitude segments"));
        }
        if latitude < 2 {
            return Err(PhysicsError::InvalidConfig("uv sphere needs at least 2 latitude segments"));
        }
        if !(radius > F::zero()) {
            return Err(PhysicsError::InvalidConfig("uv sphere radius must be positive"));
        }

        let rings = latitude - 1;
        let mut vertices = AllocVec::with_capacity(rings * longitude + 2);
        vertices.push(Vec3::new(F::zero(), radius, F::zero()));
        for ring in 1..latitude {
            let theta = F::pi() * F::from_usize(ring) / F::from_usize(latitude);
            let (y, r) = (radius * theta.cos(), radius * theta.sin());
            for seg in 0..longitude {
                let phi = F::two() * F::pi() * F::from_usize(seg) / F::from_usize(longitude);
                vertices.push(Vec3::new(r * phi.cos(), y, r * phi.sin()));
            }
        }
        let south = vertices.len();
        vertices.push(Vec3::new(F::zero(), -radius, F::zero()));

        let ring_start = |ring: usize| 1 + ring * longitude;
        let mut faces = AllocVec::with_capacity(2 * longitude * rings);

        // With phi growing from +x toward +z, (next, current) is the
        // counter-clockwise order seen from above.
        for seg in 0..longitude {
            let next = (seg + 1) % longitude;
            faces.push([0, ring_start(0) + next, ring_start(0) + seg]);
        }
        for ring in 0..rings - 1 {
            let (top, bottom) = (ring_start(ring), ring_start(ring + 1));
            for seg in 0..longitude {
                let next = (seg + 1) % longitude;
                faces.push([top + seg, top + next, bottom + seg]);
                faces.push([top + next, bottom + next, bottom + seg]);
            }
        }
        let last = ring_start(rings - 1);
        for seg in 0..longitude {
            let next = (seg + 1) % longitude;
            faces.push([south, last + seg, last + next]);
        }

        Ok(TriMesh { vertices, faces })
    }
}
