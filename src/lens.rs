//! A deformable lens: a flattened UV-sphere closed body with interior
//! springs and a rim that can be pinned and moved.

use crate::closed_body::ClosedBody;
use crate::config::LensConfig;
use crate::constraint::{Constraint, ConstraintHandle, PointConstraint};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::mesh::TriMesh;
use crate::observer::StepObserver;
use crate::particle::{Particle, ParticleHandle};
use crate::simulation::Simulation;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;
use tracing::debug;

/// Lens body whose optical axis is y and whose rim lies in the xz plane.
#[derive(Clone, Debug)]
pub struct Lens<F: Float> {
    body: ClosedBody<F>,
    longitude: usize,
    latitude: usize,
    rim: AllocVec<ConstraintHandle>,
}

impl<F: Float> Lens<F> {
    pub fn new(config: &LensConfig<F>) -> Result<Self, PhysicsError> {
        config.validate()?;

        let mut mesh = TriMesh::uv_sphere(config.longitude, config.latitude, config.radius)?;
        mesh.scale(Vec3::new(F::one(), config.thickness, F::one()));

        let mut lens = Lens {
            body: ClosedBody::new(&mesh, &config.body)?,
            longitude: config.longitude,
            latitude: config.latitude,
            rim: AllocVec::new(),
        };
        lens.add_interior_springs(config.interior_stiffness, config.interior_damping)?;

        debug!(
            longitude = config.longitude,
            latitude = config.latitude,
            particles = lens.body.num_vertex_objects(),
            "built lens"
        );
        Ok(lens)
    }

    /// First vertex index of `ring` (0 is the ring next to the north pole).
    pub fn ring_start(&self, ring: usize) -> usize {
        1 + ring * self.longitude
    }

    pub fn ring_count(&self) -> usize {
        self.latitude - 1
    }

    pub fn north_pole(&self) -> usize { 0 }

    pub fn south_pole(&self) -> usize { self.body.num_vertex_objects() - 1 }

    /// Ring lying in the xz plane.
    pub fn equator_ring(&self) -> usize {
        self.latitude / 2 - 1
    }

    /// Springs across the interior: each ring vertex to its diametric
    /// opposite, and pole to pole.
    fn add_interior_springs(&mut self, stiffness: F, damping: F) -> Result<(), PhysicsError> {
        let half = self.longitude / 2;
        for ring in 0..self.ring_count() {
            let start = self.ring_start(ring);
            for seg in 0..half {
                let (a, b) = (ParticleHandle(start + seg), ParticleHandle(start + seg + half));
                self.body.simulation_mut().add_spring(stiffness, damping, a, b)?;
            }
        }
        let (north, south) = (ParticleHandle(self.north_pole()), ParticleHandle(self.south_pole()));
        self.body.simulation_mut().add_spring(stiffness, damping, north, south)?;
        Ok(())
    }

    /// Pin `rows` rings centred on the equator to their current positions.
    ///
    /// With an even `rows` the extra ring is taken on the north side. Returns
    /// the new constraint handles; they are also kept for [`move_rim`].
    ///
    /// [`move_rim`]: Self::move_rim
    pub fn pin_rim(&mut self, rows: usize) -> Result<AllocVec<ConstraintHandle>, PhysicsError> {
        let rings = self.ring_count();
        let rows = rows.min(rings);
        let first = (self.equator_ring() + 1).saturating_sub(rows / 2 + 1);
        let last = (first + rows).min(rings);

        let mut added = AllocVec::with_capacity(rows * self.longitude);
        for ring in first..last {
            let start = self.ring_start(ring);
            for index in start..start + self.longitude {
                let target = self.body.vertex_object(index).pos;
                let constraint = Constraint::Point(PointConstraint::new(ParticleHandle(index), target));
                added.push(self.body.simulation_mut().add_constraint(&constraint)?);
            }
        }
        debug!(rings = last - first, constraints = added.len(), "pinned lens rim");
        self.rim.extend_from_slice(&added);
        Ok(added)
    }

    /// Move every rim target radially away from (positive) or toward
    /// (negative) the optical axis.
    pub fn move_rim(&mut self, amount: F) {
        for &handle in &self.rim {
            if let Some(point) = self.body.simulation_mut().constraint_mut(handle).as_point_mut() {
                point.move_radially(amount);
            }
        }
    }

    pub fn rim(&self) -> &[ConstraintHandle] {
        &self.rim
    }

    pub fn set_pressure(&mut self, pressure: F) {
        self.body.set_pressure(pressure);
    }

    pub fn pressure(&self) -> F {
        self.body.pressure()
    }

    pub fn update(&mut self, dt: F) {
        self.body.update(dt);
    }

    pub fn step<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        self.body.step(dt, observer);
    }

    pub fn vertex_object(&self, index: usize) -> &Particle<F> {
        self.body.vertex_object(index)
    }

    pub fn num_vertex_objects(&self) -> usize {
        self.body.num_vertex_objects()
    }

    /// Distance between the poles along the optical axis.
    pub fn axial_thickness(&self) -> F {
        let north = self.vertex_object(self.north_pole()).pos;
        let south = self.vertex_object(self.south_pole()).pos;
        (north.y - south.y).abs()
    }

    pub fn body(&self) -> &ClosedBody<F> {
        &self.body
    }

    pub fn simulation(&self) -> &Simulation<F> {
        self.body.simulation()
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation<F> {
        self.body.simulation_mut()
    }
}
