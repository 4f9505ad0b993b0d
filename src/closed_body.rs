//! Pressurized closed surface: a mesh turned into particles, edge springs
//! and an internal pressure force.

use crate::config::ClosedBodyParams;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::force::{GlobalForce, Gravity};
use crate::integrator::VerletIntegrator;
use crate::mesh::TriMesh;
use crate::observer::StepObserver;
use crate::particle::{Particle, ParticleHandle};
use crate::pressure::{LocalForce, LocalForceHandle, PressureForce};
use crate::simulation::Simulation;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;
use tracing::debug;

/// A closed triangle surface inflated by internal pressure.
///
/// Particle `i` is mesh vertex `i`, so positions can be copied straight back
/// into the vertex buffer after each update.
#[derive(Clone, Debug)]
pub struct ClosedBody<F: Float> {
    sim: Simulation<F>,
    pressure: LocalForceHandle,
}

impl<F: Float> ClosedBody<F> {
    pub fn new(mesh: &TriMesh<F>, params: &ClosedBodyParams<F>) -> Result<Self, PhysicsError> {
        mesh.validate()?;
        params.validate()?;

        let mut sim = Simulation::new().with_constraint_iterations(params.iterations);
        for &v in &mesh.vertices {
            sim.add_object(&Particle::new(v, params.mass));
        }

        let edges = mesh.edges();
        for &(a, b) in &edges {
            sim.add_spring(
                params.spring_stiffness,
                params.spring_damping,
                ParticleHandle(a),
                ParticleHandle(b),
            )?;
        }

        let pressure = sim.add_local_force(&LocalForce::Pressure(PressureForce::new(
            mesh.faces.clone(),
            params.pressure,
        )))?;

        if let Some(g) = params.gravity {
            sim.add_global_force(&GlobalForce::Gravity(Gravity::new(g)));
        }
        sim.add_integrator(&VerletIntegrator::with_drag(params.time_step, params.drag).into());

        debug!(
            vertices = mesh.vertices.len(),
            faces = mesh.faces.len(),
            springs = edges.len(),
            "built closed body"
        );

        Ok(ClosedBody { sim, pressure })
    }

    /// Change the pressure coefficient; takes effect on the next update.
    pub fn set_pressure(&mut self, pressure: F) {
        if let Some(p) = self.sim.local_force_mut(self.pressure).as_pressure_mut() {
            p.pressure = pressure;
        }
    }

    pub fn pressure(&self) -> F {
        self.pressure_force().map_or(F::zero(), |p| p.pressure)
    }

    /// Enclosed volume of the current geometry.
    pub fn volume(&self) -> F {
        self.pressure_force().map_or(F::zero(), |p| p.volume(self.sim.particles()))
    }

    pub fn surface_area(&self) -> F {
        self.pressure_force().map_or(F::zero(), |p| p.surface_area(self.sim.particles()))
    }

    pub fn faces(&self) -> &[[usize; 3]] {
        match self.pressure_force() {
            Some(p) => p.faces(),
            None => &[],
        }
    }

    pub fn update(&mut self, dt: F) {
        self.sim.update(dt);
    }

    pub fn step<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        self.sim.step(dt, observer);
    }

    pub fn vertex_object(&self, index: usize) -> &Particle<F> {
        self.sim.vertex_object(index)
    }

    pub fn num_vertex_objects(&self) -> usize {
        self.sim.num_vertex_objects()
    }

    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.sim.positions()
    }

    /// Rebuild a mesh from the current positions.
    pub fn to_mesh(&self) -> TriMesh<F> {
        TriMesh::new(self.positions(), self.faces().to_vec())
    }

    pub fn simulation(&self) -> &Simulation<F> {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation<F> {
        &mut self.sim
    }

    fn pressure_force(&self) -> Option<&PressureForce<F>> {
        self.sim.local_force(self.pressure).as_pressure()
    }
}
