//! The simulation: owns every particle, spring, constraint, force generator
//! and the integrator, and advances them one fixed step per call.

use crate::constraint::{Constraint, ConstraintHandle};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::force::GlobalForce;
use crate::integrator::Integrator;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::{Particle, ParticleHandle};
use crate::pressure::{LocalForce, LocalForceHandle};
use crate::spring::{Spring, SpringHandle};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;
use tracing::trace;

/// Default number of constraint relaxation passes per step.
pub const DEFAULT_CONSTRAINT_ITERATIONS: usize = 1;

/// Mass-spring-damper simulation stepped by a single integrator.
///
/// Everything added is cloned in, so the caller's prototypes are never
/// touched. Callers get index handles back; storage only grows, so every
/// handle stays valid for the life of the simulation.
///
/// One [`update`](Self::update) runs, in order:
/// 1. spring forces
/// 2. global forces on active particles
/// 3. local forces (e.g. pressure)
/// 4. integration of active particles
/// 5. `constraint_iterations` passes over all constraints
/// 6. the per-particle post-update hook
/// 7. force reset on active particles
#[derive(Clone, Debug)]
pub struct Simulation<F: Float> {
    particles: AllocVec<Particle<F>>,
    springs: AllocVec<Spring<F>>,
    constraints: AllocVec<Constraint<F>>,
    global_forces: AllocVec<GlobalForce<F>>,
    local_forces: AllocVec<LocalForce<F>>,
    integrator: Option<Integrator<F>>,
    /// Relaxation passes per step.
    pub constraint_iterations: usize,
}

impl<F: Float> Simulation<F> {
    pub fn new() -> Self {
        Simulation {
            particles: AllocVec::new(),
            springs: AllocVec::new(),
            constraints: AllocVec::new(),
            global_forces: AllocVec::new(),
            local_forces: AllocVec::new(),
            integrator: None,
            constraint_iterations: DEFAULT_CONSTRAINT_ITERATIONS,
        }
    }

    pub fn with_constraint_iterations(mut self, iterations: usize) -> Self {
        self.constraint_iterations = iterations;
        self
    }

    /// Take a copy of `particle` and return its handle.
    pub fn add_object(&mut self, particle: &Particle<F>) -> ParticleHandle {
        let handle = ParticleHandle(self.particles.len());
        self.particles.push(particle.clone());
        handle
    }

    /// Spring whose rest length is the current distance between `a` and `b`.
    pub fn add_spring(
        &mut self,
        stiffness: F,
        damping: F,
        a: ParticleHandle,
        b: ParticleHandle,
    ) -> Result<SpringHandle, PhysicsError> {
        self.check_handle(a)?;
        self.check_handle(b)?;
        let spring = Spring::from_particles(a, b, stiffness, damping, &self.particles);
        Ok(self.push_spring(spring))
    }

    pub fn add_spring_with_length(
        &mut self,
        stiffness: F,
        damping: F,
        rest_length: F,
        a: ParticleHandle,
        b: ParticleHandle,
    ) -> Result<SpringHandle, PhysicsError> {
        self.check_handle(a)?;
        self.check_handle(b)?;
        Ok(self.push_spring(Spring::new(a, b, stiffness, damping, rest_length)))
    }

    pub fn add_constraint(&mut self, constraint: &Constraint<F>) -> Result<ConstraintHandle, PhysicsError> {
        let (a, b) = constraint.particles();
        self.check_handle(a)?;
        if let Some(b) = b {
            self.check_handle(b)?;
        }
        let handle = ConstraintHandle(self.constraints.len());
        self.constraints.push(constraint.clone());
        Ok(handle)
    }

    pub fn add_global_force(&mut self, force: &GlobalForce<F>) {
        self.global_forces.push(force.clone());
    }

    pub fn add_local_force(&mut self, force: &LocalForce<F>) -> Result<LocalForceHandle, PhysicsError> {
        match force {
            LocalForce::Pressure(p) => {
                for (face, indices) in p.faces().iter().enumerate() {
                    for &index in indices {
                        if index >= self.particles.len() {
                            return Err(PhysicsError::FaceOutOfBounds {
                                face,
                                index,
                                count: self.particles.len(),
                            });
                        }
                    }
                }
            }
        }
        let handle = LocalForceHandle(self.local_forces.len());
        self.local_forces.push(force.clone());
        Ok(handle)
    }

    /// Replace the integrator.
    pub fn add_integrator(&mut self, integrator: &Integrator<F>) {
        self.integrator = Some(integrator.clone());
    }

    pub fn integrator(&self) -> Option<&Integrator<F>> {
        self.integrator.as_ref()
    }

    /// Advance one step. `dt` is the elapsed time fed to the post-update
    /// hook; the integrator uses its own fixed step.
    ///
    /// # Panics
    /// If no integrator was added, or an active particle has a mass that is
    /// not positive.
    pub fn update(&mut self, dt: F) {
        self.step(dt, &mut NoOpStepObserver);
    }

    /// [`update`](Self::update) with phase callbacks.
    pub fn step<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        let Some(integrator) = self.integrator.as_ref() else {
            panic!("Simulation::update called without an integrator");
        };

        for spring in &self.springs {
            spring.apply(&mut self.particles);
        }

        if !self.global_forces.is_empty() {
            for p in self.particles.iter_mut().filter(|p| p.is_active()) {
                for force in &self.global_forces {
                    force.apply(p);
                }
            }
        }

        for force in &self.local_forces {
            force.apply(&mut self.particles);
        }
        observer.on_forces_applied();

        for p in self.particles.iter_mut().filter(|p| p.is_active()) {
            let acceleration = p.acceleration();
            integrator.integrate(acceleration, p);
        }
        observer.on_integrate();

        for i in 0..self.constraint_iterations {
            for constraint in &self.constraints {
                constraint.satisfy(&mut self.particles);
            }
            observer.on_constraint_iteration(i);
        }

        for p in self.particles.iter_mut() {
            p.update(dt);
        }

        for p in self.particles.iter_mut().filter(|p| p.is_active()) {
            p.reset_force();
        }

        trace!(
            particles = self.particles.len(),
            springs = self.springs.len(),
            constraints = self.constraints.len(),
            "simulation step complete"
        );
        observer.on_step_complete();
    }

    /// # Panics
    /// If `index` is out of range.
    pub fn vertex_object(&self, index: usize) -> &Particle<F> {
        assert!(
            index < self.particles.len(),
            "vertex index {} out of bounds (count: {})",
            index,
            self.particles.len()
        );
        &self.particles[index]
    }

    /// # Panics
    /// If `index` is out of range.
    pub fn vertex_object_mut(&mut self, index: usize) -> &mut Particle<F> {
        assert!(
            index < self.particles.len(),
            "vertex index {} out of bounds (count: {})",
            index,
            self.particles.len()
        );
        &mut self.particles[index]
    }

    pub fn num_vertex_objects(&self) -> usize { self.particles.len() }

    pub fn particle(&self, handle: ParticleHandle) -> &Particle<F> { self.vertex_object(handle.0) }
    pub fn particle_mut(&mut self, handle: ParticleHandle) -> &mut Particle<F> { self.vertex_object_mut(handle.0) }
    pub fn particles(&self) -> &[Particle<F>] { &self.particles }

    pub fn spring(&self, handle: SpringHandle) -> &Spring<F> { &self.springs[handle.0] }
    pub fn spring_count(&self) -> usize { self.springs.len() }

    pub fn constraint(&self, handle: ConstraintHandle) -> &Constraint<F> { &self.constraints[handle.0] }
    pub fn constraint_mut(&mut self, handle: ConstraintHandle) -> &mut Constraint<F> { &mut self.constraints[handle.0] }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }

    pub fn local_force(&self, handle: LocalForceHandle) -> &LocalForce<F> { &self.local_forces[handle.0] }
    pub fn local_force_mut(&mut self, handle: LocalForceHandle) -> &mut LocalForce<F> { &mut self.local_forces[handle.0] }

    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    /// Mean particle position.
    pub fn centroid(&self) -> Vec3<F> {
        if self.particles.is_empty() {
            return Vec3::zero();
        }
        let mut sum = Vec3::zero();
        for p in &self.particles {
            sum += p.pos;
        }
        sum.scale(F::one() / F::from_usize(self.particles.len()))
    }

    fn check_handle(&self, handle: ParticleHandle) -> Result<(), PhysicsError> {
        if handle.0 < self.particles.len() {
            Ok(())
        } else {
            Err(PhysicsError::ParticleOutOfBounds { index: handle.0, count: self.particles.len() })
        }
    }

    fn push_spring(&mut self, spring: Spring<F>) -> SpringHandle {
        let handle = SpringHandle(self.springs.len());
        self.springs.push(spring);
        handle
    }
}

impl<F: Float> Default for Simulation<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrator::VerletIntegrator;

    #[test]
    fn add_object_clones_prototype() {
        let mut sim = Simulation::<f32>::new();
        let proto = Particle::new(Vec3::new(1.0, 2.0, 3.0), 1.0);
        let h = sim.add_object(&proto);
        sim.particle_mut(h).pos = Vec3::zero();
        assert_eq!(proto.pos, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(sim.num_vertex_objects(), 1);
    }

    #[test]
    fn foreign_handle_is_rejected() {
        let mut sim = Simulation::<f32>::new();
        let a = sim.add_object(&Particle::new(Vec3::zero(), 1.0));
        let err = sim.add_spring(1.0, 0.0, a, ParticleHandle(5));
        assert_eq!(err, Err(PhysicsError::ParticleOutOfBounds { index: 5, count: 1 }));
    }

    #[test]
    fn integrator_is_replaced() {
        let mut sim = Simulation::<f64>::new();
        sim.add_integrator(&VerletIntegrator::new(0.1).into());
        sim.add_integrator(&VerletIntegrator::new(0.2).into());
        assert_eq!(sim.integrator().map(Integrator::time_step), Some(0.2));
    }

    #[test]
    #[should_panic(expected = "without an integrator")]
    fn update_without_integrator_panics() {
        let mut sim = Simulation::<f32>::new();
        sim.update(0.1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn vertex_index_is_checked() {
        let sim = Simulation::<f32>::new();
        let _ = sim.vertex_object(0);
    }
}
