//! Time integration schemes.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;

/// Advances a particle from its acceleration over a fixed time step.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Integrator<F: Float> {
    Verlet(VerletIntegrator<F>),
}

impl<F: Float> Integrator<F> {
    pub fn integrate(&self, acceleration: Vec3<F>, particle: &mut Particle<F>) {
        match self {
            Integrator::Verlet(v) => v.integrate(acceleration, particle),
        }
    }

    pub fn time_step(&self) -> F {
        match self {
            Integrator::Verlet(v) => v.time_step(),
        }
    }
}

impl<F: Float> From<VerletIntegrator<F>> for Integrator<F> {
    fn from(v: VerletIntegrator<F>) -> Self { Integrator::Verlet(v) }
}

/// Störmer–Verlet with drag:
/// `x' = (2 - drag) x - (1 - drag) x_prev + a dt²`.
///
/// Drag is clamped into [0, 1] whenever it is set.
#[derive(Clone, Debug, PartialEq)]
pub struct VerletIntegrator<F: Float> {
    time_step: F,
    drag: F,
}

impl<F: Float> VerletIntegrator<F> {
    pub fn new(time_step: F) -> Self {
        VerletIntegrator { time_step, drag: F::zero() }
    }

    pub fn with_drag(time_step: F, drag: F) -> Self {
        VerletIntegrator { time_step, drag: drag.clamp(F::zero(), F::one()) }
    }

    pub fn drag(&self) -> F { self.drag }

    pub fn set_drag(&mut self, drag: F) {
        self.drag = drag.clamp(F::zero(), F::one());
    }

    pub fn time_step(&self) -> F { self.time_step }

    pub fn integrate(&self, acceleration: Vec3<F>, particle: &mut Particle<F>) {
        let one = F::one();
        let dt = self.time_step;
        let new_pos = particle.pos.scale(F::two() - self.drag)
            - particle.prev_pos.scale(one - self.drag)
            + acceleration.scale(dt * dt);
        particle.prev_pos = particle.pos;
        particle.pos = new_pos;
    }
}
