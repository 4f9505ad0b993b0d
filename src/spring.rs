//! Damped linear springs between two particles.

use crate::float::Float;
use crate::particle::{Particle, ParticleHandle};
use crate::vec::Vec3;

/// Stable index of a spring owned by a [`Simulation`](crate::Simulation).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpringHandle(pub(crate) usize);

impl SpringHandle {
    pub fn index(self) -> usize { self.0 }
}

/// Hookean spring with a damper acting along the spring axis.
///
/// Damping uses the per-step displacement (`pos - prev_pos`) of each end, so
/// `damping` is expressed per integrator step rather than per second.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub a: ParticleHandle,
    pub b: ParticleHandle,
    pub stiffness: F,
    pub damping: F,
    rest_length: F,
}

impl<F: Float> Spring<F> {
    pub fn new(a: ParticleHandle, b: ParticleHandle, stiffness: F, damping: F, rest_length: F) -> Self {
        Spring { a, b, stiffness, damping, rest_length }
    }

    /// Spring whose rest length is the current separation of its ends.
    pub fn from_particles(
        a: ParticleHandle,
        b: ParticleHandle,
        stiffness: F,
        damping: F,
        particles: &[Particle<F>],
    ) -> Self {
        let rest_length = particles[a.0].pos.distance(particles[b.0].pos);
        Spring { a, b, stiffness, damping, rest_length }
    }

    pub fn rest_length(&self) -> F {
        self.rest_length
    }

    /// Force on `a`; `b` receives its negation.
    ///
    /// `None` when the ends coincide and the spring axis is undefined.
    pub fn force(&self, particles: &[Particle<F>]) -> Option<Vec3<F>> {
        let pa = &particles[self.a.0];
        let pb = &particles[self.b.0];

        let delta = pb.pos - pa.pos;
        let length = delta.length();
        if length.is_near_zero(F::degenerate_epsilon()) {
            return None;
        }
        let dir = delta.scale(F::one() / length);

        let stretch = length - self.rest_length;
        let closing = (pb.velocity_raw() - pa.velocity_raw()).dot(dir);

        Some(dir.scale(self.stiffness * stretch + self.damping * closing))
    }

    pub fn apply(&self, particles: &mut [Particle<F>]) {
        if let Some(force) = self.force(particles) {
            particles[self.a.0].apply_force(force);
            particles[self.b.0].apply_force(-force);
        }
    }
}
