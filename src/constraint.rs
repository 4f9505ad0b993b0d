//! Positional constraints projected after integration: point and distance.

use crate::float::Float;
use crate::particle::{Particle, ParticleHandle};
use crate::vec::Vec3;

/// Stable index of a constraint owned by a [`Simulation`](crate::Simulation).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConstraintHandle(pub(crate) usize);

impl ConstraintHandle {
    pub fn index(self) -> usize { self.0 }
}

/// A rule that moves particle positions directly instead of applying forces.
///
/// Fixed particles are never moved by any constraint.
#[derive(Clone, Debug, PartialEq)]
pub enum Constraint<F: Float> {
    Point(PointConstraint<F>),
    Distance(DistanceConstraint<F>),
}

/// Pins a particle to a target position.
#[derive(Clone, Debug, PartialEq)]
pub struct PointConstraint<F: Float> {
    pub particle: ParticleHandle,
    pub target: Vec3<F>,
}

/// Keeps two particles at a fixed separation.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    pub a: ParticleHandle,
    pub b: ParticleHandle,
    pub length: F,
    /// Fraction of the error corrected per pass, in [0, 1].
    pub stiffness: F,
}

impl<F: Float> Constraint<F> {
    pub fn satisfy(&self, particles: &mut [Particle<F>]) {
        match self {
            Constraint::Point(c) => c.satisfy(particles),
            Constraint::Distance(c) => c.satisfy(particles),
        }
    }

    /// Particles this constraint moves.
    pub fn particles(&self) -> (ParticleHandle, Option<ParticleHandle>) {
        match self {
            Constraint::Point(c) => (c.particle, None),
            Constraint::Distance(c) => (c.a, Some(c.b)),
        }
    }

    pub fn as_point_mut(&mut self) -> Option<&mut PointConstraint<F>> {
        match self {
            Constraint::Point(c) => Some(c),
            Constraint::Distance(_) => None,
        }
    }
}

impl<F: Float> From<PointConstraint<F>> for Constraint<F> {
    fn from(c: PointConstraint<F>) -> Self { Constraint::Point(c) }
}

impl<F: Float> From<DistanceConstraint<F>> for Constraint<F> {
    fn from(c: DistanceConstraint<F>) -> Self { Constraint::Distance(c) }
}

impl<F: Float> PointConstraint<F> {
    pub fn new(particle: ParticleHandle, target: Vec3<F>) -> Self {
        PointConstraint { particle, target }
    }

    pub fn satisfy(&self, particles: &mut [Particle<F>]) {
        let p = &mut particles[self.particle.0];
        if p.is_active() {
            p.pos = self.target;
        }
    }

    /// Slide the target along its horizontal (x, 0, z) direction from the
    /// y axis. Targets on the axis stay put.
    pub fn move_radially(&mut self, amount: F) {
        let radial = Vec3::new(self.target.x, F::zero(), self.target.z).normalize();
        self.target += radial.scale(amount);
    }
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(a: ParticleHandle, b: ParticleHandle, length: F, stiffness: F) -> Self {
        DistanceConstraint { a, b, length, stiffness: stiffness.clamp(F::zero(), F::one()) }
    }

    /// Constraint holding the current separation of the two particles.
    pub fn from_particles(a: ParticleHandle, b: ParticleHandle, particles: &[Particle<F>], stiffness: F) -> Self {
        let length = particles[a.0].pos.distance(particles[b.0].pos);
        Self::new(a, b, length, stiffness)
    }

    /// Mass-weighted projection of both ends toward `length`.
    pub fn satisfy(&self, particles: &mut [Particle<F>]) {
        let pa = &particles[self.a.0];
        let pb = &particles[self.b.0];

        let wa = inverse_mass(pa);
        let wb = inverse_mass(pb);
        let w_total = wa + wb;
        if w_total.is_near_zero(F::degenerate_epsilon()) {
            return; // both fixed
        }

        let delta = pb.pos - pa.pos;
        let dist = delta.length();
        if dist.is_near_zero(F::degenerate_epsilon()) {
            return; // degenerate
        }

        let error = dist - self.length;
        let correction = delta.scale(error * self.stiffness / dist);

        particles[self.a.0].pos += correction.scale(wa / w_total);
        particles[self.b.0].pos -= correction.scale(wb / w_total);
    }
}

fn inverse_mass<F: Float>(p: &Particle<F>) -> F {
    if p.is_fixed() || p.mass.is_near_zero(F::degenerate_epsilon()) {
        F::zero()
    } else {
        F::one() / p.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn point_constraint_snaps_to_target() {
        let mut particles = vec![Particle::new(Vec3::new(3.0f32, -1.0, 2.0), 1.0)];
        let c = PointConstraint::new(ParticleHandle(0), Vec3::new(0.0, 1.0, 0.0));
        c.satisfy(&mut particles);
        assert_eq!(particles[0].pos, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn point_constraint_leaves_fixed_particle() {
        let mut particles = vec![Particle::fixed(Vec3::new(3.0f32, -1.0, 2.0), 1.0)];
        let c = PointConstraint::new(ParticleHandle(0), Vec3::zero());
        c.satisfy(&mut particles);
        assert_eq!(particles[0].pos, Vec3::new(3.0, -1.0, 2.0));
    }

    #[test]
    fn move_radially_ignores_height() {
        let mut c = PointConstraint::new(ParticleHandle(0), Vec3::new(3.0f64, 5.0, 4.0));
        c.move_radially(5.0);
        assert!((c.target.x - 6.0).abs() < 1e-12);
        assert!((c.target.y - 5.0).abs() < 1e-12);
        assert!((c.target.z - 8.0).abs() < 1e-12);
    }

    #[test]
    fn move_radially_on_axis_is_noop() {
        let mut c = PointConstraint::new(ParticleHandle(0), Vec3::new(0.0f32, 2.0, 0.0));
        c.move_radially(1.0);
        assert_eq!(c.target, Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn heavier_end_moves_less() {
        let mut particles = vec![
            Particle::new(Vec3::new(0.0f32, 0.0, 0.0), 10.0),
            Particle::new(Vec3::new(10.0f32, 0.0, 0.0), 1.0),
        ];
        let c = DistanceConstraint::new(ParticleHandle(0), ParticleHandle(1), 5.0, 1.0);
        c.satisfy(&mut particles);

        let heavy = particles[0].pos.x.abs();
        let light = (particles[1].pos.x - 10.0).abs();
        assert!(heavy < light, "heavy moved {}, light moved {}", heavy, light);
        assert!((particles[0].pos.distance(particles[1].pos) - 5.0).abs() < 1e-4);
    }

    #[test]
    fn distance_against_fixed_end_moves_only_active() {
        let mut particles = vec![
            Particle::fixed(Vec3::new(0.0f32, 0.0, 0.0), 1.0),
            Particle::new(Vec3::new(0.0f32, 4.0, 0.0), 1.0),
        ];
        let c = DistanceConstraint::new(ParticleHandle(0), ParticleHandle(1), 2.0, 1.0);
        c.satisfy(&mut particles);
        assert_eq!(particles[0].pos, Vec3::zero());
        assert!((particles[1].pos.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn from_particles_holds_current_separation() {
        let mut particles = vec![
            Particle::new(Vec3::new(0.0f64, 0.0, 0.0), 1.0),
            Particle::new(Vec3::new(0.0f64, 3.0, 4.0), 1.0),
        ];
        let c = DistanceConstraint::from_particles(ParticleHandle(0), ParticleHandle(1), &particles, 2.0);
        assert_eq!(c.length, 5.0);
        assert_eq!(c.stiffness, 1.0);

        particles[1].pos = Vec3::new(0.0, 6.0, 8.0);
        c.satisfy(&mut particles);
        assert!((particles[0].pos.distance(particles[1].pos) - 5.0).abs() < 1e-12);
    }
}
