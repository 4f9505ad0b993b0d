//! Global force generators, applied to every active particle each step.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;

/// Standard gravity in m/s².
pub const STANDARD_GRAVITY: f32 = 9.80665;

/// A force source acting uniformly on all active particles.
#[derive(Clone, Debug, PartialEq)]
pub enum GlobalForce<F: Float> {
    Gravity(Gravity<F>),
    /// The same force on every particle, independent of mass.
    Uniform(Vec3<F>),
}

impl<F: Float> GlobalForce<F> {
    pub fn apply(&self, particle: &mut Particle<F>) {
        match self {
            GlobalForce::Gravity(g) => g.apply(particle),
            GlobalForce::Uniform(force) => particle.apply_force(*force),
        }
    }
}

impl<F: Float> From<Gravity<F>> for GlobalForce<F> {
    fn from(g: Gravity<F>) -> Self { GlobalForce::Gravity(g) }
}

/// Constant acceleration, applied as `mass * acceleration`.
#[derive(Clone, Debug, PartialEq)]
pub struct Gravity<F: Float> {
    pub acceleration: Vec3<F>,
}

impl<F: Float> Gravity<F> {
    pub fn new(acceleration: Vec3<F>) -> Self {
        Gravity { acceleration }
    }

    pub fn apply(&self, particle: &mut Particle<F>) {
        particle.apply_force(self.acceleration.scale(particle.mass));
    }
}

impl<F: Float> Default for Gravity<F> {
    /// Standard gravity pointing down the y axis.
    fn default() -> Self {
        Gravity::new(Vec3::new(F::zero(), -F::from_f32(STANDARD_GRAVITY), F::zero()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_scales_with_mass() {
        let mut p = Particle::new(Vec3::new(0.0f64, 0.0, 0.0), 2.0);
        Gravity::default().apply(&mut p);
        assert!((p.force.y + 2.0 * 9.80665).abs() < 1e-5);
        assert_eq!(p.force.x, 0.0);
        assert_eq!(p.force.z, 0.0);
    }

    #[test]
    fn uniform_ignores_mass() {
        let mut p = Particle::new(Vec3::new(0.0f32, 0.0, 0.0), 5.0);
        GlobalForce::Uniform(Vec3::new(1.0, 0.0, 0.0)).apply(&mut p);
        assert_eq!(p.force, Vec3::new(1.0, 0.0, 0.0));
    }
}
