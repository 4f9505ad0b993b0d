//! Point masses stepped by position-based (Verlet) integration.

use crate::float::Float;
use crate::vec::Vec3;

/// Whether a particle takes part in force accumulation and integration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ParticleKind {
    /// Receives forces, is integrated and has its force reset every step.
    #[default]
    Active,
    /// Never moved by the simulation. Forces may still pile up on it.
    Fixed,
}

/// Stable index of a particle owned by a [`Simulation`](crate::Simulation).
///
/// Also the mesh-vertex index for bodies built from a mesh.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleHandle(pub(crate) usize);

impl ParticleHandle {
    pub fn index(self) -> usize { self.0 }
}

/// A point mass with implicit velocity (current minus previous position).
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub pos: Vec3<F>,
    pub prev_pos: Vec3<F>,
    /// Resultant force accumulated during the current step.
    pub force: Vec3<F>,
    pub mass: F,
    pub kind: ParticleKind,
    /// Velocity measured by the last post-update hook.
    pub velocity: Vec3<F>,
}

impl<F: Float> Particle<F> {
    pub fn new(pos: Vec3<F>, mass: F) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            force: Vec3::zero(),
            mass,
            kind: ParticleKind::Active,
            velocity: Vec3::zero(),
        }
    }

    /// A particle that the simulation never moves.
    pub fn fixed(pos: Vec3<F>, mass: F) -> Self {
        Particle { kind: ParticleKind::Fixed, ..Self::new(pos, mass) }
    }

    pub fn is_active(&self) -> bool {
        self.kind == ParticleKind::Active
    }

    pub fn is_fixed(&self) -> bool {
        self.kind == ParticleKind::Fixed
    }

    pub fn apply_force(&mut self, force: Vec3<F>) {
        self.force += force;
    }

    pub fn reset_force(&mut self) {
        self.force = Vec3::zero();
    }

    /// Acceleration from the accumulated force.
    ///
    /// # Panics
    /// If the mass is not strictly positive and finite.
    pub fn acceleration(&self) -> Vec3<F> {
        assert!(
            self.mass > F::zero() && self.mass.is_finite(),
            "particle mass must be positive and finite, got {:?}",
            self.mass
        );
        self.force.scale(F::one() / self.mass)
    }

    /// Displacement over the last integration step.
    pub fn velocity_raw(&self) -> Vec3<F> {
        self.pos - self.prev_pos
    }

    /// Post-update hook, run once per step after constraint relaxation.
    pub fn update(&mut self, dt: F) {
        match self.kind {
            ParticleKind::Active => {
                self.velocity = if dt > F::zero() {
                    self.velocity_raw().scale(F::one() / dt)
                } else {
                    Vec3::zero()
                };
            }
            ParticleKind::Fixed => {
                self.prev_pos = self.pos;
                self.velocity = Vec3::zero();
            }
        }
    }

    /// Teleport without introducing velocity.
    pub fn move_to(&mut self, pos: Vec3<F>) {
        self.pos = pos;
        self.prev_pos = pos;
        self.velocity = Vec3::zero();
    }

    /// Stop integrating this particle. Starts with a clean force.
    pub fn fix(&mut self) {
        self.kind = ParticleKind::Fixed;
        self.prev_pos = self.pos;
        self.velocity = Vec3::zero();
        self.force = Vec3::zero();
    }

    /// Resume integration. Force piled up while fixed is discarded.
    pub fn release(&mut self) {
        self.kind = ParticleKind::Active;
        self.prev_pos = self.pos;
        self.force = Vec3::zero();
    }
}
