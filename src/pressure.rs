//! Local force generators: internal gas pressure over a closed surface.

use crate::float::Float;
use crate::particle::Particle;
use alloc::vec::Vec as AllocVec;
use tracing::warn;

/// Stable index of a local force owned by a [`Simulation`](crate::Simulation).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocalForceHandle(pub(crate) usize);

impl LocalForceHandle {
    pub fn index(self) -> usize { self.0 }
}

/// A force source scoped to part of the particle set.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum LocalForce<F: Float> {
    Pressure(PressureForce<F>),
}

impl<F: Float> LocalForce<F> {
    pub fn apply(&self, particles: &mut [Particle<F>]) {
        match self {
            LocalForce::Pressure(p) => p.apply(particles),
        }
    }

    pub fn as_pressure(&self) -> Option<&PressureForce<F>> {
        match self {
            LocalForce::Pressure(p) => Some(p),
        }
    }

    pub fn as_pressure_mut(&mut self) -> Option<&mut PressureForce<F>> {
        match self {
            LocalForce::Pressure(p) => Some(p),
        }
    }
}

impl<F: Float> From<PressureForce<F>> for LocalForce<F> {
    fn from(p: PressureForce<F>) -> Self { LocalForce::Pressure(p) }
}

/// Ideal-gas style pressure inside a closed triangle surface.
///
/// Each step the enclosed volume `V` is measured with the divergence theorem
/// and every face is pushed outward by `pressure / |V| * area`, split evenly
/// between its three vertices. Winding may be either orientation; the sign
/// of `V` decides which side is out.
#[derive(Clone, Debug, PartialEq)]
pub struct PressureForce<F: Float> {
    faces: AllocVec<[usize; 3]>,
    pub pressure: F,
}

impl<F: Float> PressureForce<F> {
    /// Face indices must address particles of the simulation this force is
    /// added to.
    pub fn new(faces: AllocVec<[usize; 3]>, pressure: F) -> Self {
        PressureForce { faces, pressure }
    }

    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// Signed enclosed volume; positive for counter-clockwise outward winding.
    pub fn signed_volume(&self, particles: &[Particle<F>]) -> F {
        let mut six_v = F::zero();
        for &[i, j, k] in &self.faces {
            let (a, b, c) = (particles[i].pos, particles[j].pos, particles[k].pos);
            six_v = six_v + a.dot(b.cross(c));
        }
        six_v / F::from_f32(6.0)
    }

    pub fn volume(&self, particles: &[Particle<F>]) -> F {
        self.signed_volume(particles).abs()
    }

    pub fn surface_area(&self, particles: &[Particle<F>]) -> F {
        let mut area = F::zero();
        for &[i, j, k] in &self.faces {
            let (a, b, c) = (particles[i].pos, particles[j].pos, particles[k].pos);
            area = area + (b - a).cross(c - a).length();
        }
        area / F::two()
    }

    pub fn apply(&self, particles: &mut [Particle<F>]) {
        let volume = self.signed_volume(particles);
        if volume.is_near_zero(F::degenerate_epsilon()) || !volume.is_finite() {
            warn!(?volume, "degenerate enclosed volume, skipping pressure");
            return;
        }

        // |n| = 2 * area, so scale by P / (2 V) and split into thirds.
        let per_vertex = self.pressure / (F::from_f32(6.0) * volume);

        for &[i, j, k] in &self.faces {
            let (a, b, c) = (particles[i].pos, particles[j].pos, particles[k].pos);
            let normal = (b - a).cross(c - a);
            if normal.length_sq().is_near_zero(F::degenerate_epsilon()) {
                continue;
            }
            let force = normal.scale(per_vertex);
            particles[i].apply_force(force);
            particles[j].apply_force(force);
            particles[k].apply_force(force);
        }
    }
}
