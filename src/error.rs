//! Error types for building simulations.
//!
//! Only construction can fail with an error. Broken preconditions inside a
//! step (no integrator, non-positive mass, bad vertex index) panic instead.

use thiserror::Error;

/// Errors that can occur while assembling a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    #[error("mass must be positive and finite")]
    InvalidMass,
    /// Particle handle does not belong to this simulation.
    #[error("particle index {index} out of bounds (count: {count})")]
    ParticleOutOfBounds { index: usize, count: usize },
    /// A face refers to a vertex that does not exist.
    #[error("face {face} refers to vertex {index} (vertex count: {count})")]
    FaceOutOfBounds { face: usize, index: usize, count: usize },
    /// A face repeats a vertex index.
    #[error("face {face} repeats a vertex")]
    DegenerateFace { face: usize },
    /// Mesh has no vertices or no faces.
    #[error("mesh has no vertices or no faces")]
    EmptyMesh,
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
