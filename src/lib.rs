//! Pressurized mass-spring soft bodies with Verlet integration.
//!
//! `softlens` simulates a closed, deformable surface (a crystalline lens in
//! the motivating application) as point masses joined by damped springs,
//! inflated by an internal pressure force and held by positional
//! constraints. One call to [`Simulation::update`] runs a fixed pipeline:
//! springs, global forces, local forces, integration, constraint
//! relaxation, post-update hook, force reset.
//!
//! # Features
//!
//! - **Particles**: point masses with implicit velocity, active or fixed
//! - **Springs**: Hookean springs with axial damping
//! - **Force generators**: gravity and uniform forces; pressure from the
//!   enclosed volume of a triangle mesh
//! - **Verlet integration**: drag-damped Störmer–Verlet with a fixed step
//! - **Constraints**: point pins and distance rods, iterative relaxation
//! - **Lenses**: UV-sphere lens bodies with interior springs and a movable rim
//! - **Observable**: Monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: needs only `alloc`
//!
//! # Example
//!
//! ```
//! use softlens::{Particle, Simulation, Vec3, VerletIntegrator};
//!
//! let mut sim = Simulation::<f32>::new();
//! let a = sim.add_object(&Particle::new(Vec3::new(0.0, 0.0, 0.0), 1.0));
//! let b = sim.add_object(&Particle::new(Vec3::new(2.0, 0.0, 0.0), 1.0));
//! sim.add_spring_with_length(10.0, 0.0, 1.0, a, b)?;
//! sim.add_integrator(&VerletIntegrator::new(0.05).into());
//!
//! sim.update(0.05);
//! assert!(sim.particle(a).pos.x > 0.0);
//! # Ok::<(), softlens::PhysicsError>(())
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod spring;
pub mod constraint;
pub mod force;
pub mod pressure;
pub mod integrator;
pub mod simulation;
pub mod mesh;
pub mod closed_body;
pub mod lens;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use particle::{Particle, ParticleHandle, ParticleKind};
pub use spring::{Spring, SpringHandle};
pub use constraint::{Constraint, ConstraintHandle, DistanceConstraint, PointConstraint};
pub use force::{GlobalForce, Gravity, STANDARD_GRAVITY};
pub use pressure::{LocalForce, LocalForceHandle, PressureForce};
pub use integrator::{Integrator, VerletIntegrator};
pub use simulation::Simulation;
pub use mesh::TriMesh;
pub use closed_body::ClosedBody;
pub use lens::Lens;
pub use config::{ClosedBodyParams, LensConfig};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
