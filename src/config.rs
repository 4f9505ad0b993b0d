//! Configuration types for closed bodies and lenses.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec3;

/// Parameters for a [`ClosedBody`](crate::ClosedBody).
///
/// # Builder Pattern
/// ```
/// use softlens::config::ClosedBodyParams;
///
/// let params: ClosedBodyParams<f32> = ClosedBodyParams::new()
///     .with_pressure(5.0)
///     .with_mass(0.5)
///     .with_spring(40.0, 0.2)
///     .with_iterations(4);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosedBodyParams<F: Float> {
    /// Internal pressure coefficient. Default: 1.0.
    pub pressure: F,
    /// Mass of every surface particle. Default: 1.0.
    pub mass: F,
    /// Stiffness of the springs along mesh edges. Default: 10.0.
    pub spring_stiffness: F,
    /// Damping of the springs along mesh edges. Default: 0.1.
    pub spring_damping: F,
    /// Constraint relaxation passes per step. Default: 1.
    pub iterations: usize,
    /// Fixed integrator time step. Default: 1/20 s.
    pub time_step: F,
    /// Verlet drag, clamped to [0, 1]. Default: 0.01.
    pub drag: F,
    /// Optional gravity acceleration. Default: none.
    pub gravity: Option<Vec3<F>>,
}

impl<F: Float> ClosedBodyParams<F> {
    pub fn new() -> Self {
        ClosedBodyParams {
            pressure: F::one(),
            mass: F::one(),
            spring_stiffness: F::from_f32(10.0),
            spring_damping: F::from_f32(0.1),
            iterations: 1,
            time_step: F::from_f32(1.0 / 20.0),
            drag: F::from_f32(0.01),
            gravity: None,
        }
    }

    /// Set the internal pressure coefficient.
    pub fn with_pressure(mut self, pressure: F) -> Self {
        self.pressure = pressure;
        self
    }

    /// Set the mass of every surface particle.
    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    /// Set the stiffness and damping of the edge springs.
    pub fn with_spring(mut self, stiffness: F, damping: F) -> Self {
        self.spring_stiffness = stiffness;
        self.spring_damping = damping;
        self
    }

    /// Set the number of constraint passes per step.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the fixed integrator time step.
    pub fn with_time_step(mut self, time_step: F) -> Self {
        self.time_step = time_step;
        self
    }

    /// Set the Verlet drag.
    pub fn with_drag(mut self, drag: F) -> Self {
        self.drag = drag;
        self
    }

    /// Set the constant gravity acceleration.
    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = Some(gravity);
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.mass > F::zero() && self.mass.is_finite()) {
            return Err(PhysicsError::InvalidMass);
        }
        if !(self.time_step > F::zero() && self.time_step.is_finite()) {
            return Err(PhysicsError::InvalidConfig("time step must be positive"));
        }
        if !self.pressure.is_finite() {
            return Err(PhysicsError::InvalidConfig("pressure must be finite"));
        }
        Ok(())
    }
}

impl<F: Float> Default for ClosedBodyParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything needed to build a [`Lens`](crate::Lens).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LensConfig<F: Float> {
    /// Segments around the optical axis. Default: 16.
    pub longitude: usize,
    /// Segments from pole to pole. Default: 12.
    pub latitude: usize,
    /// Sphere radius before flattening. Default: 1.0.
    pub radius: F,
    /// Scale along the optical (y) axis, in (0, 1] for a flattened lens.
    /// Default: 0.4.
    pub thickness: F,
    /// Stiffness of the springs across the lens interior. Default: 5.0.
    pub interior_stiffness: F,
    /// Damping of the interior springs. Default: 0.1.
    pub interior_damping: F,
    /// Parameters of the surface body.
    pub body: ClosedBodyParams<F>,
}

impl<F: Float> LensConfig<F> {
    pub fn new() -> Self {
        LensConfig {
            longitude: 16,
            latitude: 12,
            radius: F::one(),
            thickness: F::from_f32(0.4),
            interior_stiffness: F::from_f32(5.0),
            interior_damping: F::from_f32(0.1),
            body: ClosedBodyParams::new(),
        }
    }

    /// Set the longitude and latitude segment counts.
    pub fn with_segments(mut self, longitude: usize, latitude: usize) -> Self {
        self.longitude = longitude;
        self.latitude = latitude;
        self
    }

    /// Set the sphere radius before flattening.
    pub fn with_radius(mut self, radius: F) -> Self {
        self.radius = radius;
        self
    }

    /// Set the scale along the optical axis.
    pub fn with_thickness(mut self, thickness: F) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the stiffness and damping of the interior springs.
    pub fn with_interior_spring(mut self, stiffness: F, damping: F) -> Self {
        self.interior_stiffness = stiffness;
        self.interior_damping = damping;
        self
    }

    /// Set the surface body parameters.
    pub fn with_body(mut self, body: ClosedBodyParams<F>) -> Self {
        self.body = body;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.longitude < 4 || self.longitude % 2 != 0 {
            return Err(PhysicsError::InvalidConfig("longitude must be even and at least 4"));
        }
        if self.latitude < 2 || self.latitude % 2 != 0 {
            return Err(PhysicsError::InvalidConfig("latitude must be even and at least 2"));
        }
        if !(self.radius > F::zero()) {
            return Err(PhysicsError::InvalidConfig("radius must be positive"));
        }
        if !(self.thickness > F::zero()) {
            return Err(PhysicsError::InvalidConfig("thickness must be positive"));
        }
        self.body.validate()
    }
}

impl<F: Float> Default for LensConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
