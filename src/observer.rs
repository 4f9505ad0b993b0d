//! Step observer trait for monitoring simulation progress.

/// Hooks into the phases of [`Simulation::step`](crate::Simulation::step).
///
/// All methods default to no-ops, so implementors only override what they
/// need (debug drawing, profiling, recording intermediate positions).
pub trait StepObserver {
    /// Called once springs, global and local forces have been accumulated.
    fn on_forces_applied(&mut self) {}

    /// Called after all active particles have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each constraint relaxation pass.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when a step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// Observer that does nothing.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
