//! Step observer trait for monitoring simulation progress.

use crate::body::{BodyId, PointId};

/// Trait for observing world steps.
///
/// Implement this trait to trace solver progress (debug overlays, contact
/// counters, profiling). All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after all non-static points have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each line relaxation pass of a body.
    fn on_line_pass(&mut self, _body: BodyId, _pass: usize) {}

    /// Called after a point was projected onto the ground.
    fn on_ground_contact(&mut self, _point: PointId) {}

    /// Called after a point was pushed out of circle `_circle`.
    fn on_circle_contact(&mut self, _point: PointId, _circle: usize) {}

    /// Called when a step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Used by [`World::update`](crate::World::update).
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
