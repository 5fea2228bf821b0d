//! Verlet points with implicit velocity.

use crate::float::Float;
use crate::vec::Vec2;

/// A simulated point. Velocity is the difference between the current and
/// the previous position.
#[derive(Clone, Debug, PartialEq)]
pub struct Point<F: Float> {
    pub position: Vec2<F>,
    pub prev_position: Vec2<F>,
}

impl<F: Float> Point<F> {
    /// Create a point at `position` moving with `velocity` (per step).
    pub fn new(position: Vec2<F>, velocity: Vec2<F>) -> Self {
        Point {
            position,
            prev_position: position - velocity,
        }
    }

    /// Implicit per-step velocity.
    pub fn velocity(&self) -> Vec2<F> {
        self.position - self.prev_position
    }

    /// Advance one step: `new = 2·position - prev_position + acceleration`.
    pub fn integrate(&mut self, acceleration: Vec2<F>) {
        let velocity = self.velocity() + acceleration;
        self.prev_position = self.position;
        self.position = self.position + velocity;
    }
}
