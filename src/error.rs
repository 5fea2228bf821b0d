//! Error types for world construction.

use core::fmt;

/// Errors returned when a world is built with handles or arguments it
/// cannot accept. Numerical degeneracies inside a step are not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Body handle does not refer to a body of this world.
    BodyOutOfBounds { index: usize, count: usize },
    /// Point handle does not refer to a point of the given body.
    PointOutOfBounds { body: usize, index: usize, count: usize },
    /// An operation needs more points than it was given.
    InsufficientPoints { needed: usize, got: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::BodyOutOfBounds { index, count } => {
                write!(f, "body index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::PointOutOfBounds { body, index, count } => {
                write!(
                    f,
                    "point index {} out of bounds in body {} (count: {})",
                    index, body, count
                )
            }
            PhysicsError::InsufficientPoints { needed, got } => {
                write!(f, "need at least {} points, got {}", needed, got)
            }
        }
    }
}
