//! Static circular obstacles.

use crate::float::Float;
use crate::vec::Vec2;

/// A fixed obstacle. Never integrated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle<F: Float> {
    pub position: Vec2<F>,
    pub radius: F,
}

impl<F: Float> Circle<F> {
    /// Create an obstacle centered at `position`.
    pub fn new(position: Vec2<F>, radius: F) -> Self {
        Circle { position, radius }
    }
}

