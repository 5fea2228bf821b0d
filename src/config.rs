//! Configuration types for the world.

use crate::float::Float;
use crate::vec::Vec2;

/// Per-world simulation settings.
///
/// # Builder Pattern
/// ```
/// use verlet_world::config::WorldConfig;
/// use verlet_world::vec::Vec2;
///
/// let config: WorldConfig<f32> = WorldConfig::new()
///     .with_gravity(Vec2::new(0.0, 1.0))
///     .with_bottom(456.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldConfig<F: Float> {
    /// Velocity added to every free point each step. Default: (0, 0.5).
    pub gravity: Vec2<F>,
    /// Ground height. Points with a larger y are pushed back up. Default: 0.
    pub bottom: F,
}

impl<F: Float> WorldConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        WorldConfig {
            gravity: Vec2::new(F::zero(), F::half()),
            bottom: F::zero(),
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the ground height.
    pub fn with_bottom(mut self, bottom: F) -> Self {
        self.bottom = bottom;
        self
    }
}

impl<F: Float> Default for WorldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
