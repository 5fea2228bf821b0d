//! Stroke-based rope authoring, kept outside the world.
//!
//! A stroke collects points while the user drags. The body only enters the
//! world once it has two points, and stays static until the stroke is
//! released so the half-drawn rope does not fall away from the cursor.
//!
//! A stroke belongs to the world generation it was started in. Once the
//! world is cleared the stroke is dropped without touching the world.

use crate::body::{Body, BodyId, Material, PointId};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;
use crate::world::World;

enum Stroke<F: Float> {
    Empty,
    Pending(Vec2<F>),
    Live { body: BodyId, last: PointId, generation: u64 },
}

/// In-progress rope drawn point by point.
///
/// ```
/// use verlet_world::{RopeBuilder, Vec2, World};
///
/// let mut world: World<f32> = World::default();
/// let mut rope = RopeBuilder::new();
/// rope.begin(&mut world).unwrap();
/// rope.extend(&mut world, Vec2::new(10.0, 10.0)).unwrap();
/// rope.extend(&mut world, Vec2::new(20.0, 10.0)).unwrap();
/// let body = rope.release(&mut world).unwrap();
/// assert!(body.is_some());
/// ```
pub struct RopeBuilder<F: Float> {
    material: Material<F>,
    stroke: Option<Stroke<F>>,
}

impl<F: Float> RopeBuilder<F> {
    /// Create a builder whose ropes use the default material.
    pub fn new() -> Self {
        Self::with_material(Material::new())
    }

    /// Create a builder whose ropes use `material`.
    pub fn with_material(material: Material<F>) -> Self {
        RopeBuilder { material, stroke: None }
    }

    /// True between `begin` and `release`.
    pub fn is_drawing(&self) -> bool {
        self.stroke.is_some()
    }

    /// Body of the current stroke, once it has reached the world.
    pub fn body(&self) -> Option<BodyId> {
        match self.stroke {
            Some(Stroke::Live { body, .. }) => Some(body),
            _ => None,
        }
    }

    /// Start a new stroke. A stroke still in progress is released first.
    pub fn begin(&mut self, world: &mut World<F>) -> Result<(), PhysicsError> {
        self.release(world)?;
        self.stroke = Some(Stroke::Empty);
        Ok(())
    }

    /// Drop the stroke without touching any world.
    pub fn reset(&mut self) {
        self.stroke = None;
    }

    /// Append `position` to the stroke.
    ///
    /// Returns the new point once it exists in the world. Positions equal to
    /// the previous one are ignored, as is any call outside a stroke. A
    /// stroke whose world was cleared ends here.
    pub fn extend(
        &mut self,
        world: &mut World<F>,
        position: Vec2<F>,
    ) -> Result<Option<PointId>, PhysicsError> {
        let zero = Vec2::zero();
        match self.stroke {
            None => Ok(None),
            Some(Stroke::Empty) => {
                self.stroke = Some(Stroke::Pending(position));
                Ok(None)
            }
            Some(Stroke::Pending(first)) => {
                if first == position {
                    return Ok(None);
                }
                let mut body = Body::with_material(self.material);
                body.set_static(true);
                let body = world.add_body(body);
                let p0 = world.add_point(body, first, zero)?;
                let p1 = world.add_point(body, position, zero)?;
                world.add_line(body, p0, p1)?;
                let generation = world.generation();
                self.stroke = Some(Stroke::Live { body, last: p1, generation });
                Ok(Some(p1))
            }
            Some(Stroke::Live { body, last, generation }) => {
                if generation != world.generation() {
                    self.stroke = None;
                    return Ok(None);
                }
                let last_pos = match world.point(last) {
                    Some(p) => p.position,
                    None => {
                        self.stroke = None;
                        return Err(PhysicsError::PointOutOfBounds {
                            body: last.body.0,
                            index: last.index,
                            count: world.body(last.body).map_or(0, |b| b.point_count()),
                        });
                    }
                };
                if last_pos == position {
                    return Ok(None);
                }
                let next = world.add_point(body, position, zero)?;
                world.add_line(body, last, next)?;
                self.stroke = Some(Stroke::Live { body, last: next, generation });
                Ok(Some(next))
            }
        }
    }

    /// End the stroke and let its body move. Returns the body, if the stroke
    /// got far enough to create one and the world was not cleared since.
    pub fn release(&mut self, world: &mut World<F>) -> Result<Option<BodyId>, PhysicsError> {
        match self.stroke.take() {
            Some(Stroke::Live { body, generation, .. }) if generation == world.generation() => {
                world.set_static(body, false)?;
                Ok(Some(body))
            }
            _ => Ok(None),
        }
    }
}

impl<F: Float> Default for RopeBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}
