//! Bodies: points and lines sharing one material.

use crate::float::Float;
use crate::line::LineConstraint;
use crate::point::Point;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Handle to a body owned by a [`World`](crate::World).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

/// Handle to a point: the owning body plus the index in its point list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointId {
    pub body: BodyId,
    pub index: usize,
}

/// Material shared by all points and lines of a body.
///
/// # Builder Pattern
/// ```
/// use verlet_world::Material;
///
/// let rubber: Material<f32> = Material::new()
///     .with_stiffness(20)
///     .with_bounce(0.8)
///     .with_friction(0.05);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material<F: Float> {
    /// Line relaxation passes per step. Zero disables the lines. Default: 10.
    pub stiffness: usize,
    /// Ground bounce factor, nominally [0, 1]. Default: 0.25.
    pub bounce: F,
    /// Ground friction factor, nominally [0, 1]. 1.0 stops sliding. Default: 0.1.
    pub friction: F,
}

impl<F: Float> Material<F> {
    /// Create a material with default values.
    pub fn new() -> Self {
        Material {
            stiffness: 10,
            bounce: F::from_f32(0.25),
            friction: F::from_f32(0.1),
        }
    }

    /// Set the number of line relaxation passes.
    pub fn with_stiffness(mut self, stiffness: usize) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the ground bounce factor.
    pub fn with_bounce(mut self, bounce: F) -> Self {
        self.bounce = bounce;
        self
    }

    /// Set the ground friction factor.
    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }
}

impl<F: Float> Default for Material<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// A set of points and the lines relaxed on their behalf.
///
/// Points are owned here; lines only hold [`PointId`] handles and may reach
/// into other bodies. Points and lines are added through the
/// [`World`](crate::World) so handles and rest lengths can be checked.
#[derive(Debug)]
pub struct Body<F: Float> {
    pub material: Material<F>,
    is_static: bool,
    pub(crate) points: AllocVec<Point<F>>,
    pub(crate) lines: AllocVec<LineConstraint<F>>,
}

impl<F: Float> Body<F> {
    /// Empty, non-static body with the default material.
    pub fn new() -> Self {
        Self::with_material(Material::new())
    }

    /// Empty, non-static body with the given material.
    pub fn with_material(material: Material<F>) -> Self {
        Body {
            material,
            is_static: false,
            points: AllocVec::new(),
            lines: AllocVec::new(),
        }
    }

    /// Static bodies are skipped by integration and by every resolution
    /// stage.
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn set_static(&mut self, is_static: bool) {
        self.is_static = is_static;
    }

    pub fn points(&self) -> &[Point<F>] {
        &self.points
    }

    pub fn lines(&self) -> &[LineConstraint<F>] {
        &self.lines
    }

    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn line_count(&self) -> usize { self.lines.len() }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.points.iter().map(|p| p.position).collect()
    }

    pub(crate) fn push_point(&mut self, point: Point<F>) -> usize {
        let idx = self.points.len();
        self.points.push(point);
        idx
    }
}

impl<F: Float> Default for Body<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_material() {
        let body: Body<f32> = Body::new();
        assert_eq!(body.material.stiffness, 10);
        assert!((body.material.bounce - 0.25).abs() < 1e-6);
        assert!((body.material.friction - 0.1).abs() < 1e-6);
        assert!(!body.is_static());
        assert_eq!(body.point_count(), 0);
    }

    #[test]
    fn static_flag_toggles() {
        let mut body: Body<f64> = Body::new();
        body.set_static(true);
        assert!(body.is_static());
        body.set_static(false);
        assert!(!body.is_static());
    }
}
