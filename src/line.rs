//! Rest-length line constraints between two points.

use crate::body::PointId;
use crate::float::Float;
use crate::vec::Vec2;

/// Keeps two points at the distance they had when the line was created.
///
/// Endpoints are handles, so a line may join points owned by different
/// bodies.
#[derive(Clone, Debug, PartialEq)]
pub struct LineConstraint<F: Float> {
    pub p1: PointId,
    pub p2: PointId,
    rest_length: F,
}

impl<F: Float> LineConstraint<F> {
    /// Create a line whose rest length is the current endpoint distance.
    pub fn new(p1: PointId, p2: PointId, pos1: Vec2<F>, pos2: Vec2<F>) -> Self {
        LineConstraint {
            p1,
            p2,
            rest_length: pos1.distance(pos2),
        }
    }

    pub fn rest_length(&self) -> F {
        self.rest_length
    }

    /// One symmetric relaxation of the endpoint positions.
    ///
    /// Returns the corrected `(pos1, pos2)`, or `None` when the endpoints
    /// coincide and no direction can be derived.
    pub fn relax(&self, pos1: Vec2<F>, pos2: Vec2<F>) -> Option<(Vec2<F>, Vec2<F>)> {
        let delta = pos2 - pos1;
        let len = delta.length();
        if len.is_near_zero(F::degenerate_epsilon()) {
            return None;
        }

        let diff = self.rest_length - len;
        let half = delta.scale(diff / len * F::half());
        Some((pos1 - half, pos2 + half))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyId;

    fn ids() -> (PointId, PointId) {
        let body = BodyId(0);
        (PointId { body, index: 0 }, PointId { body, index: 1 })
    }

    #[test]
    fn rest_length_fixed_at_creation() {
        let (a, b) = ids();
        let line = LineConstraint::new(a, b, Vec2::new(0.0f32, 0.0), Vec2::new(3.0, 4.0));
        assert!((line.rest_length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn relax_restores_length_in_one_go() {
        let (a, b) = ids();
        let line = LineConstraint::new(a, b, Vec2::new(0.0f64, 0.0), Vec2::new(5.0, 0.0));
        let (p1, p2) = line
            .relax(Vec2::new(0.0, 0.0), Vec2::new(9.0, 0.0))
            .expect("non-degenerate");
        assert!((p1.x - 2.0).abs() < 1e-12);
        assert!((p2.x - 7.0).abs() < 1e-12);
    }

    #[test]
    fn coincident_endpoints_are_skipped() {
        let (a, b) = ids();
        let line = LineConstraint::new(a, b, Vec2::new(0.0f32, 0.0), Vec2::new(1.0, 0.0));
        let p = Vec2::new(2.0, 2.0);
        assert!(line.relax(p, p).is_none());
    }
}
