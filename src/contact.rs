//! Contact response shared by ground and circle collisions.

use crate::circle::Circle;
use crate::float::Float;
use crate::point::Point;
use crate::vec::Vec2;

/// Snap `point` onto `constrained` and rewrite its velocity memory.
///
/// With `v` the implicit velocity, `vn = v·normal` and `vt = v·tangent`
/// (tangent is `normal` rotated +90°), the previous position becomes
/// `constrained + normal·vn·bounce - tangent·vt·(1 - friction)`.
///
/// The stored offset along the normal keeps the sign of the incoming `vn`,
/// so the next integration moves the point by `-vn·bounce` along the normal
/// and `vt·(1 - friction)` along the tangent. This sign convention is the
/// observed behaviour of the simulator and is relied on by callers; it is
/// not a textbook reflection formula.
pub fn apply_bounce_and_friction<F: Float>(
    point: &mut Point<F>,
    constrained: Vec2<F>,
    normal: Vec2<F>,
    bounce: F,
    friction: F,
) {
    let tangent = normal.perp();
    let velocity = point.velocity();
    let vn = velocity.dot(normal);
    let vt = velocity.dot(tangent);

    point.position = constrained;
    point.prev_position = constrained
        + normal.scale(vn * bounce)
        - tangent.scale(vt * (F::one() - friction));
}

/// Ground contact for a point below `bottom` (y grows downwards).
///
/// Returns `(constrained, normal)`, or `None` when the point is on or above
/// the ground.
pub fn ground_contact<F: Float>(position: Vec2<F>, bottom: F) -> Option<(Vec2<F>, Vec2<F>)> {
    if position.y > bottom {
        Some((Vec2::new(position.x, bottom), Vec2::new(F::zero(), -F::one())))
    } else {
        None
    }
}

/// Circle contact for a point on or inside `circle`.
///
/// Returns `(constrained, normal)` with the normal pointing from the center
/// to the point. A point at the exact center is pushed out along `{0, -1}`.
pub fn circle_contact<F: Float>(position: Vec2<F>, circle: &Circle<F>) -> Option<(Vec2<F>, Vec2<F>)> {
    let offset = position - circle.position;
    let dist = offset.length();
    if dist > circle.radius {
        return None;
    }

    let normal = if dist.is_near_zero(F::degenerate_epsilon()) {
        Vec2::new(F::zero(), -F::one())
    } else {
        offset.scale(F::one() / dist)
    };
    Some((circle.position + normal.scale(circle.radius), normal))
}
