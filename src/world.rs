//! The world: owns bodies and circles and advances them one step at a time.

use crate::body::{Body, BodyId, Material, PointId};
use crate::circle::Circle;
use crate::config::WorldConfig;
use crate::contact::{apply_bounce_and_friction, circle_contact, ground_contact};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::line::LineConstraint;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::point::Point;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Owns every body and circle of a simulation.
///
/// A step runs four stages in a fixed order: integrate points, relax lines,
/// resolve ground contacts, resolve circle contacts. Static bodies take no
/// part in any stage.
#[derive(Debug)]
pub struct World<F: Float> {
    pub config: WorldConfig<F>,
    bodies: AllocVec<Body<F>>,
    circles: AllocVec<Circle<F>>,
    generation: u64,
}

impl<F: Float> World<F> {
    pub fn new(config: WorldConfig<F>) -> Self {
        World {
            config,
            bodies: AllocVec::new(),
            circles: AllocVec::new(),
            generation: 0,
        }
    }

    /// Advance the simulation by one step.
    pub fn update(&mut self) {
        self.update_observed(&mut NoOpStepObserver);
    }

    /// Advance by one step, reporting progress to `observer`.
    pub fn update_observed<O: StepObserver>(&mut self, observer: &mut O) {
        self.integrate_with(observer);
        self.resolve_lines_with(observer);
        self.resolve_ground_with(observer);
        self.resolve_circles_with(observer);
        observer.on_step_complete();
    }

    /// Integration stage only.
    pub fn integrate(&mut self) {
        self.integrate_with(&mut NoOpStepObserver);
    }

    /// Every resolution stage (lines, ground, circles) without integrating.
    pub fn resolve_constraints(&mut self) {
        let observer = &mut NoOpStepObserver;
        self.resolve_lines_with(observer);
        self.resolve_ground_with(observer);
        self.resolve_circles_with(observer);
    }

    pub fn resolve_lines(&mut self) {
        self.resolve_lines_with(&mut NoOpStepObserver);
    }

    pub fn resolve_ground(&mut self) {
        self.resolve_ground_with(&mut NoOpStepObserver);
    }

    pub fn resolve_circles(&mut self) {
        self.resolve_circles_with(&mut NoOpStepObserver);
    }

    fn integrate_with<O: StepObserver>(&mut self, observer: &mut O) {
        let gravity = self.config.gravity;
        for body in self.bodies.iter_mut().filter(|b| !b.is_static()) {
            for p in body.points.iter_mut() {
                p.integrate(gravity);
            }
        }
        observer.on_integrate();
    }

    fn resolve_lines_with<O: StepObserver>(&mut self, observer: &mut O) {
        for bi in 0..self.bodies.len() {
            if self.bodies[bi].is_static() {
                continue;
            }

            // Lines may reach into other bodies, so they are moved out while
            // the points are written.
            let lines = core::mem::take(&mut self.bodies[bi].lines);
            let passes = self.bodies[bi].material.stiffness;
            for pass in 0..passes {
                for line in lines.iter() {
                    self.relax_line(line);
                }
                observer.on_line_pass(BodyId(bi), pass);
            }
            self.bodies[bi].lines = lines;
        }
    }

    fn relax_line(&mut self, line: &LineConstraint<F>) {
        let pos1 = self.slot(line.p1).position;
        let pos2 = self.slot(line.p2).position;
        if let Some((new1, new2)) = line.relax(pos1, pos2) {
            self.slot_mut(line.p1).position = new1;
            self.slot_mut(line.p2).position = new2;
        }
    }

    fn resolve_ground_with<O: StepObserver>(&mut self, observer: &mut O) {
        let bottom = self.config.bottom;
        for (bi, body) in self.bodies.iter_mut().enumerate() {
            if body.is_static() {
                continue;
            }
            let material = body.material;
            for (pi, p) in body.points.iter_mut().enumerate() {
                if let Some((constrained, normal)) = ground_contact(p.position, bottom) {
                    apply_bounce_and_friction(p, constrained, normal, material.bounce, material.friction);
                    observer.on_ground_contact(PointId { body: BodyId(bi), index: pi });
                }
            }
        }
    }

    fn resolve_circles_with<O: StepObserver>(&mut self, observer: &mut O) {
        let circles = &self.circles;
        for (bi, body) in self.bodies.iter_mut().enumerate() {
            if body.is_static() {
                continue;
            }
            for (pi, p) in body.points.iter_mut().enumerate() {
                for (ci, circle) in circles.iter().enumerate() {
                    if let Some((constrained, normal)) = circle_contact(p.position, circle) {
                        // Obstacles are fully elastic and frictionless,
                        // whatever the body's material.
                        apply_bounce_and_friction(p, constrained, normal, F::one(), F::zero());
                        observer.on_circle_contact(PointId { body: BodyId(bi), index: pi }, ci);
                    }
                }
            }
        }
    }

    // Handles stored in lines are validated on insertion and bodies are never
    // removed one by one, so these lookups cannot go out of range.
    fn slot(&self, id: PointId) -> &Point<F> {
        &self.bodies[id.body.0].points[id.index]
    }

    fn slot_mut(&mut self, id: PointId) -> &mut Point<F> {
        &mut self.bodies[id.body.0].points[id.index]
    }

    fn check_body(&self, id: BodyId) -> Result<(), PhysicsError> {
        if id.0 < self.bodies.len() {
            Ok(())
        } else {
            Err(PhysicsError::BodyOutOfBounds { index: id.0, count: self.bodies.len() })
        }
    }

    fn check_point(&self, id: PointId) -> Result<Vec2<F>, PhysicsError> {
        self.check_body(id.body)?;
        let points = &self.bodies[id.body.0].points;
        points
            .get(id.index)
            .map(|p| p.position)
            .ok_or(PhysicsError::PointOutOfBounds {
                body: id.body.0,
                index: id.index,
                count: points.len(),
            })
    }

    /// Take ownership of `body` and return its handle.
    pub fn add_body(&mut self, body: Body<F>) -> BodyId {
        let id = BodyId(self.bodies.len());
        self.bodies.push(body);
        id
    }

    /// Add a point to `body` at `position`, moving with `velocity` per step.
    pub fn add_point(
        &mut self,
        body: BodyId,
        position: Vec2<F>,
        velocity: Vec2<F>,
    ) -> Result<PointId, PhysicsError> {
        self.check_body(body)?;
        let index = self.bodies[body.0].push_point(Point::new(position, velocity));
        Ok(PointId { body, index })
    }

    /// Add a line owned by `body` between two points, which may belong to
    /// any body. The rest length is their current distance.
    pub fn add_line(&mut self, body: BodyId, p1: PointId, p2: PointId) -> Result<(), PhysicsError> {
        self.check_body(body)?;
        let pos1 = self.check_point(p1)?;
        let pos2 = self.check_point(p2)?;
        self.bodies[body.0].lines.push(LineConstraint::new(p1, p2, pos1, pos2));
        Ok(())
    }

    /// Chain `points` with lines owned by `body`: first to second, second to
    /// third, and so on. Nothing is added unless every handle is valid.
    pub fn add_lines(&mut self, body: BodyId, points: &[PointId]) -> Result<(), PhysicsError> {
        self.check_body(body)?;
        if points.len() < 2 {
            return Err(PhysicsError::InsufficientPoints { needed: 2, got: points.len() });
        }
        for &p in points {
            self.check_point(p)?;
        }
        for pair in points.windows(2) {
            self.add_line(body, pair[0], pair[1])?;
        }
        Ok(())
    }

    pub fn set_static(&mut self, body: BodyId, is_static: bool) -> Result<(), PhysicsError> {
        self.check_body(body)?;
        self.bodies[body.0].set_static(is_static);
        Ok(())
    }

    /// Replace the material of `body`. Points and lines are untouched.
    pub fn set_material(&mut self, body: BodyId, material: Material<F>) -> Result<(), PhysicsError> {
        self.check_body(body)?;
        self.bodies[body.0].material = material;
        Ok(())
    }

    /// Append an obstacle and return its index.
    pub fn add_circle(&mut self, circle: Circle<F>) -> usize {
        let idx = self.circles.len();
        self.circles.push(circle);
        idx
    }

    /// Drop every body and circle. Handles issued before are stale.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.circles.clear();
        self.generation += 1;
    }

    /// Number of times the world has been cleared. Anything holding handles
    /// across steps can compare it to detect that they went stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn bodies(&self) -> &[Body<F>] { &self.bodies }
    pub fn circles(&self) -> &[Circle<F>] { &self.circles }
    pub fn body_count(&self) -> usize { self.bodies.len() }
    pub fn circle_count(&self) -> usize { self.circles.len() }

    /// Total number of points across all bodies.
    pub fn point_count(&self) -> usize {
        self.bodies.iter().map(|b| b.point_count()).sum()
    }

    /// Read-only view of a body. Bodies cannot be replaced once added, so
    /// lines reaching into them always find their points.
    ///
    /// ```compile_fail
    /// use verlet_world::{Body, World};
    ///
    /// let mut world: World<f32> = World::default();
    /// let id = world.add_body(Body::new());
    /// *world.body(id).unwrap() = Body::new();
    /// ```
    pub fn body(&self, id: BodyId) -> Option<&Body<F>> {
        self.bodies.get(id.0)
    }

    pub fn point(&self, id: PointId) -> Option<&Point<F>> {
        self.bodies.get(id.body.0).and_then(|b| b.points.get(id.index))
    }

    /// Endpoint positions of every line owned by `body`, for drawing.
    pub fn segments(&self, body: BodyId) -> Result<AllocVec<(Vec2<F>, Vec2<F>)>, PhysicsError> {
        self.check_body(body)?;
        Ok(self.bodies[body.0]
            .lines
            .iter()
            .map(|l| (self.slot(l.p1).position, self.slot(l.p2).position))
            .collect())
    }
}

impl<F: Float> Default for World<F> {
    fn default() -> Self {
        Self::new(WorldConfig::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_handles_are_rejected() {
        let mut world: World<f32> = World::default();
        let a = world.add_body(Body::new());
        let p = world.add_point(a, Vec2::zero(), Vec2::zero()).expect("valid body");

        assert_eq!(
            world.add_point(BodyId(3), Vec2::zero(), Vec2::zero()),
            Err(PhysicsError::BodyOutOfBounds { index: 3, count: 1 })
        );
        let ghost = PointId { body: a, index: 7 };
        assert_eq!(
            world.add_line(a, p, ghost),
            Err(PhysicsError::PointOutOfBounds { body: 0, index: 7, count: 1 })
        );
        assert_eq!(world.body(a).map(|b| b.line_count()), Some(0));
    }

    #[test]
    fn add_lines_is_all_or_nothing() {
        let mut world: World<f32> = World::default();
        let a = world.add_body(Body::new());
        let p0 = world.add_point(a, Vec2::new(0.0, 0.0), Vec2::zero()).expect("point");
        let p1 = world.add_point(a, Vec2::new(1.0, 0.0), Vec2::zero()).expect("point");
        let ghost = PointId { body: a, index: 9 };

        assert!(world.add_lines(a, &[p0, p1, ghost]).is_err());
        assert_eq!(world.body(a).map(|b| b.line_count()), Some(0));
        assert_eq!(
            world.add_lines(a, &[p0]),
            Err(PhysicsError::InsufficientPoints { needed: 2, got: 1 })
        );
    }

    #[test]
    fn lines_survive_relaxation() {
        let mut world: World<f64> = World::new(WorldConfig::new().with_gravity(Vec2::zero()));
        let a = world.add_body(Body::new());
        let p0 = world.add_point(a, Vec2::new(0.0, 0.0), Vec2::zero()).expect("point");
        let p1 = world.add_point(a, Vec2::new(1.0, 0.0), Vec2::zero()).expect("point");
        world.add_line(a, p0, p1).expect("line");
        world.resolve_lines();
        assert_eq!(world.body(a).map(|b| b.line_count()), Some(1));
    }

    #[test]
    fn clear_drops_everything() {
        let mut world: World<f32> = World::default();
        let a = world.add_body(Body::new());
        world.add_point(a, Vec2::zero(), Vec2::zero()).expect("point");
        world.add_circle(Circle::new(Vec2::zero(), 1.0));
        world.clear();
        assert_eq!(world.body_count(), 0);
        assert_eq!(world.circle_count(), 0);
        assert_eq!(world.point_count(), 0);
        assert_eq!(world.generation(), 1);
        assert!(world.set_static(a, true).is_err());
        assert!(world.set_material(a, Material::new()).is_err());
    }
}
