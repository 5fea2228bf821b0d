//! Polyline bodies and the demo scene.

use crate::body::{Body, BodyId, Material};
use crate::circle::Circle;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;
use crate::world::World;
use alloc::vec::Vec as AllocVec;

/// Ground height of the demo as a fraction of the canvas height.
pub const DEMO_BOTTOM_FRACTION: f32 = 0.95;

const ROPE_A: [(f32, f32); 23] = [
    (50.0, 40.0), (70.0, 50.0), (70.0, 60.0), (70.0, 70.0), (80.0, 70.0),
    (90.0, 70.0), (100.0, 70.0), (120.0, 90.0), (130.0, 70.0), (140.0, 90.0),
    (150.0, 70.0), (160.0, 70.0), (170.0, 70.0), (180.0, 70.0), (190.0, 70.0),
    (200.0, 70.0), (210.0, 70.0), (220.0, 70.0), (230.0, 70.0), (240.0, 70.0),
    (250.0, 70.0), (260.0, 70.0), (270.0, 70.0),
];

const CIRCLES: [(f32, f32, f32); 11] = [
    (120.0, 200.0, 40.0), (140.0, 300.0, 40.0), (220.0, 250.0, 40.0),
    (180.0, 390.0, 25.0), (220.0, 410.0, 25.0), (260.0, 390.0, 25.0),
    (350.0, 300.0, 25.0), (400.0, 300.0, 25.0), (450.0, 300.0, 25.0),
    (500.0, 300.0, 25.0), (550.0, 300.0, 25.0),
];

/// Build a rope through `positions`: one resting point per position, each
/// joined to the next by a line.
pub fn polyline<F: Float>(
    world: &mut World<F>,
    positions: &[Vec2<F>],
    material: Material<F>,
) -> Result<BodyId, PhysicsError> {
    if positions.len() < 2 {
        return Err(PhysicsError::InsufficientPoints { needed: 2, got: positions.len() });
    }

    let body = world.add_body(Body::with_material(material));
    let points = positions
        .iter()
        .map(|&pos| world.add_point(body, pos, Vec2::zero()))
        .collect::<Result<AllocVec<_>, _>>()?;
    world.add_lines(body, &points)?;
    Ok(body)
}

/// Add the two demo ropes and the obstacle field. Returns the rope handles.
pub fn load_demo_scene<F: Float>(world: &mut World<F>) -> Result<[BodyId; 2], PhysicsError> {
    let to_vec = |(x, y): (f32, f32)| Vec2::new(F::from_f32(x), F::from_f32(y));

    let rope_a: AllocVec<_> = ROPE_A.iter().copied().map(to_vec).collect();
    let rope_b: AllocVec<_> = (0..=12)
        .map(|i| to_vec((300.0 + 25.0 * i as f32, 50.0)))
        .collect();

    let a = polyline(world, &rope_a, Material::new())?;
    let b = polyline(world, &rope_b, Material::new())?;

    for &(x, y, r) in CIRCLES.iter() {
        world.add_circle(Circle::new(to_vec((x, y)), F::from_f32(r)));
    }
    Ok([a, b])
}
