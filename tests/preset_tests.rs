use verlet_world::preset::{load_demo_scene, polyline, DEMO_BOTTOM_FRACTION};
use verlet_world::{Material, PhysicsError, Vec2, World, WorldConfig};

#[test]
fn polyline_chains_every_position() {
    let mut world: World<f32> = World::default();
    let positions = [Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0), Vec2::new(3.0, 10.0)];
    let body = polyline(&mut world, &positions, Material::new().with_stiffness(4)).unwrap();

    let body = world.body(body).unwrap();
    assert_eq!(body.point_count(), 3);
    assert_eq!(body.line_count(), 2);
    assert_eq!(body.material.stiffness, 4);
    assert!((body.lines()[0].rest_length() - 5.0).abs() < 1e-6);
    assert!((body.lines()[1].rest_length() - 6.0).abs() < 1e-6);
    for p in body.points() {
        assert_eq!(p.velocity(), Vec2::zero());
    }
}

#[test]
fn polyline_needs_two_positions() {
    let mut world: World<f32> = World::default();
    let err = polyline(&mut world, &[Vec2::new(1.0, 1.0)], Material::new()).unwrap_err();
    assert_eq!(err, PhysicsError::InsufficientPoints { needed: 2, got: 1 });
    assert_eq!(world.body_count(), 0);
}

#[test]
fn demo_scene_contents() {
    let canvas_height = 480.0f32;
    let mut world: World<f32> =
        World::new(WorldConfig::new().with_bottom(canvas_height * DEMO_BOTTOM_FRACTION));
    let [a, b] = load_demo_scene(&mut world).unwrap();

    assert_eq!(world.body_count(), 2);
    assert_eq!(world.body(a).unwrap().point_count(), 23);
    assert_eq!(world.body(a).unwrap().line_count(), 22);
    assert_eq!(world.body(b).unwrap().point_count(), 13);
    assert_eq!(world.body(b).unwrap().line_count(), 12);
    assert_eq!(world.circle_count(), 11);
    assert_eq!(world.point_count(), 36);
    assert_eq!(world.body(b).unwrap().positions()[12], Vec2::new(600.0, 50.0));
}
