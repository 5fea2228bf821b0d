//! Benchmarks for verlet-world simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use verlet_world::preset::{load_demo_scene, polyline};
use verlet_world::*;

fn bench_demo_scene(c: &mut Criterion) {
    c.bench_function("demo_scene_60_steps", |b| {
        b.iter(|| {
            let mut world: World<f32> = World::new(WorldConfig::new().with_bottom(456.0));
            load_demo_scene(&mut world).unwrap();
            for _ in 0..60 {
                world.update();
            }
            world.point_count()
        });
    });
}

fn bench_long_rope_over_circles(c: &mut Criterion) {
    c.bench_function("rope_200_points_50_circles_60_steps", |b| {
        b.iter(|| {
            let mut world: World<f32> = World::new(WorldConfig::new().with_bottom(1000.0));
            let positions: Vec<_> = (0..200).map(|i| Vec2::new(i as f32 * 4.0, 0.0)).collect();
            polyline(&mut world, &positions, Material::new()).unwrap();
            for i in 0..50 {
                world.add_circle(Circle::new(Vec2::new(i as f32 * 16.0, 300.0), 10.0));
            }
            for _ in 0..60 {
                world.update();
            }
            world.bodies()[0].positions()
        });
    });
}

criterion_group!(benches, bench_demo_scene, bench_long_rope_over_circles);
criterion_main!(benches);
