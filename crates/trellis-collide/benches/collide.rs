use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use std::hint::black_box;
use trellis_collide::CollisionShape;
use trellis_geom::{BezierPath, Vector2D, vector};

fn regular_polygon(sides: usize, radius: f64, center: Vector2D) -> CollisionShape {
    let points = (0..sides)
        .map(|k| {
            let a = TAU * k as f64 / sides as f64;
            vector(a.cos(), a.sin()) * radius
        })
        .collect();
    CollisionShape::convex_polygon(points, center)
}

fn scene(count: usize) -> Vec<CollisionShape> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let center = vector(rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0));
            match rng.gen_range(0..4) {
                0 => CollisionShape::circle(center, rng.gen_range(5.0..40.0)),
                1 => CollisionShape::rectangle(center, vector(60.0, 30.0)),
                2 => regular_polygon(rng.gen_range(3..10), rng.gen_range(5.0..40.0), center),
                _ => {
                    let path: BezierPath = "M0,0 L40,0 L40,15 L15,15 L15,40 L0,40 Z"
                        .parse()
                        .unwrap_or_default();
                    CollisionShape::from_path(&path, center)
                        .unwrap_or_else(|| CollisionShape::circle(center, 10.0))
                }
            }
        })
        .collect()
}

fn bench_all_pairs(c: &mut Criterion) {
    let shapes = scene(200);
    c.bench_function("collide/all_pairs_200", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for (i, a) in shapes.iter().enumerate() {
                for other in &shapes[i + 1..] {
                    if a.collide(black_box(other)) {
                        hits += 1;
                    }
                }
            }
            black_box(hits)
        })
    });
}

fn bench_touch_points(c: &mut Criterion) {
    let shapes = scene(200);
    c.bench_function("touch_point/scene_200", |b| {
        b.iter_batched(
            || vector(500.0, 500.0),
            |from| {
                for shape in &shapes {
                    black_box(shape.touch_point(from));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_all_pairs, bench_touch_points);
criterion_main!(benches);
