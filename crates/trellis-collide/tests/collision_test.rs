use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use trellis_collide::{CollisionShape, ShapeKind};
use trellis_geom::{Vector2D, vector};

fn triangle(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> CollisionShape {
    CollisionShape::convex_polygon(vec![a.into(), b.into(), c.into()], Vector2D::ZERO)
}

fn l_shape(at: Vector2D) -> CollisionShape {
    CollisionShape::concave_polygon(
        vec![
            vector(0.0, 0.0),
            vector(10.0, 0.0),
            vector(10.0, 4.0),
            vector(4.0, 4.0),
            vector(4.0, 10.0),
            vector(0.0, 10.0),
        ],
        at,
    )
}

fn assert_collide(a: &CollisionShape, b: &CollisionShape, expected: bool) {
    assert_eq!(a.collide(b), expected, "{a:?} vs {b:?}");
    assert_eq!(b.collide(a), expected, "{b:?} vs {a:?}");
}

#[test]
fn circles_touching_at_the_boundary_collide() {
    let a = CollisionShape::circle(vector(0.0, 0.0), 5.0);
    assert_collide(&a, &CollisionShape::circle(vector(10.0, 0.0), 5.0), true);
    assert_collide(&a, &CollisionShape::circle(vector(10.1, 0.0), 5.0), false);
    assert_collide(&a, &CollisionShape::circle(vector(1.0, 1.0), 0.5), true);
}

#[test]
fn tolerance_widens_the_contact() {
    let a = CollisionShape::circle(vector(0.0, 0.0), 5.0);
    let b = CollisionShape::circle(vector(10.5, 0.0), 5.0);
    assert!(!a.collide(&b));
    assert!(a.collide_with_tolerance(&b, 1.0));
}

#[test]
fn circle_against_rectangle() {
    let rect = CollisionShape::rectangle(vector(0.0, 0.0), vector(4.0, 4.0));
    assert_collide(&CollisionShape::circle(vector(5.0, 0.0), 3.0), &rect, true);
    assert_collide(&CollisionShape::circle(vector(5.0, 0.0), 2.9), &rect, false);
    // Near a corner the distance is measured to the corner, not the bounding box.
    assert_collide(&CollisionShape::circle(vector(4.0, 4.0), 2.5), &rect, false);
    assert_collide(&CollisionShape::circle(vector(4.0, 4.0), 3.0), &rect, true);
}

#[test]
fn rectangles_overlap_on_both_axes() {
    let a = CollisionShape::rectangle(vector(0.0, 0.0), vector(4.0, 4.0));
    assert_collide(&a, &CollisionShape::rectangle(vector(4.0, 0.0), vector(4.0, 4.0)), true);
    assert_collide(&a, &CollisionShape::rectangle(vector(4.0, 5.0), vector(4.0, 4.0)), false);
    assert_collide(&a, &CollisionShape::rectangle(vector(0.0, 0.0), vector(1.0, 1.0)), true);
}

#[test]
fn circle_against_polygons() {
    let tri = triangle((0.0, 0.0), (10.0, 0.0), (0.0, 10.0));
    assert_collide(&CollisionShape::circle(vector(2.0, 2.0), 0.5), &tri, true);
    assert_collide(&CollisionShape::circle(vector(5.0, -1.0), 1.0), &tri, true);
    assert_collide(&CollisionShape::circle(vector(8.0, 8.0), 1.0), &tri, false);

    let l = l_shape(Vector2D::ZERO);
    assert_collide(&CollisionShape::circle(vector(8.0, 8.0), 1.0), &l, false);
    assert_collide(&CollisionShape::circle(vector(8.0, 8.0), 4.5), &l, true);
    assert_collide(&CollisionShape::circle(vector(2.0, 8.0), 0.5), &l, true);
}

#[test]
fn separating_axis_between_triangles() {
    let a = triangle((0.0, 0.0), (4.0, 0.0), (0.0, 4.0));
    let apart = triangle((2.5, 2.5), (6.0, 2.5), (2.5, 6.0));
    let touching = triangle((2.0, 2.0), (6.0, 2.0), (2.0, 6.0));
    let overlapping = triangle((1.0, 1.0), (6.0, 1.0), (1.0, 6.0));
    assert_collide(&a, &apart, false);
    assert_collide(&a, &touching, true);
    assert_collide(&a, &overlapping, true);
}

#[test]
fn nested_convex_polygons_collide() {
    let outer = triangle((-10.0, -10.0), (10.0, -10.0), (0.0, 10.0));
    let inner = triangle((-1.0, -1.0), (1.0, -1.0), (0.0, 1.0));
    assert_collide(&outer, &inner, true);
}

#[test]
fn rectangle_against_polygons() {
    let rect = CollisionShape::rectangle(vector(0.0, 0.0), vector(4.0, 4.0));
    // Edges cross with no vertex of either shape inside the other.
    assert_collide(&rect, &triangle((-5.0, 1.0), (5.0, 1.0), (0.0, 10.0)), true);
    assert_collide(&rect, &triangle((-5.0, 3.0), (5.0, 3.0), (0.0, 10.0)), false);
    assert_collide(&rect, &triangle((-0.5, -0.5), (0.5, -0.5), (0.0, 0.5)), true);

    let l = l_shape(vector(-2.0, -2.0));
    assert_collide(&rect, &l, true);
    let l_far = l_shape(vector(10.0, 10.0));
    assert_collide(&rect, &l_far, false);
}

#[test]
fn concave_pairs() {
    let l = l_shape(Vector2D::ZERO);
    let in_notch = triangle((6.0, 6.0), (9.0, 6.0), (7.5, 9.0));
    let in_body = triangle((2.0, 2.0), (5.0, 2.0), (3.5, 5.0));
    assert_collide(&l, &in_notch, false);
    assert_collide(&l, &in_body, true);

    assert_collide(&l, &l_shape(vector(1.0, 1.0)), true);
    assert_collide(&l, &l_shape(vector(20.0, 0.0)), false);
    assert_collide(&l, &l_shape(vector(10.0, 0.0)), true);
}

fn random_shape(rng: &mut StdRng) -> (CollisionShape, f64) {
    let center = vector(rng.gen_range(-60.0..60.0), rng.gen_range(-60.0..60.0));
    match rng.gen_range(0..3) {
        0 => {
            let r = rng.gen_range(1.0..20.0);
            (CollisionShape::circle(center, r), r)
        }
        1 => {
            let size = vector(rng.gen_range(1.0..30.0), rng.gen_range(1.0..30.0));
            (CollisionShape::rectangle(center, size), size.length() / 2.0)
        }
        _ => {
            let sides = rng.gen_range(3..9);
            let r = rng.gen_range(1.0..20.0);
            let phase = rng.gen_range(0.0..TAU);
            let points = (0..sides)
                .map(|k| {
                    let a = phase + TAU * k as f64 / sides as f64;
                    vector(a.cos(), a.sin()) * r
                })
                .collect();
            (CollisionShape::convex_polygon(points, center), r)
        }
    }
}

#[test]
fn random_pairs_are_symmetric_and_bounded() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..2000 {
        let (a, ra) = random_shape(&mut rng);
        let (b, rb) = random_shape(&mut rng);
        let hit = a.collide(&b);
        assert_eq!(hit, b.collide(&a), "{a:?} vs {b:?}");

        let gap = a.center().distance(b.center());
        if gap > ra + rb + 1e-6 {
            assert!(!hit, "{a:?} vs {b:?} are {gap} apart");
        }
        assert!(a.collide(&a.translated(Vector2D::ZERO)));
    }
}

#[test]
fn shapes_sharing_a_center_collide() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let (a, _) = random_shape(&mut rng);
        let (b, _) = random_shape(&mut rng);
        let b = b.translated(a.center() - b.center());
        assert!(a.collide(&b), "{a:?} vs {b:?}");
    }
}

#[test]
fn kinds_report_their_variant() {
    assert_eq!(CollisionShape::circle(Vector2D::ZERO, 1.0).kind(), ShapeKind::Circle);
    assert_eq!(l_shape(Vector2D::ZERO).kind().as_str(), "concavePolygon");
}
