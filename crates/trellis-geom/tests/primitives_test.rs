use trellis_geom::{Rect2D, Vector2D, vector};

#[test]
fn vector_arithmetic_matches_component_math() {
    let a = vector(3.0, 4.0);
    let b = vector(-1.0, 2.0);
    assert_eq!(a + b, vector(2.0, 6.0));
    assert_eq!(a - b, vector(4.0, 2.0));
    assert_eq!(a * 2.0, vector(6.0, 8.0));
    assert_eq!(a / 2.0, vector(1.5, 2.0));
    assert_eq!(-a, vector(-3.0, -4.0));
    assert_eq!(a.dot(b), 5.0);
    assert_eq!(a.cross(b), 10.0);
    assert_eq!(a.length(), 5.0);
    assert!((a.distance(b) - 20f64.sqrt()).abs() < 1e-12);
}

#[test]
fn vector_normalize_of_zero_is_zero() {
    assert_eq!(Vector2D::ZERO.normalized(), Vector2D::ZERO);
    let n = vector(0.0, -7.0).normalized();
    assert_eq!(n, vector(0.0, -1.0));
}

#[test]
fn vector_perpendicular_is_left_hand() {
    assert_eq!(vector(1.0, 0.0).perpendicular(), vector(-0.0, 1.0));
    assert!(vector(1.0, 0.0).cross(vector(1.0, 0.0).perpendicular()) > 0.0);
}

#[test]
fn vector_lerp_and_rotation() {
    let p = vector(0.0, 0.0).lerp(vector(10.0, -4.0), 0.25);
    assert_eq!(p, vector(2.5, -1.0));

    let r = vector(1.0, 0.0).rotated(std::f64::consts::FRAC_PI_2);
    assert!(r.approx_eq(vector(0.0, 1.0), 1e-12));
}

#[test]
fn vector_converts_to_and_from_euclid() {
    let p: trellis_geom::Point = vector(1.5, -2.0).into();
    assert_eq!(p, euclid::point2(1.5, -2.0));
    let back: Vector2D = p.into();
    assert_eq!(back, vector(1.5, -2.0));
}

#[test]
fn rect_derived_corners_and_center() {
    let r = Rect2D::new(vector(1.0, 2.0), vector(4.0, 6.0));
    assert_eq!(r.max(), vector(5.0, 8.0));
    assert_eq!(r.center(), vector(3.0, 5.0));
    assert_eq!(
        r.corners(),
        [
            vector(1.0, 2.0),
            vector(5.0, 2.0),
            vector(5.0, 8.0),
            vector(1.0, 8.0)
        ]
    );
    assert_eq!(Rect2D::from_center(vector(3.0, 5.0), vector(4.0, 6.0)), r);
    assert_eq!(Rect2D::from_corners(vector(5.0, 8.0), vector(1.0, 2.0)), r);
    assert_eq!((r.mid_x(), r.mid_y()), (3.0, 5.0));

    let e: trellis_geom::Rect = r.into();
    assert_eq!(Rect2D::from(e), r);
}

#[test]
fn rect_bounding_of_points() {
    assert_eq!(Rect2D::bounding(Vec::new()), None);
    let r = Rect2D::bounding([vector(3.0, -1.0), vector(-2.0, 4.0), vector(0.0, 0.0)]);
    assert_eq!(r, Some(Rect2D::new(vector(-2.0, -1.0), vector(5.0, 5.0))));
}

#[test]
fn rect_containment_and_overlap_are_inclusive() {
    let a = Rect2D::new(vector(0.0, 0.0), vector(10.0, 10.0));
    let b = Rect2D::new(vector(10.0, 0.0), vector(5.0, 5.0));
    let c = Rect2D::new(vector(10.5, 0.0), vector(5.0, 5.0));
    assert!(a.contains(vector(10.0, 10.0)));
    assert!(!a.contains(vector(10.0, 10.1)));
    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
    assert_eq!(a.union(&c), Rect2D::new(vector(0.0, 0.0), vector(15.5, 10.0)));
}

#[test]
fn rect_inset_and_clamp() {
    let r = Rect2D::new(vector(0.0, 0.0), vector(10.0, 4.0));
    assert_eq!(r.inset(1.0), Rect2D::new(vector(1.0, 1.0), vector(8.0, 2.0)));
    assert_eq!(r.inset(3.0).size, vector(4.0, 0.0));
    assert!(r.inset(3.0).is_empty());
    assert_eq!(r.clamp(vector(20.0, -3.0)), vector(10.0, 0.0));
    assert_eq!(r.clamp(vector(2.0, 3.0)), vector(2.0, 3.0));
}
