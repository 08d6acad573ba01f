//! Pairwise overlap tests.
//!
//! Shapes are first resolved into owner-space bodies. Each unordered pair of kinds has one test,
//! and the reversed pair swaps its arguments, so `a.collide(b) == b.collide(a)` always holds.
//!
//! Convex pairs are exact (SAT). Pairs involving a concave polygon combine boundary distance,
//! reference-point containment and edge crossings; one polygon nested inside another without its
//! reference point inside can be missed.

use crate::polygon::{point_in_concave_polygon, point_in_convex_polygon_eps};
use crate::shape::{CollisionShape, ShapeType};
use trellis_geom::polygon::{centroid, polygon_edges};
use trellis_geom::{LineSegment, Rect2D, STANDARD_EPSILON, Vector2D};

#[derive(Debug, Clone)]
enum Body {
    Circle { center: Vector2D, radius: f64 },
    Rect(Rect2D),
    Convex(Vec<Vector2D>),
    Concave(Vec<Vector2D>),
}

impl Body {
    fn of(shape: &CollisionShape) -> Body {
        match &shape.shape {
            ShapeType::Circle { radius } => Body::Circle {
                center: shape.position,
                radius: *radius,
            },
            ShapeType::Rectangle { size } => Body::Rect(Rect2D::from_center(shape.position, *size)),
            ShapeType::ConvexPolygon { .. } => Body::Convex(shape.world_points()),
            ShapeType::ConcavePolygon { .. } => Body::Concave(shape.world_points()),
        }
    }
}

impl CollisionShape {
    /// Boolean overlap test; touching shapes collide.
    pub fn collide(&self, other: &CollisionShape) -> bool {
        self.collide_with_tolerance(other, STANDARD_EPSILON)
    }

    pub fn collide_with_tolerance(&self, other: &CollisionShape, epsilon: f64) -> bool {
        let hit = bodies_collide(&Body::of(self), &Body::of(other), epsilon);
        tracing::trace!(
            a = self.kind().as_str(),
            b = other.kind().as_str(),
            hit,
            "collision test"
        );
        hit
    }
}

fn bodies_collide(a: &Body, b: &Body, eps: f64) -> bool {
    match (a, b) {
        (
            Body::Circle {
                center: c1,
                radius: r1,
            },
            Body::Circle {
                center: c2,
                radius: r2,
            },
        ) => c1.distance(*c2) <= r1 + r2 + eps,
        (Body::Circle { center, radius }, Body::Rect(rect)) => {
            center.distance(rect.clamp(*center)) <= radius + eps
        }
        (Body::Circle { center, radius }, Body::Convex(poly)) => {
            circle_polygon(*center, *radius, poly, eps, |p, poly| {
                point_in_convex_polygon_eps(p, poly, eps)
            })
        }
        (Body::Circle { center, radius }, Body::Concave(poly)) => {
            circle_polygon(*center, *radius, poly, eps, point_in_concave_polygon)
        }
        (Body::Rect(r1), Body::Rect(r2)) => {
            r1.min_x() <= r2.max_x() + eps
                && r2.min_x() <= r1.max_x() + eps
                && r1.min_y() <= r2.max_y() + eps
                && r2.min_y() <= r1.max_y() + eps
        }
        (Body::Rect(rect), Body::Convex(poly)) => rect_polygon(rect, poly, eps, |p, poly| {
            point_in_convex_polygon_eps(p, poly, eps)
        }),
        (Body::Rect(rect), Body::Concave(poly)) => {
            rect_polygon(rect, poly, eps, point_in_concave_polygon)
        }
        (Body::Convex(p1), Body::Convex(p2)) => sat_overlap(p1, p2, eps),
        (Body::Convex(p1), Body::Concave(p2)) => polygons_overlap(p1, true, p2, false, eps),
        (Body::Concave(p1), Body::Concave(p2)) => polygons_overlap(p1, false, p2, false, eps),
        _ => bodies_collide(b, a, eps),
    }
}

fn circle_polygon(
    center: Vector2D,
    radius: f64,
    poly: &[Vector2D],
    eps: f64,
    contains: impl Fn(Vector2D, &[Vector2D]) -> bool,
) -> bool {
    if poly.is_empty() {
        return false;
    }
    contains(center, poly)
        || polygon_edges(poly).any(|e| e.distance_to_point(center) <= radius + eps)
}

fn rect_polygon(
    rect: &Rect2D,
    poly: &[Vector2D],
    eps: f64,
    contains: impl Fn(Vector2D, &[Vector2D]) -> bool,
) -> bool {
    if poly.is_empty() {
        return false;
    }
    if contains(rect.center(), poly) {
        return true;
    }
    let grown = rect.inset(-eps);
    if poly.iter().any(|p| grown.contains(*p)) {
        return true;
    }
    let corners = rect.corners();
    let rect_edges: Vec<LineSegment> = polygon_edges(&corners).collect();
    polygon_edges(poly).any(|e| rect_edges.iter().any(|r| r.intersection(&e).is_some()))
}

/// Interval of `poly` projected onto `axis`.
fn project(poly: &[Vector2D], axis: Vector2D) -> (f64, f64) {
    poly.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        let d = p.dot(axis);
        (lo.min(d), hi.max(d))
    })
}

/// Separating Axis Theorem over the edge normals of both convex polygons.
fn sat_overlap(a: &[Vector2D], b: &[Vector2D], eps: f64) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    for edge in polygon_edges(a).chain(polygon_edges(b)) {
        let axis = edge.normal();
        if axis == Vector2D::ZERO {
            continue;
        }
        let (min_a, max_a) = project(a, axis);
        let (min_b, max_b) = project(b, axis);
        if max_a < min_b - eps || max_b < min_a - eps {
            tracing::trace!(x = axis.x, y = axis.y, "separating axis found");
            return false;
        }
    }
    true
}

fn polygons_overlap(
    a: &[Vector2D],
    a_convex: bool,
    b: &[Vector2D],
    b_convex: bool,
    eps: f64,
) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let contains = |point: Vector2D, poly: &[Vector2D], convex: bool| {
        if convex {
            point_in_convex_polygon_eps(point, poly, eps)
        } else {
            point_in_concave_polygon(point, poly)
        }
    };

    let near_boundary = |points: &[Vector2D], poly: &[Vector2D]| {
        points
            .iter()
            .any(|p| polygon_edges(poly).any(|e| e.distance_to_point(*p) <= eps))
    };
    if near_boundary(a, b) || near_boundary(b, a) {
        return true;
    }

    if centroid(a).is_some_and(|c| contains(c, b, b_convex))
        || centroid(b).is_some_and(|c| contains(c, a, a_convex))
    {
        return true;
    }

    polygon_edges(a).any(|ea| polygon_edges(b).any(|eb| ea.intersection(&eb).is_some()))
}
