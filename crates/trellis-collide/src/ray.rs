//! Ray-to-boundary queries used to clip connector endpoints to block outlines.

use crate::shape::{CollisionShape, ShapeType};
use trellis_geom::polygon::polygon_edges;
use trellis_geom::{Rect2D, STANDARD_EPSILON, Vector2D};

/// Hits closer than this to the ray origin are treated as the origin itself.
pub const RAY_ORIGIN_EPSILON: f64 = 1e-9;

/// First crossing of the ray `origin + t·direction` (`t >= 0`) with a circle.
///
/// When both crossings lie ahead, the nearer one wins unless it coincides with the origin. When the
/// origin is inside, the exit point is returned.
pub fn intersect_ray_circle(
    origin: Vector2D,
    direction: Vector2D,
    center: Vector2D,
    radius: f64,
) -> Option<Vector2D> {
    let a = direction.length_squared();
    if a <= STANDARD_EPSILON {
        return None;
    }
    let oc = origin - center;
    let b = 2.0 * direction.dot(oc);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let t1 = (-b - root) / (2.0 * a);
    let t2 = (-b + root) / (2.0 * a);

    let at_origin = |t: f64| t * a.sqrt() <= RAY_ORIGIN_EPSILON;
    let t = if t1 >= 0.0 && t2 >= 0.0 {
        if at_origin(t1) && !at_origin(t2) { t2 } else { t1 }
    } else if t1 >= 0.0 {
        t1
    } else if t2 >= 0.0 {
        t2
    } else {
        return None;
    };
    Some(origin + direction * t)
}

/// Slab-method crossing of a ray with an axis-aligned rectangle; the exit point when the origin is
/// inside.
pub fn intersect_ray_rect(
    origin: Vector2D,
    direction: Vector2D,
    rect: &Rect2D,
) -> Option<Vector2D> {
    let mut t_enter = f64::NEG_INFINITY;
    let mut t_exit = f64::INFINITY;

    let slabs = [
        (origin.x, direction.x, rect.min_x(), rect.max_x()),
        (origin.y, direction.y, rect.min_y(), rect.max_y()),
    ];
    for (o, d, lo, hi) in slabs {
        if d.abs() <= STANDARD_EPSILON {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let (mut t0, mut t1) = ((lo - o) / d, (hi - o) / d);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
    }

    if t_exit < t_enter || t_exit < 0.0 || !t_exit.is_finite() {
        return None;
    }
    let t = if t_enter >= 0.0 { t_enter } else { t_exit };
    Some(origin + direction * t)
}

/// Closest crossing of a ray with any edge of a closed polygon.
pub fn intersect_ray_polygon(
    origin: Vector2D,
    direction: Vector2D,
    polygon: &[Vector2D],
) -> Option<Vector2D> {
    polygon_edges(polygon)
        .filter_map(|edge| edge.intersection_with_ray(origin, direction))
        .min_by(|p, q| {
            origin
                .distance_squared(*p)
                .total_cmp(&origin.distance_squared(*q))
        })
}

impl CollisionShape {
    /// Where the ray first meets the shape boundary, in the owner's space.
    pub fn intersect_ray(&self, origin: Vector2D, direction: Vector2D) -> Option<Vector2D> {
        match &self.shape {
            ShapeType::Circle { radius } => {
                intersect_ray_circle(origin, direction, self.position, *radius)
            }
            ShapeType::Rectangle { size } => intersect_ray_rect(
                origin,
                direction,
                &Rect2D::from_center(self.position, *size),
            ),
            ShapeType::ConvexPolygon { .. } | ShapeType::ConcavePolygon { .. } => {
                intersect_ray_polygon(origin, direction, &self.world_points())
            }
        }
    }

    /// Boundary point facing `from`, aiming the ray at the shape center.
    ///
    /// Falls back to the center when `from` coincides with it or the ray misses.
    pub fn touch_point(&self, from: Vector2D) -> Vector2D {
        let center = self.center();
        let direction = center - from;
        if direction.length() <= RAY_ORIGIN_EPSILON {
            return center;
        }
        self.intersect_ray(from, direction).unwrap_or_else(|| {
            tracing::debug!(
                kind = self.kind().as_str(),
                "touch point ray missed; using shape center"
            );
            center
        })
    }
}
