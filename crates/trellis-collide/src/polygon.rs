//! Point-in-polygon and convexity predicates.

use trellis_geom::polygon::polygon_edges;
use trellis_geom::{STANDARD_EPSILON, Vector2D};

/// Inclusive point test for a convex polygon of either winding.
///
/// Every edge must see the point on the same side. Points collinear with an edge do not decide the
/// side, so a point on the boundary counts as inside, and so does any point of a fully collinear
/// polygon.
pub fn point_in_convex_polygon(point: Vector2D, polygon: &[Vector2D]) -> bool {
    point_in_convex_polygon_eps(point, polygon, STANDARD_EPSILON)
}

pub fn point_in_convex_polygon_eps(point: Vector2D, polygon: &[Vector2D], epsilon: f64) -> bool {
    if polygon.is_empty() {
        return false;
    }
    let mut side = 0.0_f64;
    for edge in polygon_edges(polygon) {
        let cross = edge.direction().cross(point - edge.start);
        if cross.abs() <= epsilon {
            continue;
        }
        if side == 0.0 {
            side = cross.signum();
        } else if cross.signum() != side {
            return false;
        }
    }
    true
}

/// Ray-casting parity test; works for concave polygons.
pub fn point_in_concave_polygon(point: Vector2D, polygon: &[Vector2D]) -> bool {
    let mut inside = false;
    for edge in polygon_edges(polygon) {
        let (a, b) = (edge.start, edge.end);
        if (a.y > point.y) != (b.y > point.y) {
            let x_at = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < x_at {
                inside = !inside;
            }
        }
    }
    inside
}

/// True for a simple polygon whose corners all turn the same way.
///
/// Self-intersecting outlines (any two non-adjacent edges crossing) and fully collinear point sets
/// are not convex.
pub fn is_convex(polygon: &[Vector2D]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let edges: Vec<_> = polygon_edges(polygon).collect();
    for i in 0..n {
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            if edges[i].intersection(&edges[j]).is_some() {
                return false;
            }
        }
    }

    let mut turn = 0.0_f64;
    for i in 0..n {
        let cross = edges[i].direction().cross(edges[(i + 1) % n].direction());
        if cross.abs() <= STANDARD_EPSILON {
            continue;
        }
        if turn == 0.0 {
            turn = cross.signum();
        } else if cross.signum() != turn {
            return false;
        }
    }
    turn != 0.0
}
