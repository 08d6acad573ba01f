use crate::line::LineSegment;
use crate::vector::Vector2D;

/// Edges of the closed polygon through `points`, including the closing edge back to the start.
pub fn polygon_edges(points: &[Vector2D]) -> impl Iterator<Item = LineSegment> + '_ {
    let n = if points.len() < 2 { 0 } else { points.len() };
    (0..n).map(move |i| LineSegment::new(points[i], points[(i + 1) % n]))
}

/// Shoelace area; positive for counter-clockwise winding in a y-up space.
pub fn signed_area(points: &[Vector2D]) -> f64 {
    polygon_edges(points)
        .map(|e| e.start.cross(e.end))
        .sum::<f64>()
        * 0.5
}

/// Average of the vertices, or `None` for an empty list.
pub fn centroid(points: &[Vector2D]) -> Option<Vector2D> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vector2D::ZERO, |acc, p| acc + *p);
    Some(sum / points.len() as f64)
}
