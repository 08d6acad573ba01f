use crate::vector::{STANDARD_EPSILON, Vector2D};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Vector2D,
    pub end: Vector2D,
}

impl LineSegment {
    pub const fn new(start: Vector2D, end: Vector2D) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Unnormalized direction, `end - start`.
    pub fn direction(&self) -> Vector2D {
        self.end - self.start
    }

    /// Unit left-hand normal of the direction; zero for a degenerate segment.
    pub fn normal(&self) -> Vector2D {
        self.direction().normalized().perpendicular()
    }

    pub fn midpoint(&self) -> Vector2D {
        self.start.lerp(self.end, 0.5)
    }

    pub fn point_at(&self, t: f64) -> Vector2D {
        self.start.lerp(self.end, t)
    }

    pub fn reversed(&self) -> LineSegment {
        LineSegment::new(self.end, self.start)
    }

    /// Intersection point of two bounded segments.
    ///
    /// Parallel and collinear segments (exactly zero determinant) never intersect.
    pub fn intersection(&self, other: &LineSegment) -> Option<Vector2D> {
        let (t, u) = self.line_parameters(other)?;
        if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
            return None;
        }
        Some(self.point_at(t))
    }

    /// Intersection of the infinite lines through both segments.
    pub fn line_intersection(&self, other: &LineSegment) -> Option<Vector2D> {
        let r = self.direction();
        let s = other.direction();
        let denom = r.cross(s);
        if denom.abs() <= STANDARD_EPSILON {
            return None;
        }
        let t = (other.start - self.start).cross(s) / denom;
        Some(self.point_at(t))
    }

    fn line_parameters(&self, other: &LineSegment) -> Option<(f64, f64)> {
        let r = self.direction();
        let s = other.direction();
        let denom = r.cross(s);
        if denom == 0.0 {
            return None;
        }
        let qp = other.start - self.start;
        Some((qp.cross(s) / denom, qp.cross(r) / denom))
    }

    /// Where a ray (`origin + t·direction`, `t >= 0`) crosses this segment.
    pub fn intersection_with_ray(&self, origin: Vector2D, direction: Vector2D) -> Option<Vector2D> {
        let s = self.direction();
        let denom = direction.cross(s);
        if denom.abs() <= STANDARD_EPSILON {
            return None;
        }
        let qp = self.start - origin;
        let t = qp.cross(s) / denom;
        let u = qp.cross(direction) / denom;
        if t < 0.0 || !(0.0..=1.0).contains(&u) {
            return None;
        }
        Some(origin + direction * t)
    }

    /// Closest point of the segment to `point`.
    pub fn closest_point(&self, point: Vector2D) -> Vector2D {
        let d = self.direction();
        let len_sq = d.length_squared();
        if len_sq <= STANDARD_EPSILON {
            return self.start;
        }
        let t = ((point - self.start).dot(d) / len_sq).clamp(0.0, 1.0);
        self.point_at(t)
    }

    pub fn distance_to_point(&self, point: Vector2D) -> f64 {
        self.closest_point(point).distance(point)
    }

    /// The parallel segment shifted by `distance` along the left-hand normal.
    pub fn offset(&self, distance: f64) -> LineSegment {
        let shift = self.normal() * distance;
        LineSegment::new(self.start + shift, self.end + shift)
    }
}
