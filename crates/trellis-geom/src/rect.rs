use crate::vector::Vector2D;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle stored as its minimum corner plus size.
///
/// The minimum corner is the bottom-left corner in a y-up coordinate space. Sizes are expected to
/// be non-negative; constructors that take arbitrary corners normalize them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect2D {
    pub origin: Vector2D,
    pub size: Vector2D,
}

impl Rect2D {
    pub const fn new(origin: Vector2D, size: Vector2D) -> Self {
        Self { origin, size }
    }

    pub fn from_center(center: Vector2D, size: Vector2D) -> Self {
        Self {
            origin: center - size * 0.5,
            size,
        }
    }

    pub fn from_corners(a: Vector2D, b: Vector2D) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self {
            origin: min,
            size: max - min,
        }
    }

    /// Smallest rectangle containing every point, or `None` for an empty iterator.
    pub fn bounding<I>(points: I) -> Option<Rect2D>
    where
        I: IntoIterator<Item = Vector2D>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Rect2D::from_corners(min, max))
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.x
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.y
    }

    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.x * 0.5
    }

    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.y * 0.5
    }

    pub fn min(&self) -> Vector2D {
        self.origin
    }

    pub fn max(&self) -> Vector2D {
        self.origin + self.size
    }

    pub fn center(&self) -> Vector2D {
        Vector2D::new(self.mid_x(), self.mid_y())
    }

    /// Corners in counter-clockwise order starting at the origin.
    pub fn corners(&self) -> [Vector2D; 4] {
        [
            Vector2D::new(self.min_x(), self.min_y()),
            Vector2D::new(self.max_x(), self.min_y()),
            Vector2D::new(self.max_x(), self.max_y()),
            Vector2D::new(self.min_x(), self.max_y()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Vector2D) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    /// Inclusive overlap test; rectangles sharing only an edge intersect.
    pub fn intersects(&self, other: &Rect2D) -> bool {
        self.min_x() <= other.max_x()
            && other.min_x() <= self.max_x()
            && self.min_y() <= other.max_y()
            && other.min_y() <= self.max_y()
    }

    pub fn union(&self, other: &Rect2D) -> Rect2D {
        Rect2D::from_corners(self.min().min(other.min()), self.max().max(other.max()))
    }

    /// Shrinks every side by `amount`; negative values grow the rectangle. Collapses to the
    /// center instead of producing a negative size.
    pub fn inset(&self, amount: f64) -> Rect2D {
        let width = (self.size.x - 2.0 * amount).max(0.0);
        let height = (self.size.y - 2.0 * amount).max(0.0);
        Rect2D::from_center(self.center(), Vector2D::new(width, height))
    }

    /// Clamps `point` into the rectangle.
    pub fn clamp(&self, point: Vector2D) -> Vector2D {
        Vector2D::new(
            point.x.max(self.min_x()).min(self.max_x()),
            point.y.max(self.min_y()).min(self.max_y()),
        )
    }
}

impl From<crate::Rect> for Rect2D {
    fn from(r: crate::Rect) -> Self {
        Rect2D::new(r.origin.into(), Vector2D::new(r.size.width, r.size.height))
    }
}

impl From<Rect2D> for crate::Rect {
    fn from(r: Rect2D) -> Self {
        euclid::rect(r.origin.x, r.origin.y, r.size.x, r.size.y)
    }
}
