use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Machine epsilon for `f64`; the default tolerance for "numerically zero" checks.
pub const STANDARD_EPSILON: f64 = f64::EPSILON;

/// A 2D point or displacement in double precision.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

pub fn vector(x: f64, y: f64) -> Vector2D {
    Vector2D::new(x, y)
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn dot(self, other: Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product; positive when `other` turns counter-clockwise.
    pub fn cross(self, other: Vector2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Unit vector in the same direction. Zero-length input yields the zero vector.
    pub fn normalized(self) -> Vector2D {
        let len = self.length();
        if len <= STANDARD_EPSILON || !len.is_finite() {
            return Vector2D::ZERO;
        }
        Vector2D::new(self.x / len, self.y / len)
    }

    pub fn distance(self, other: Vector2D) -> f64 {
        (other - self).length()
    }

    pub fn distance_squared(self, other: Vector2D) -> f64 {
        (other - self).length_squared()
    }

    pub fn lerp(self, other: Vector2D, t: f64) -> Vector2D {
        Vector2D::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Left-hand perpendicular, `(-y, x)`.
    pub fn perpendicular(self) -> Vector2D {
        Vector2D::new(-self.y, self.x)
    }

    /// Angle from the positive x axis, in radians within `(-π, π]`.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn rotated(self, radians: f64) -> Vector2D {
        let (sin, cos) = radians.sin_cos();
        Vector2D::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn min(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x.max(other.x), self.y.max(other.y))
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn approx_eq(self, other: Vector2D, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Vector2D) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vector2D {
    type Output = Vector2D;

    fn div(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2D::new(x, y)
    }
}

impl From<crate::Point> for Vector2D {
    fn from(p: crate::Point) -> Self {
        Vector2D::new(p.x, p.y)
    }
}

impl From<Vector2D> for crate::Point {
    fn from(v: Vector2D) -> Self {
        euclid::point2(v.x, v.y)
    }
}

impl From<crate::Vector> for Vector2D {
    fn from(v: crate::Vector) -> Self {
        Vector2D::new(v.x, v.y)
    }
}

impl From<Vector2D> for crate::Vector {
    fn from(v: Vector2D) -> Self {
        euclid::vec2(v.x, v.y)
    }
}
