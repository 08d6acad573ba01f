use crate::vector::{STANDARD_EPSILON, Vector2D};
use serde::{Deserialize, Serialize};

/// A 2×3 affine matrix.
///
/// Points map as `x' = a·x + c·y + tx`, `y' = b·x + d·y + ty`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Counter-clockwise rotation by `radians` about the origin.
    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn is_invertible(&self) -> bool {
        self.determinant().abs() > STANDARD_EPSILON
    }

    pub fn apply(&self, p: Vector2D) -> Vector2D {
        Vector2D::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Applies only the linear part (no translation), for directions and sizes.
    pub fn apply_to_vector(&self, v: Vector2D) -> Vector2D {
        Vector2D::new(self.a * v.x + self.c * v.y, self.b * v.x + self.d * v.y)
    }

    /// The transform that applies `self` first and then `other`.
    pub fn concatenating(&self, other: &AffineTransform) -> AffineTransform {
        AffineTransform {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            tx: self.tx * other.a + self.ty * other.c + other.tx,
            ty: self.tx * other.b + self.ty * other.d + other.ty,
        }
    }

    pub fn translated_by(&self, tx: f64, ty: f64) -> AffineTransform {
        self.concatenating(&AffineTransform::translation(tx, ty))
    }

    pub fn scaled_by(&self, sx: f64, sy: f64) -> AffineTransform {
        self.concatenating(&AffineTransform::scale(sx, sy))
    }

    pub fn rotated_by(&self, radians: f64) -> AffineTransform {
        self.concatenating(&AffineTransform::rotation(radians))
    }

    /// Inverse transform, or `None` when the determinant is numerically zero.
    pub fn inverted(&self) -> Option<AffineTransform> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() <= STANDARD_EPSILON {
            return None;
        }
        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;
        Some(AffineTransform {
            a,
            b,
            c,
            d,
            tx: -(a * self.tx + c * self.ty),
            ty: -(b * self.tx + d * self.ty),
        })
    }
}

impl From<crate::Transform> for AffineTransform {
    fn from(t: crate::Transform) -> Self {
        AffineTransform::new(t.m11, t.m12, t.m21, t.m22, t.m31, t.m32)
    }
}

impl From<AffineTransform> for crate::Transform {
    fn from(t: AffineTransform) -> Self {
        euclid::Transform2D::new(t.a, t.b, t.c, t.d, t.tx, t.ty)
    }
}
