//! Quadratic and cubic Bezier pieces and adaptive flattening.
//!
//! Flattening works in stages: every stage halves each piece whose parametric midpoint is farther
//! than the tolerance from its chord midpoint. It stops after `max_stages` stages or once a stage
//! splits nothing.

use crate::vector::Vector2D;

pub trait Subdivide: Sized + Copy {
    fn start_point(&self) -> Vector2D;
    fn end_point(&self) -> Vector2D;
    fn eval(&self, t: f64) -> Vector2D;
    fn split(&self, t: f64) -> (Self, Self);

    /// Distance between the parametric midpoint and the chord midpoint.
    fn midpoint_deviation(&self) -> f64 {
        let chord_mid = self.start_point().lerp(self.end_point(), 0.5);
        self.eval(0.5).distance(chord_mid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadBezier {
    pub from: Vector2D,
    pub ctrl: Vector2D,
    pub to: Vector2D,
}

impl QuadBezier {
    pub const fn new(from: Vector2D, ctrl: Vector2D, to: Vector2D) -> Self {
        Self { from, ctrl, to }
    }
}

impl Subdivide for QuadBezier {
    fn start_point(&self) -> Vector2D {
        self.from
    }

    fn end_point(&self) -> Vector2D {
        self.to
    }

    fn eval(&self, t: f64) -> Vector2D {
        let mt = 1.0 - t;
        self.from * (mt * mt) + self.ctrl * (2.0 * mt * t) + self.to * (t * t)
    }

    fn split(&self, t: f64) -> (Self, Self) {
        let p01 = self.from.lerp(self.ctrl, t);
        let p12 = self.ctrl.lerp(self.to, t);
        let mid = p01.lerp(p12, t);
        (
            QuadBezier::new(self.from, p01, mid),
            QuadBezier::new(mid, p12, self.to),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub from: Vector2D,
    pub ctrl1: Vector2D,
    pub ctrl2: Vector2D,
    pub to: Vector2D,
}

impl CubicBezier {
    pub const fn new(from: Vector2D, ctrl1: Vector2D, ctrl2: Vector2D, to: Vector2D) -> Self {
        Self {
            from,
            ctrl1,
            ctrl2,
            to,
        }
    }
}

impl Subdivide for CubicBezier {
    fn start_point(&self) -> Vector2D {
        self.from
    }

    fn end_point(&self) -> Vector2D {
        self.to
    }

    fn eval(&self, t: f64) -> Vector2D {
        let mt = 1.0 - t;
        self.from * (mt * mt * mt)
            + self.ctrl1 * (3.0 * mt * mt * t)
            + self.ctrl2 * (3.0 * mt * t * t)
            + self.to * (t * t * t)
    }

    fn split(&self, t: f64) -> (Self, Self) {
        let p01 = self.from.lerp(self.ctrl1, t);
        let p12 = self.ctrl1.lerp(self.ctrl2, t);
        let p23 = self.ctrl2.lerp(self.to, t);
        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);
        let mid = p012.lerp(p123, t);
        (
            CubicBezier::new(self.from, p01, p012, mid),
            CubicBezier::new(mid, p123, p23, self.to),
        )
    }
}

/// Splits `curve` into pieces that are each within `tolerance` of their chord.
pub fn subdivide<C: Subdivide>(curve: C, max_stages: usize, tolerance: f64) -> Vec<C> {
    let mut pieces = vec![curve];
    let mut stages = 0;
    while stages < max_stages {
        let mut next = Vec::with_capacity(pieces.len() * 2);
        let mut split_any = false;
        for piece in &pieces {
            if piece.midpoint_deviation() > tolerance {
                let (left, right) = piece.split(0.5);
                next.push(left);
                next.push(right);
                split_any = true;
            } else {
                next.push(*piece);
            }
        }
        if !split_any {
            break;
        }
        pieces = next;
        stages += 1;
    }
    tracing::trace!(stages, pieces = pieces.len(), "curve subdivided");
    pieces
}

/// Flattened points of `curve`, excluding its start point.
pub fn flatten<C: Subdivide>(curve: C, max_stages: usize, tolerance: f64) -> Vec<Vector2D> {
    subdivide(curve, max_stages, tolerance)
        .iter()
        .map(Subdivide::end_point)
        .collect()
}
