//! Parallel offsetting of open polylines, used to build the filled body of fat connectors.

use crate::config::OffsetOptions;
use crate::line::LineSegment;
use crate::vector::{STANDARD_EPSILON, Vector2D};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_8, PI, TAU};

/// How two consecutive offset segments are connected at a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JoinType {
    /// Extend both segments until they meet; falls back to `Bevel` past the miter limit.
    #[default]
    Miter,
    /// Connect the two segment ends directly.
    Bevel,
    /// Connect the two segment ends with an arc around the original corner.
    Round,
}

/// Angular spacing of the samples on a round join.
pub const ROUND_JOIN_STEP: f64 = FRAC_PI_8;

/// Offsets `points` by half of `offset` to the left of the walking direction.
///
/// A negative `offset` offsets to the right. Consecutive duplicate points are ignored; fewer than
/// two distinct points return the input unchanged.
pub fn offset_polyline(
    points: &[Vector2D],
    offset: f64,
    join: JoinType,
    miter_limit: f64,
) -> Vec<Vector2D> {
    let mut distinct: Vec<Vector2D> = Vec::with_capacity(points.len());
    for p in points {
        if distinct
            .last()
            .is_none_or(|last| last.distance(*p) > STANDARD_EPSILON)
        {
            distinct.push(*p);
        }
    }
    if distinct.len() < 2 {
        return points.to_vec();
    }

    let half = offset * 0.5;
    let segments: Vec<LineSegment> = distinct
        .windows(2)
        .map(|w| LineSegment::new(w[0], w[1]).offset(half))
        .collect();

    let mut out = Vec::with_capacity(segments.len() * 2 + 1);
    out.push(segments[0].start);
    for (i, pair) in segments.windows(2).enumerate() {
        let joint = distinct[i + 1];
        let (prev, next) = (&pair[0], &pair[1]);
        match join {
            JoinType::Miter => miter_join(&mut out, prev, next, joint, half.abs() * miter_limit),
            JoinType::Bevel => bevel_join(&mut out, prev, next),
            JoinType::Round => round_join(&mut out, prev, next, joint),
        }
    }
    if let Some(last) = segments.last() {
        out.push(last.end);
    }
    out
}

pub fn offset_polyline_with(
    points: &[Vector2D],
    offset: f64,
    options: &OffsetOptions,
) -> Vec<Vector2D> {
    offset_polyline(points, offset, options.join, options.miter_limit)
}

/// Closed outline of a polyline stroked with `width`: the left offset followed by the right offset
/// walked backwards.
pub fn stroke_outline(points: &[Vector2D], width: f64, options: &OffsetOptions) -> Vec<Vector2D> {
    let mut left = offset_polyline_with(points, width, options);
    let right = offset_polyline_with(points, -width, options);
    left.extend(right.into_iter().rev());
    left
}

fn bevel_join(out: &mut Vec<Vector2D>, prev: &LineSegment, next: &LineSegment) {
    out.push(prev.end);
    if prev.end.distance(next.start) > STANDARD_EPSILON {
        out.push(next.start);
    }
}

fn miter_join(
    out: &mut Vec<Vector2D>,
    prev: &LineSegment,
    next: &LineSegment,
    joint: Vector2D,
    max_miter_distance: f64,
) {
    let Some(miter) = prev.line_intersection(next) else {
        bevel_join(out, prev, next);
        return;
    };
    if miter.distance(joint) > max_miter_distance {
        tracing::debug!(
            x = joint.x,
            y = joint.y,
            "miter exceeds limit; using bevel join"
        );
        bevel_join(out, prev, next);
        return;
    }
    out.push(miter);
}

fn round_join(out: &mut Vec<Vector2D>, prev: &LineSegment, next: &LineSegment, joint: Vector2D) {
    let from = prev.end - joint;
    let to = next.start - joint;
    let mut delta = to.angle() - from.angle();
    if delta > PI {
        delta -= TAU;
    } else if delta <= -PI {
        delta += TAU;
    }
    if delta.abs() <= STANDARD_EPSILON {
        bevel_join(out, prev, next);
        return;
    }

    let radius = from.length();
    let start_angle = from.angle();
    let steps = ((delta.abs() / ROUND_JOIN_STEP).ceil() as usize).max(2);
    for k in 0..=steps {
        let angle = start_angle + delta * k as f64 / steps as f64;
        out.push(joint + Vector2D::new(angle.cos(), angle.sin()) * radius);
    }
}
