use trellis_geom::offset::{offset_polyline_with, stroke_outline};
use trellis_geom::{JoinType, OffsetOptions, Vector2D, offset_polyline, vector};

fn assert_points(actual: &[Vector2D], expected: &[Vector2D]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!(a.approx_eq(*e, 1e-9), "expected {expected:?}, got {actual:?}");
    }
}

fn corner() -> Vec<Vector2D> {
    vec![vector(0.0, 0.0), vector(10.0, 0.0), vector(10.0, 10.0)]
}

#[test]
fn straight_segment_shifts_by_half_the_offset() {
    let out = offset_polyline(&[vector(0.0, 0.0), vector(10.0, 0.0)], 4.0, JoinType::Miter, 4.0);
    assert_points(&out, &[vector(0.0, 2.0), vector(10.0, 2.0)]);

    let out = offset_polyline(&[vector(0.0, 0.0), vector(10.0, 0.0)], -4.0, JoinType::Miter, 4.0);
    assert_points(&out, &[vector(0.0, -2.0), vector(10.0, -2.0)]);
}

#[test]
fn degenerate_input_is_returned_unchanged() {
    let single = vec![vector(3.0, 3.0)];
    assert_eq!(offset_polyline(&single, 4.0, JoinType::Round, 4.0), single);

    let repeated = vec![vector(3.0, 3.0), vector(3.0, 3.0)];
    assert_eq!(offset_polyline(&repeated, 4.0, JoinType::Miter, 4.0), repeated);
    assert!(offset_polyline(&[], 4.0, JoinType::Miter, 4.0).is_empty());
}

#[test]
fn repeated_points_do_not_break_the_walk() {
    let points = [
        vector(0.0, 0.0),
        vector(10.0, 0.0),
        vector(10.0, 0.0),
        vector(10.0, 10.0),
    ];
    let out = offset_polyline(&points, 2.0, JoinType::Miter, 4.0);
    assert_points(&out, &[vector(0.0, 1.0), vector(9.0, 1.0), vector(9.0, 10.0)]);
}

#[test]
fn miter_join_meets_at_the_corner() {
    let out = offset_polyline(&corner(), 2.0, JoinType::Miter, 4.0);
    assert_points(&out, &[vector(0.0, 1.0), vector(9.0, 1.0), vector(9.0, 10.0)]);
}

#[test]
fn bevel_join_connects_segment_ends() {
    let out = offset_polyline(&corner(), 2.0, JoinType::Bevel, 4.0);
    assert_points(
        &out,
        &[
            vector(0.0, 1.0),
            vector(10.0, 1.0),
            vector(9.0, 0.0),
            vector(9.0, 10.0),
        ],
    );
}

#[test]
fn sharp_miter_falls_back_to_bevel() {
    let spike = [vector(0.0, 0.0), vector(10.0, 0.0), vector(0.0, 1.0)];
    let out = offset_polyline(&spike, 2.0, JoinType::Miter, 4.0);
    assert_eq!(out.len(), 4);
    assert!(out[1].approx_eq(vector(10.0, 1.0), 1e-9));

    // A generous limit keeps the miter.
    let out = offset_polyline(&spike, 2.0, JoinType::Miter, 100.0);
    assert_eq!(out.len(), 3);
}

#[test]
fn round_join_samples_an_arc_around_the_corner() {
    let joint = vector(10.0, 0.0);
    let out = offset_polyline(&corner(), 2.0, JoinType::Round, 4.0);
    let arc = &out[1..out.len() - 1];
    assert!(arc.len() >= 3, "{out:?}");
    assert!(arc.iter().all(|p| (p.distance(joint) - 1.0).abs() < 1e-9));
    assert!(arc[0].approx_eq(vector(10.0, 1.0), 1e-9));
    assert!(arc[arc.len() - 1].approx_eq(vector(9.0, 0.0), 1e-9));
}

#[test]
fn round_join_on_a_shallow_bend_still_has_three_points() {
    let points = [vector(0.0, 0.0), vector(10.0, 0.0), vector(20.0, 0.5)];
    let out = offset_polyline(&points, 2.0, JoinType::Round, 4.0);
    assert_eq!(out.len(), 5);
}

#[test]
fn options_pick_the_join() {
    let options = OffsetOptions {
        join: JoinType::Bevel,
        ..OffsetOptions::default()
    };
    assert_eq!(offset_polyline_with(&corner(), 2.0, &options).len(), 4);
}

#[test]
fn stroke_outline_walks_both_sides() {
    let line = [vector(0.0, 0.0), vector(10.0, 0.0)];
    let outline = stroke_outline(&line, 4.0, &OffsetOptions::default());
    assert_points(
        &outline,
        &[
            vector(0.0, 2.0),
            vector(10.0, 2.0),
            vector(10.0, -2.0),
            vector(0.0, -2.0),
        ],
    );
}
