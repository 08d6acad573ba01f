//! Bezier path construction, transformation and tessellation.

use crate::config::TessellationOptions;
use crate::curve::{CubicBezier, QuadBezier, flatten};
use crate::rect::Rect2D;
use crate::transform::AffineTransform;
use crate::vector::Vector2D;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Control-point factors for a quarter circle of radius 1 drawn as one cubic.
///
/// The quadrant from `(a, 0)` to `(0, a)` uses controls `(c, b)` and `(b, c)`; the radial error
/// stays below 0.02% of the radius.
pub const CIRCLE_ARC_A: f64 = 1.000_055_19;
pub const CIRCLE_ARC_B: f64 = 0.553_426_86;
pub const CIRCLE_ARC_C: f64 = 0.998_735_85;

/// `ClosePath` only emits the subpath start when the pen is farther away than this.
pub const CLOSE_POINT_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PathElement {
    MoveTo(Vector2D),
    LineTo(Vector2D),
    QuadCurveTo {
        control: Vector2D,
        end: Vector2D,
    },
    CurveTo {
        control1: Vector2D,
        control2: Vector2D,
        end: Vector2D,
    },
    ClosePath,
}

impl PathElement {
    /// Where the pen rests after this element; `None` for `ClosePath`.
    pub fn end_point(&self) -> Option<Vector2D> {
        match *self {
            PathElement::MoveTo(p) | PathElement::LineTo(p) => Some(p),
            PathElement::QuadCurveTo { end, .. } | PathElement::CurveTo { end, .. } => Some(end),
            PathElement::ClosePath => None,
        }
    }

    pub fn is_curve(&self) -> bool {
        matches!(
            self,
            PathElement::QuadCurveTo { .. } | PathElement::CurveTo { .. }
        )
    }

    pub fn transformed(&self, t: &AffineTransform) -> PathElement {
        match *self {
            PathElement::MoveTo(p) => PathElement::MoveTo(t.apply(p)),
            PathElement::LineTo(p) => PathElement::LineTo(t.apply(p)),
            PathElement::QuadCurveTo { control, end } => PathElement::QuadCurveTo {
                control: t.apply(control),
                end: t.apply(end),
            },
            PathElement::CurveTo {
                control1,
                control2,
                end,
            } => PathElement::CurveTo {
                control1: t.apply(control1),
                control2: t.apply(control2),
                end: t.apply(end),
            },
            PathElement::ClosePath => PathElement::ClosePath,
        }
    }
}

/// An ordered list of path elements forming one or more subpaths.
///
/// Every drawing element appended before the first `MoveTo` gets a `MoveTo(0, 0)` in front of it,
/// so a non-empty path always starts with `MoveTo`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<PathElement>", into = "Vec<PathElement>")]
pub struct BezierPath {
    elements: Vec<PathElement>,
    /// Default-options tessellation; reset by every mutation.
    flattened: OnceCell<Vec<Vector2D>>,
}

impl PartialEq for BezierPath {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl From<Vec<PathElement>> for BezierPath {
    fn from(elements: Vec<PathElement>) -> Self {
        BezierPath::from_elements(elements)
    }
}

impl From<BezierPath> for Vec<PathElement> {
    fn from(path: BezierPath) -> Self {
        path.elements
    }
}

impl BezierPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = PathElement>,
    {
        let mut path = BezierPath::new();
        for element in elements {
            path.push(element);
        }
        path
    }

    pub fn rect(rect: Rect2D) -> Self {
        let mut path = BezierPath::new();
        path.add_rect(rect);
        path
    }

    pub fn circle(center: Vector2D, radius: f64) -> Self {
        let mut path = BezierPath::new();
        path.add_circle(center, radius);
        path
    }

    pub fn ellipse(rect: Rect2D) -> Self {
        let mut path = BezierPath::new();
        path.add_ellipse(rect);
        path
    }

    pub fn polygon(points: &[Vector2D]) -> Self {
        let mut path = BezierPath::new();
        path.add_polygon(points);
        path
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends `element`, inserting `MoveTo(0, 0)` first when the path has no start point yet.
    pub fn push(&mut self, element: PathElement) {
        self.flattened.take();
        if self.elements.is_empty() && !matches!(element, PathElement::MoveTo(_)) {
            self.elements.push(PathElement::MoveTo(Vector2D::ZERO));
        }
        self.elements.push(element);
    }

    pub fn move_to(&mut self, point: Vector2D) {
        self.push(PathElement::MoveTo(point));
    }

    pub fn add_line(&mut self, to: Vector2D) {
        self.push(PathElement::LineTo(to));
    }

    pub fn add_quad_curve(&mut self, to: Vector2D, control: Vector2D) {
        self.push(PathElement::QuadCurveTo { control, end: to });
    }

    pub fn add_curve(&mut self, to: Vector2D, control1: Vector2D, control2: Vector2D) {
        self.push(PathElement::CurveTo {
            control1,
            control2,
            end: to,
        });
    }

    pub fn close_subpath(&mut self) {
        self.push(PathElement::ClosePath);
    }

    /// Closed rectangle subpath, counter-clockwise from the origin corner.
    pub fn add_rect(&mut self, rect: Rect2D) {
        let [p0, p1, p2, p3] = rect.corners();
        self.move_to(p0);
        self.add_line(p1);
        self.add_line(p2);
        self.add_line(p3);
        self.close_subpath();
    }

    pub fn add_circle(&mut self, center: Vector2D, radius: f64) {
        self.add_ellipse(Rect2D::from_center(
            center,
            Vector2D::new(radius * 2.0, radius * 2.0),
        ));
    }

    /// Closed ellipse inscribed in `rect`, as four cubic quadrants starting at the right extreme.
    pub fn add_ellipse(&mut self, rect: Rect2D) {
        let center = rect.center();
        let rx = rect.width() * 0.5;
        let ry = rect.height() * 0.5;
        let at = |x: f64, y: f64| Vector2D::new(center.x + x * rx, center.y + y * ry);

        let (a, b, c) = (CIRCLE_ARC_A, CIRCLE_ARC_B, CIRCLE_ARC_C);
        self.move_to(at(a, 0.0));
        self.add_curve(at(0.0, a), at(c, b), at(b, c));
        self.add_curve(at(-a, 0.0), at(-b, c), at(-c, b));
        self.add_curve(at(0.0, -a), at(-c, -b), at(-b, -c));
        self.add_curve(at(a, 0.0), at(b, -c), at(c, -b));
        self.close_subpath();
    }

    /// Circular arc around `center`, split into cubic pieces of at most a quarter turn.
    ///
    /// Angles are in radians, counter-clockwise from the positive x axis. A sweep larger than a
    /// full turn draws a full circle. When the path already has a current point, a straight line
    /// joins it to the arc start.
    pub fn add_arc(
        &mut self,
        center: Vector2D,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) {
        if !(radius.is_finite() && radius > 0.0 && start_angle.is_finite() && end_angle.is_finite())
        {
            tracing::debug!(radius, start_angle, end_angle, "skipping degenerate arc");
            return;
        }

        let mut sweep = end_angle - start_angle;
        if clockwise {
            if sweep > 0.0 {
                sweep -= TAU * (sweep / TAU).ceil();
            }
            sweep = sweep.max(-TAU);
        } else {
            if sweep < 0.0 {
                sweep += TAU * (-sweep / TAU).ceil();
            }
            sweep = sweep.min(TAU);
        }

        let on_circle = |angle: f64| center + Vector2D::new(angle.cos(), angle.sin()) * radius;
        let start = on_circle(start_angle);
        match self.current_point() {
            Some(current) if self.has_open_subpath() => {
                if current.distance(start) > CLOSE_POINT_EPSILON {
                    self.add_line(start);
                }
            }
            _ => self.move_to(start),
        }
        if sweep == 0.0 {
            return;
        }

        let pieces = (sweep.abs() / FRAC_PI_2).ceil().max(1.0) as usize;
        let step = sweep / pieces as f64;
        let k = 4.0 / 3.0 * (step / 4.0).tan() * radius;
        let mut angle = start_angle;
        for _ in 0..pieces {
            let next = angle + step;
            let from = on_circle(angle);
            let to = on_circle(next);
            let control1 = from + Vector2D::new(-angle.sin(), angle.cos()) * k;
            let control2 = to - Vector2D::new(-next.sin(), next.cos()) * k;
            self.add_curve(to, control1, control2);
            angle = next;
        }
    }

    /// Closed polygon subpath through `points`; fewer than two points add nothing.
    pub fn add_polygon(&mut self, points: &[Vector2D]) {
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.is_empty() {
            return;
        }
        self.move_to(*first);
        for p in rest {
            self.add_line(*p);
        }
        self.close_subpath();
    }

    /// Appends every element of `other`.
    pub fn add_path(&mut self, other: &BezierPath) {
        for element in &other.elements {
            self.push(*element);
        }
    }

    fn has_open_subpath(&self) -> bool {
        !matches!(self.elements.last(), None | Some(PathElement::ClosePath))
    }

    /// Pen position after the last element; a closed subpath returns the pen to its start.
    pub fn current_point(&self) -> Option<Vector2D> {
        let mut current = None;
        let mut subpath_start = None;
        for element in &self.elements {
            match element {
                PathElement::MoveTo(p) => {
                    subpath_start = Some(*p);
                    current = Some(*p);
                }
                PathElement::ClosePath => current = subpath_start,
                other => current = other.end_point(),
            }
        }
        current
    }

    /// A copy with every move, line, control and end point mapped through `t`.
    pub fn transform(&self, t: &AffineTransform) -> BezierPath {
        BezierPath {
            elements: self.elements.iter().map(|e| e.transformed(t)).collect(),
            flattened: OnceCell::new(),
        }
    }

    /// Splits the path after every `ClosePath`.
    ///
    /// A trailing unclosed run is returned as the last subpath. A `ClosePath` directly following
    /// another one contributes nothing. A run that continues drawing after a close starts with a
    /// `MoveTo` to where the close left the pen.
    pub fn subpaths(&self) -> Vec<BezierPath> {
        let mut out = Vec::new();
        let mut run: Vec<PathElement> = Vec::new();
        let mut subpath_start = Vector2D::ZERO;
        for element in &self.elements {
            match *element {
                PathElement::ClosePath => {
                    if run.is_empty() {
                        continue;
                    }
                    run.push(PathElement::ClosePath);
                    out.push(BezierPath::from_elements(std::mem::take(&mut run)));
                }
                PathElement::MoveTo(p) => {
                    subpath_start = p;
                    run.push(PathElement::MoveTo(p));
                }
                other => {
                    if run.is_empty() {
                        run.push(PathElement::MoveTo(subpath_start));
                    }
                    run.push(other);
                }
            }
        }
        if !run.is_empty() {
            out.push(BezierPath::from_elements(run));
        }
        out
    }

    /// True when the path is made only of moves, lines and closes.
    ///
    /// An empty path has no vertices and is not a polygon, so `as_strict_polygon` never yields an
    /// empty vertex list.
    pub fn is_polygon(&self) -> bool {
        !self.elements.is_empty() && !self.elements.iter().any(PathElement::is_curve)
    }

    /// The vertices of a curve-free path, in order.
    ///
    /// Interior `MoveTo` points are kept as ordinary vertices, so multiple subpaths read as one
    /// continuous polygon.
    pub fn as_strict_polygon(&self) -> Option<Vec<Vector2D>> {
        if !self.is_polygon() {
            return None;
        }
        Some(
            self.elements
                .iter()
                .filter_map(PathElement::end_point)
                .collect(),
        )
    }

    /// Approximates the path by points joined with straight segments.
    pub fn tessellate(&self, max_stages: usize, tolerance: f64) -> Vec<Vector2D> {
        let mut out = Vec::with_capacity(self.elements.len() * 2);
        let mut current = Vector2D::ZERO;
        let mut subpath_start = Vector2D::ZERO;

        for element in &self.elements {
            match *element {
                PathElement::MoveTo(p) => {
                    out.push(p);
                    current = p;
                    subpath_start = p;
                }
                PathElement::LineTo(p) => {
                    out.push(p);
                    current = p;
                }
                PathElement::QuadCurveTo { control, end } => {
                    out.extend(flatten(
                        QuadBezier::new(current, control, end),
                        max_stages,
                        tolerance,
                    ));
                    current = end;
                }
                PathElement::CurveTo {
                    control1,
                    control2,
                    end,
                } => {
                    out.extend(flatten(
                        CubicBezier::new(current, control1, control2, end),
                        max_stages,
                        tolerance,
                    ));
                    current = end;
                }
                PathElement::ClosePath => {
                    if current.distance(subpath_start) > CLOSE_POINT_EPSILON {
                        out.push(subpath_start);
                    }
                    current = subpath_start;
                }
            }
        }
        out
    }

    pub fn tessellate_with(&self, options: &TessellationOptions) -> Vec<Vector2D> {
        self.tessellate(options.max_stages, options.tolerance)
    }

    /// Tessellation with default options, computed once per path state.
    pub fn tessellation(&self) -> &[Vector2D] {
        self.flattened
            .get_or_init(|| self.tessellate_with(&TessellationOptions::default()))
    }

    /// Bounds of the default tessellation; `None` for an empty path.
    pub fn bounding_box(&self) -> Option<Rect2D> {
        Rect2D::bounding(self.tessellation().iter().copied())
    }
}
