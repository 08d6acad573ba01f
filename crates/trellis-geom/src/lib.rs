#![forbid(unsafe_code)]

//! Vector geometry for 2D diagrams.
//!
//! Leaves first: [`Vector2D`], [`Rect2D`] and [`AffineTransform`]; [`LineSegment`] queries;
//! [`BezierPath`] construction and adaptive tessellation; the textual path grammar
//! ([`path_text`]); and polyline offsetting for filled connector bodies ([`offset`]).
//!
//! Everything here is synchronous value code. Degenerate input yields `None` or a neutral value
//! rather than an error.

pub mod config;
pub mod curve;
pub mod error;
pub mod line;
pub mod offset;
pub mod path;
pub mod path_text;
pub mod polygon;
pub mod rect;
pub mod transform;
pub mod vector;

pub use config::{GeometryConfig, OffsetOptions, TessellationOptions};
pub use error::{Error, Result};
pub use line::LineSegment;
pub use offset::{JoinType, offset_polyline};
pub use path::{BezierPath, PathElement};
pub use path_text::{Scanner, scan_bezier_path_elements};
pub use rect::Rect2D;
pub use transform::AffineTransform;
pub use vector::{STANDARD_EPSILON, Vector2D, vector};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `euclid` counterparts of the value types, for interop with renderers built on `euclid`.
pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Rect = euclid::Rect<f64, Unit>;
pub type Transform = euclid::Transform2D<f64, Unit, Unit>;
