#![forbid(unsafe_code)]

//! Geometry and collision core for 2D diagramming.
//!
//! This crate re-exports [`trellis_geom`] (vectors, transforms, Bezier paths, tessellation, path
//! text, polyline offsetting) and [`trellis_collide`] (collision shapes, overlap tests, connector
//! touch points), and adds [`Outline`], which owns a block path and memoizes its derived geometry.

pub mod outline;

pub use outline::Outline;
pub use trellis_collide as collide;
pub use trellis_geom as geom;

pub use trellis_collide::{CollisionShape, ShapeKind, ShapeType};
pub use trellis_geom::{
    AffineTransform, BezierPath, GeometryConfig, JoinType, LineSegment, OffsetOptions, PathElement,
    Rect2D, TessellationOptions, Vector2D, offset_polyline, vector,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
