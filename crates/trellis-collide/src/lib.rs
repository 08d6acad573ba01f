#![forbid(unsafe_code)]

//! Collision shapes for diagram blocks.
//!
//! A [`CollisionShape`] is a closed [`ShapeType`] variant placed at a position. Shapes answer two
//! questions: do two shapes overlap ([`CollisionShape::collide`]), and where does a ray from a
//! connector waypoint meet the outline ([`CollisionShape::intersect_ray`],
//! [`CollisionShape::touch_point`]).

pub mod collision;
pub mod error;
pub mod polygon;
pub mod ray;
pub mod shape;

pub use error::{Error, Result};
pub use polygon::{is_convex, point_in_concave_polygon, point_in_convex_polygon};
pub use ray::{intersect_ray_circle, intersect_ray_polygon, intersect_ray_rect};
pub use shape::{CollisionShape, ShapeKind, ShapeType};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
