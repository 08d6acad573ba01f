use crate::error::{Error, Result};
use crate::polygon::is_convex;
use serde::{Deserialize, Serialize};
use trellis_geom::polygon::centroid;
use trellis_geom::path::CLOSE_POINT_EPSILON;
use trellis_geom::{BezierPath, Rect2D, Vector2D};

/// Outline of a collision shape in its local coordinate space.
///
/// Circles and rectangles are centered on the local origin; polygon points are relative to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ShapeType {
    Circle { radius: f64 },
    Rectangle { size: Vector2D },
    ConvexPolygon { points: Vec<Vector2D> },
    ConcavePolygon { points: Vec<Vector2D> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    ConvexPolygon,
    ConcavePolygon,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::ConvexPolygon => "convexPolygon",
            ShapeKind::ConcavePolygon => "concavePolygon",
        }
    }
}

impl ShapeType {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeType::Circle { .. } => ShapeKind::Circle,
            ShapeType::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeType::ConvexPolygon { .. } => ShapeKind::ConvexPolygon,
            ShapeType::ConcavePolygon { .. } => ShapeKind::ConcavePolygon,
        }
    }

    /// Convex or concave polygon variant, depending on the outline.
    pub fn polygon(points: Vec<Vector2D>) -> Self {
        if is_convex(&points) {
            ShapeType::ConvexPolygon { points }
        } else {
            ShapeType::ConcavePolygon { points }
        }
    }

    /// Rejects polygons with fewer than three points.
    pub fn validate(&self) -> Result<()> {
        match self {
            ShapeType::ConvexPolygon { points } | ShapeType::ConcavePolygon { points }
                if points.len() < 3 =>
            {
                Err(Error::DegeneratePolygon {
                    kind: self.kind().as_str(),
                    points: points.len(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Decodes and validates a JSON shape description such as
    /// `{"type": "circle", "radius": 5}`. Unknown `type` tags are errors.
    pub fn from_json(text: &str) -> Result<Self> {
        let shape: ShapeType = serde_json::from_str(text).inspect_err(|err| {
            tracing::warn!(%err, "rejecting collision shape data");
        })?;
        shape.validate()?;
        Ok(shape)
    }
}

/// A shape placed at `position` in its owner's coordinate space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollisionShape {
    pub shape: ShapeType,
    #[serde(default)]
    pub position: Vector2D,
}

impl CollisionShape {
    pub fn new(shape: ShapeType, position: Vector2D) -> Self {
        Self { shape, position }
    }

    pub fn circle(center: Vector2D, radius: f64) -> Self {
        Self::new(ShapeType::Circle { radius }, center)
    }

    pub fn rectangle(center: Vector2D, size: Vector2D) -> Self {
        Self::new(ShapeType::Rectangle { size }, center)
    }

    pub fn convex_polygon(points: Vec<Vector2D>, position: Vector2D) -> Self {
        Self::new(ShapeType::ConvexPolygon { points }, position)
    }

    pub fn concave_polygon(points: Vec<Vector2D>, position: Vector2D) -> Self {
        Self::new(ShapeType::ConcavePolygon { points }, position)
    }

    /// Polygon shape from a path outline.
    ///
    /// Curve-free paths keep their vertices; curved paths are tessellated with default options.
    /// Returns `None` when fewer than three distinct vertices remain.
    pub fn from_path(path: &BezierPath, position: Vector2D) -> Option<Self> {
        match path.as_strict_polygon() {
            Some(points) => Self::from_points(points, position),
            None => Self::from_points(path.tessellation().to_vec(), position),
        }
    }

    /// Polygon shape from outline points, dropping repeated and closing duplicates.
    pub fn from_points(raw: Vec<Vector2D>, position: Vector2D) -> Option<Self> {
        let mut points: Vec<Vector2D> = Vec::with_capacity(raw.len());
        for p in raw {
            if points
                .last()
                .is_none_or(|last| last.distance(p) > CLOSE_POINT_EPSILON)
            {
                points.push(p);
            }
        }
        if points.len() > 1 && points[0].distance(points[points.len() - 1]) <= CLOSE_POINT_EPSILON {
            points.pop();
        }
        if points.len() < 3 {
            tracing::debug!(points = points.len(), "outline too small for a collision polygon");
            return None;
        }
        Some(Self::new(ShapeType::polygon(points), position))
    }

    /// Polygon shape from path data text; see [`CollisionShape::from_path`].
    pub fn from_path_data(data: &str, position: Vector2D) -> Result<Self> {
        let path: BezierPath = data.parse()?;
        Self::from_path(&path, position).ok_or_else(|| Error::DegeneratePolygon {
            kind: "path outline",
            points: path.tessellation().len(),
        })
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let shape: CollisionShape = serde_json::from_str(text).inspect_err(|err| {
            tracing::warn!(%err, "rejecting collision shape data");
        })?;
        shape.shape.validate()?;
        Ok(shape)
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Circle and rectangle centers sit at `position`; polygons use the vertex centroid.
    pub fn center(&self) -> Vector2D {
        match &self.shape {
            ShapeType::Circle { .. } | ShapeType::Rectangle { .. } => self.position,
            ShapeType::ConvexPolygon { points } | ShapeType::ConcavePolygon { points } => {
                centroid(points).map_or(self.position, |c| c + self.position)
            }
        }
    }

    /// Polygon vertices, or rectangle corners, in the owner's space. Empty for circles.
    pub fn world_points(&self) -> Vec<Vector2D> {
        match &self.shape {
            ShapeType::Circle { .. } => Vec::new(),
            ShapeType::Rectangle { size } => Rect2D::from_center(self.position, *size)
                .corners()
                .to_vec(),
            ShapeType::ConvexPolygon { points } | ShapeType::ConcavePolygon { points } => {
                points.iter().map(|p| *p + self.position).collect()
            }
        }
    }

    pub fn bounding_box(&self) -> Rect2D {
        match &self.shape {
            ShapeType::Circle { radius } => Rect2D::from_center(
                self.position,
                Vector2D::new(radius * 2.0, radius * 2.0),
            ),
            ShapeType::Rectangle { size } => Rect2D::from_center(self.position, *size),
            ShapeType::ConvexPolygon { .. } | ShapeType::ConcavePolygon { .. } => {
                Rect2D::bounding(self.world_points())
                    .unwrap_or_else(|| Rect2D::new(self.position, Vector2D::ZERO))
            }
        }
    }

    pub fn translated(&self, by: Vector2D) -> CollisionShape {
        CollisionShape::new(self.shape.clone(), self.position + by)
    }
}
