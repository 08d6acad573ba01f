use trellis_collide::CollisionShape;
use trellis_geom::{
    AffineTransform, BezierPath, GeometryConfig, Rect2D, TessellationOptions, Vector2D,
};

/// A block outline: a path in local coordinates placed at a position.
///
/// The tessellated outline and the collision shape are derived lazily and kept until a setter
/// changes the geometry they depend on.
#[derive(Debug, Clone, Default)]
pub struct Outline {
    path: BezierPath,
    position: Vector2D,
    options: TessellationOptions,
    tessellation: Option<Vec<Vector2D>>,
    collision_shape: Option<CollisionShape>,
}

impl Outline {
    pub fn new(path: BezierPath, position: Vector2D) -> Self {
        Self {
            path,
            position,
            ..Default::default()
        }
    }

    pub fn with_config(path: BezierPath, position: Vector2D, config: &GeometryConfig) -> Self {
        Self {
            options: config.tessellation,
            ..Self::new(path, position)
        }
    }

    pub fn path(&self) -> &BezierPath {
        &self.path
    }

    pub fn position(&self) -> Vector2D {
        self.position
    }

    pub fn tessellation_options(&self) -> TessellationOptions {
        self.options
    }

    pub fn set_path(&mut self, path: BezierPath) {
        self.path = path;
        self.tessellation = None;
        self.collision_shape = None;
    }

    /// Moving keeps the local tessellation; only the placed collision shape is rebuilt.
    pub fn set_position(&mut self, position: Vector2D) {
        if self.position == position {
            return;
        }
        self.position = position;
        self.collision_shape = None;
    }

    pub fn set_tessellation_options(&mut self, options: TessellationOptions) {
        if self.options == options {
            return;
        }
        self.options = options;
        self.tessellation = None;
        self.collision_shape = None;
    }

    pub fn is_tessellation_cached(&self) -> bool {
        self.tessellation.is_some()
    }

    pub fn is_collision_shape_cached(&self) -> bool {
        self.collision_shape.is_some()
    }

    /// Outline points in local coordinates.
    pub fn tessellation(&mut self) -> &[Vector2D] {
        let (path, options) = (&self.path, &self.options);
        self.tessellation
            .get_or_insert_with(|| path.tessellate_with(options))
    }

    /// The outline path in the owner's coordinate space.
    pub fn world_path(&self) -> BezierPath {
        self.path
            .transform(&AffineTransform::translation(self.position.x, self.position.y))
    }

    pub fn bounding_box(&mut self) -> Option<Rect2D> {
        let position = self.position;
        Rect2D::bounding(self.tessellation().iter().map(|p| *p + position))
    }

    /// Polygon built from the outline; outlines too small for a polygon fall back to their
    /// bounding rectangle.
    pub fn collision_shape(&mut self) -> &CollisionShape {
        let shape = match self.collision_shape.take() {
            Some(shape) => shape,
            None => self.build_collision_shape(),
        };
        self.collision_shape.insert(shape)
    }

    fn build_collision_shape(&mut self) -> CollisionShape {
        let points = match self.path.as_strict_polygon() {
            Some(points) => points,
            None => self.tessellation().to_vec(),
        };
        let position = self.position;
        if let Some(shape) = CollisionShape::from_points(points.clone(), position) {
            return shape;
        }
        let bounds = Rect2D::bounding(points).unwrap_or_default();
        tracing::debug!(
            width = bounds.width(),
            height = bounds.height(),
            "outline falls back to its bounding rectangle"
        );
        CollisionShape::rectangle(bounds.center() + position, bounds.size)
    }

    pub fn collides_with(&mut self, other: &mut Outline) -> bool {
        let theirs = other.collision_shape().clone();
        self.collision_shape().collide(&theirs)
    }

    /// Where a connector coming from `from` meets this outline.
    pub fn touch_point(&mut self, from: Vector2D) -> Vector2D {
        self.collision_shape().touch_point(from)
    }
}
