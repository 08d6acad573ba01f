pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid collision shape data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Degenerate {kind}: expected at least 3 points, got {points}")]
    DegeneratePolygon { kind: &'static str, points: usize },

    #[error(transparent)]
    Geom(#[from] trellis_geom::Error),
}
