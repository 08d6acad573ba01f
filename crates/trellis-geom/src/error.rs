pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid path data: {data:?}")]
    InvalidPathData { data: String },

    #[error("Invalid geometry config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Unsupported geometry operation: {feature}")]
    Unsupported { feature: String },
}
