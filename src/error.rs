use thiserror::Error;

pub type Result<T> = std::result::Result<T, MapError>;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("Invalid style: {0}")]
    InvalidStyle(String),

    #[error("No access token")]
    MissingToken,

    #[error("Expected public access token")]
    SecretToken,

    #[error("Invalid access token")]
    InvalidToken,

    #[error("Missing geometry for record {index}")]
    MissingGeometry { index: usize },

    #[error("Missing {field} for record {index}")]
    MissingCoordinate { index: usize, field: &'static str },

    #[error("Failed to serialize GeoJSON overlay")]
    Serialize(#[from] serde_json::Error),
}
