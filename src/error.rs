use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Directions API error: {0}")]
    DirectionsApi(String),

    #[error("Static map API error: {0}")]
    StaticMapApi(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Export failed: {0}")]
    Export(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
