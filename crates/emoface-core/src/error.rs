//! Error types for the core crate.

use thiserror::Error;

/// Core errors.
#[derive(Debug, Error)]
pub enum FaceError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Invalid happiness state: {0}")]
    InvalidHappinessState(i64),
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type for core operations.
pub type FaceResult<T> = Result<T, FaceError>;

impl From<serde_json::Error> for FaceError {
    fn from(err: serde_json::Error) -> Self {
        FaceError::Config(err.to_string())
    }
}

impl From<std::io::Error> for FaceError {
    fn from(err: std::io::Error) -> Self {
        FaceError::Io(err.to_string())
    }
}
