//! Error types for loading weather payloads.

use thiserror::Error;

/// Result type alias using WeatherError.
pub type WeatherResult<T> = Result<T, WeatherError>;

/// Errors raised while building a [`GriddedField`](crate::GriddedField).
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Variable '{variable}' has {actual} values, expected {expected}")]
    LengthMismatch {
        variable: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid JSON payload: {0}")]
    Json(String),

    #[error("Failed to read payload: {0}")]
    Io(String),
}

impl From<std::io::Error> for WeatherError {
    fn from(err: std::io::Error) -> Self {
        WeatherError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::Json(err.to_string())
    }
}
