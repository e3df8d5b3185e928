//! Error types for grid transformation.

use thiserror::Error;

/// Errors that can occur while transforming a gridded field.
///
/// All of these are contract violations by the caller. Missing or
/// degenerate per-cell values are never reported here; they are filled or
/// zeroed in place.
#[derive(Error, Debug)]
pub enum TransformError {
    /// Grid dimensions are zero or their product overflows.
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// A buffer does not hold one value per grid cell.
    #[error("{name} has {actual} values, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// Normalization range is empty or inverted.
    #[error("invalid value range: min {min} must be below max {max}")]
    InvalidRange { min: f32, max: f32 },

    /// Weather-type tag outside the supported set.
    #[error("unknown weather type: {0}")]
    UnknownWeatherType(String),
}

impl TransformError {
    /// Create a LengthMismatch error.
    pub fn length_mismatch(name: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            name: name.into(),
            expected,
            actual,
        }
    }
}

/// Result type for grid transformation.
pub type Result<T> = std::result::Result<T, TransformError>;

/// Check that `len` matches a `width` x `height` grid.
pub(crate) fn ensure_grid_len(name: &str, len: usize, width: usize, height: usize) -> Result<()> {
    let expected = width
        .checked_mul(height)
        .filter(|&cells| cells > 0)
        .ok_or(TransformError::InvalidDimensions { width, height })?;
    if len != expected {
        return Err(TransformError::length_mismatch(name, expected, len));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_grid_len() {
        assert!(ensure_grid_len("raster", 8, 4, 2).is_ok());
        assert!(matches!(
            ensure_grid_len("raster", 7, 4, 2),
            Err(TransformError::LengthMismatch { expected: 8, actual: 7, .. })
        ));
        assert!(matches!(
            ensure_grid_len("raster", 0, 0, 2),
            Err(TransformError::InvalidDimensions { width: 0, height: 2 })
        ));
    }

    #[test]
    fn test_ensure_grid_len_rejects_overflow() {
        assert!(matches!(
            ensure_grid_len("raster", 0, usize::MAX, 2),
            Err(TransformError::InvalidDimensions { .. })
        ));
    }
}
