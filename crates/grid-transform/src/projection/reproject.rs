//! Longitude reprojection from the 0..360 convention to -180..180.
//!
//! Feed grids start at 0°E and run eastward. Renderers expect the western
//! edge at -180°, so every row is rotated by half its width: the 180°..360°
//! half moves to the front and the 0°..180° half to the back. Latitude rows
//! are untouched.

use crate::error::{ensure_grid_len, Result};

/// Reproject a 0..360 grid to -180..180 by swapping the halves of each row.
///
/// Returns a new buffer; `data` is not modified. The output is a pure
/// permutation of the input, and applying it twice restores the input.
///
/// `width` must be even. With an odd width the destination columns collide
/// and one column is lost; such grids are outside the input contract.
///
/// # Example
/// ```
/// use grid_transform::reproject_longitude;
///
/// let row = [1.0f32, 2.0, 3.0, 4.0];
/// assert_eq!(reproject_longitude(&row, 4, 1).unwrap(), vec![3.0, 4.0, 1.0, 2.0]);
/// ```
pub fn reproject_longitude<T: Copy + Default>(
    data: &[T],
    width: usize,
    height: usize,
) -> Result<Vec<T>> {
    ensure_grid_len("grid", data.len(), width, height)?;

    let half = width / 2;
    let mut output = vec![T::default(); data.len()];

    for (src_row, dst_row) in data.chunks_exact(width).zip(output.chunks_exact_mut(width)) {
        for (x, &value) in src_row.iter().enumerate() {
            let dst_x = if x < half { x + half } else { x - half };
            dst_row[dst_x] = value;
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;

    #[test]
    fn test_swaps_row_halves() {
        let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let out = reproject_longitude(&data, 4, 2).unwrap();
        assert_eq!(out, vec![3.0, 4.0, 1.0, 2.0, 7.0, 8.0, 5.0, 6.0]);
    }

    #[test]
    fn test_is_self_inverse() {
        let data = test_utils::create_test_grid(10, 3);
        let once = reproject_longitude(&data, 10, 3).unwrap();
        let twice = reproject_longitude(&once, 10, 3).unwrap();
        assert_ne!(once, data);
        assert_eq!(twice, data);
    }

    #[test]
    fn test_preserves_nan_cells() {
        let data = [f32::NAN, 1.0, 2.0, 3.0];
        let out = reproject_longitude(&data, 4, 1).unwrap();
        assert_eq!(out[1], 3.0);
        assert!(out[2].is_nan());
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let result = reproject_longitude(&[0.0f32; 7], 4, 2);
        assert!(matches!(
            result,
            Err(TransformError::LengthMismatch { expected: 8, actual: 7, .. })
        ));
    }

    #[test]
    fn test_rejects_zero_width() {
        let result = reproject_longitude::<f32>(&[], 0, 5);
        assert!(matches!(result, Err(TransformError::InvalidDimensions { .. })));
    }
}
