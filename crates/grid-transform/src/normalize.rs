//! Fixed-point normalization with gap filling.
//!
//! Scalar fields are mapped into `0..=255` against a declared physical
//! range. Cells that are missing, non-finite or outside the range are then
//! filled with the mean of their valid neighbours so contour tracing sees
//! no holes.

use tracing::debug;

use crate::error::{ensure_grid_len, Result, TransformError};

/// Value given to a missing cell with no valid neighbour.
pub const FILL_MIDPOINT: u8 = 128;

/// Normalize a scalar grid into bytes, filling invalid cells.
///
/// 1. Each cell holding a finite value within `[min, max]` becomes
///    `floor((value - min) / (max - min) * 255)`. Every other cell is invalid.
/// 2. Each invalid cell becomes the floor of the mean of its valid
///    neighbours among the surrounding eight. Longitude wraps, so column 0
///    neighbours column `width - 1`; latitude does not wrap at the poles.
///    Neighbours are read from the step 1 result, never from cells filled
///    earlier in this step, so the output does not depend on visit order.
///    A cell with no valid neighbour gets [`FILL_MIDPOINT`].
///
/// `max <= min` is rejected.
pub fn normalize_to_u8(
    data: &[f32],
    width: usize,
    height: usize,
    min: f32,
    max: f32,
) -> Result<Vec<u8>> {
    ensure_grid_len("normalization input", data.len(), width, height)?;
    // Also catches NaN bounds.
    if !(max > min) {
        return Err(TransformError::InvalidRange { min, max });
    }

    let (scaled, valid) = scale(data, min, max);
    let mut output = scaled.clone();
    let mut filled = 0usize;

    for (i, out) in output.iter_mut().enumerate() {
        if valid[i] {
            continue;
        }
        *out = neighbour_mean(&scaled, &valid, i % width, i / width, width, height)
            .unwrap_or(FILL_MIDPOINT);
        filled += 1;
    }

    debug!(width, height, min, max, filled, "Normalized grid to u8");
    Ok(output)
}

/// Step 1: linear scale plus validity mask.
fn scale(data: &[f32], min: f32, max: f32) -> (Vec<u8>, Vec<bool>) {
    let min = min as f64;
    let max = max as f64;
    let range = max - min;

    let mut scaled = vec![FILL_MIDPOINT; data.len()];
    let mut valid = vec![false; data.len()];

    for (i, &value) in data.iter().enumerate() {
        let value = value as f64;
        if value.is_finite() && value >= min && value <= max {
            scaled[i] = ((value - min) / range * 255.0).floor().min(255.0) as u8;
            valid[i] = true;
        }
    }

    (scaled, valid)
}

/// Mean of the valid neighbours of `(x, y)`, or `None` if there are none.
fn neighbour_mean(
    scaled: &[u8],
    valid: &[bool],
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> Option<u8> {
    let west = (x + width - 1) % width;
    let east = (x + 1) % width;

    // Narrow grids wrap onto themselves; count each distinct column once.
    let mut columns = [Some(west), Some(x), Some(east)];
    if west == x {
        columns = [None, Some(x), None];
    } else if east == west {
        columns[2] = None;
    }

    let rows = y.saturating_sub(1)..=(y + 1).min(height - 1);

    let mut sum = 0u32;
    let mut count = 0u32;
    for ny in rows {
        for &nx in columns.iter().flatten() {
            if nx == x && ny == y {
                continue;
            }
            let ni = ny * width + nx;
            if valid[ni] {
                sum += scaled[ni] as u32;
                count += 1;
            }
        }
    }

    (count > 0).then(|| (sum / count) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale_endpoints() {
        let out = normalize_to_u8(&[0.0, 100.0, 50.0, 70.0], 4, 1, 0.0, 100.0).unwrap();
        assert_eq!(out, vec![0, 255, 127, 178]);
    }

    #[test]
    fn test_fill_from_direct_neighbours() {
        // 50 -> 127, 70 -> 178; the gap takes floor((127 + 178) / 2).
        let out = normalize_to_u8(&[50.0, f32::NAN, 70.0], 3, 1, 0.0, 100.0).unwrap();
        assert_eq!(out, vec![127, 152, 178]);
    }

    #[test]
    fn test_fill_wraps_longitude() {
        // Column 0 is missing; its west neighbour is column 3.
        let data = [f32::NAN, 100.0, f32::NAN, 0.0];
        let out = normalize_to_u8(&data, 4, 1, 0.0, 100.0).unwrap();
        assert_eq!(out[0], 127);
        assert_eq!(out[2], 127);
    }

    #[test]
    fn test_fill_does_not_wrap_latitude() {
        // Top row missing at x=1; only the row below contributes.
        let data = [
            10.0, f32::NAN, 10.0, //
            20.0, 20.0, 20.0, //
            90.0, 90.0, 90.0, //
        ];
        let out = normalize_to_u8(&data, 3, 3, 0.0, 100.0).unwrap();
        let ten = (0.1f64 * 255.0).floor() as u32; // 25
        let twenty = (0.2f64 * 255.0).floor() as u32; // 51
        assert_eq!(out[1] as u32, (2 * ten + 3 * twenty) / 5);
    }

    #[test]
    fn test_fill_reads_pre_fill_state() {
        // Two adjacent gaps must not see each other's filled values.
        let data = [100.0, f32::NAN, f32::NAN, 0.0];
        let out = normalize_to_u8(&data, 4, 1, 0.0, 100.0).unwrap();
        assert_eq!(out[1], 255);
        // Sequential filling would have given floor((255 + 0) / 2) here.
        assert_eq!(out[2], 0);
    }

    #[test]
    fn test_isolated_gap_gets_midpoint() {
        let data = [f32::NAN; 6];
        let out = normalize_to_u8(&data, 3, 2, 0.0, 100.0).unwrap();
        assert!(out.iter().all(|&v| v == FILL_MIDPOINT));
    }

    #[test]
    fn test_out_of_range_is_invalid() {
        // 1050 hPa is above the range and gets filled from 1040 -> 255.
        let out = normalize_to_u8(&[1040.0, 1050.0, 1040.0, 1040.0], 4, 1, 900.0, 1040.0)
            .unwrap();
        assert_eq!(out, vec![255; 4]);
    }

    #[test]
    fn test_rejects_empty_range() {
        assert!(matches!(
            normalize_to_u8(&[1.0], 1, 1, 5.0, 5.0),
            Err(TransformError::InvalidRange { .. })
        ));
        assert!(matches!(
            normalize_to_u8(&[1.0], 1, 1, 10.0, 0.0),
            Err(TransformError::InvalidRange { .. })
        ));
        assert!(normalize_to_u8(&[1.0], 1, 1, f32::NAN, 1.0).is_err());
    }

    #[test]
    fn test_narrow_grid_counts_columns_once() {
        // Width 2: west and east of x=0 are both column 1.
        let data = [f32::NAN, 100.0];
        let out = normalize_to_u8(&data, 2, 1, 0.0, 100.0).unwrap();
        assert_eq!(out, vec![255, 255]);

        // Width 1: a lone column has no horizontal neighbours.
        let data = [50.0, f32::NAN];
        let out = normalize_to_u8(&data, 1, 2, 0.0, 100.0).unwrap();
        assert_eq!(out, vec![127, 127]);
    }
}
