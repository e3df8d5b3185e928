//! Test data generators for synthetic meteorological grids.
//!
//! All generators return row-major `Vec<f32>` with longitude varying
//! fastest, matching the layout of the feed payloads.

/// Creates a test grid with predictable values.
///
/// Each cell value is `col * 1000 + row`, so after any permutation of
/// columns the origin of every value can still be read back.
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50);
/// assert_eq!(grid[1], 1000.0); // col=1, row=0
/// assert_eq!(grid[10], 1.0);   // col=0, row=1
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f32);
        }
    }
    data
}

/// Creates a constant grid with NaN at the given `(col, row)` positions.
pub fn create_grid_with_nans(
    width: usize,
    height: usize,
    value: f32,
    nan_positions: &[(usize, usize)],
) -> Vec<f32> {
    let mut data = vec![value; width * height];
    for &(col, row) in nan_positions {
        if col < width && row < height {
            data[row * width + col] = f32::NAN;
        }
    }
    data
}

/// Creates a U-component (eastward) wind grid in m/s.
///
/// Varies with latitude between -20 and +20 m/s, loosely resembling
/// trade winds and westerlies.
pub fn create_u_wind_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for _col in 0..width {
            let lat_factor = (row as f32 / height as f32 - 0.5) * 2.0;
            data.push(lat_factor * 20.0);
        }
    }
    data
}

/// Creates a V-component (northward) wind grid in m/s.
///
/// Varies with longitude between -15 and +15 m/s.
pub fn create_v_wind_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for _row in 0..height {
        for col in 0..width {
            let lon_factor = (col as f32 / width as f32 - 0.5) * 2.0;
            data.push(lon_factor * 15.0);
        }
    }
    data
}

/// Creates a sea-surface temperature grid in °C.
///
/// Warm at the equator (~30°C), near freezing at the poles (~-1.5°C).
pub fn create_sst_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        let lat = 90.0 - 180.0 * row as f32 / (height.max(2) - 1) as f32;
        let temp = -1.5 + 31.5 * lat.to_radians().cos();
        for _col in 0..width {
            data.push(temp);
        }
    }
    data
}

/// Creates a mean-sea-level pressure grid in hPa.
///
/// A deterministic pattern of highs and lows between roughly 956 and
/// 1048 hPa, so some cells fall outside the 900-1040 normalization range.
pub fn create_pressure_grid(width: usize, height: usize, seed: u32) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let fx = col as f32 / width as f32 * std::f32::consts::TAU;
            let fy = row as f32 / height as f32 * std::f32::consts::PI;
            let noise = (simple_hash(col as u32, row as u32, seed) % 100) as f32 / 100.0;
            data.push(1002.0 + 40.0 * (fx * 3.0).sin() * fy.sin() + 12.0 * (noise - 0.5));
        }
    }
    data
}

/// Creates significant wave height (m), direction (°) and period (s) grids.
///
/// Heights stay between 0.5 and 6.5 m, directions sweep the full compass
/// across each row and periods sit between 4 and 14 s.
pub fn create_wave_grids(width: usize, height: usize) -> (Vec<f32>, Vec<f32>, Vec<f32>) {
    let len = width * height;
    let mut heights = Vec::with_capacity(len);
    let mut directions = Vec::with_capacity(len);
    let mut periods = Vec::with_capacity(len);

    for row in 0..height {
        for col in 0..width {
            let fy = row as f32 / height.max(1) as f32;
            heights.push(0.5 + 6.0 * (fy * std::f32::consts::PI).sin());
            directions.push(360.0 * col as f32 / width.max(1) as f32);
            periods.push(4.0 + 10.0 * fy);
        }
    }

    (heights, directions, periods)
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}
