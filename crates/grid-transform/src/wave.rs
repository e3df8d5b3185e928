//! Wave energy synthesis.
//!
//! Wave payloads carry independent height, direction and period scalars.
//! Particle renderers need a flow vector, so one is synthesized per cell:
//! the heading is the propagation direction and the speed grows with the
//! square root of height times period.

use tracing::debug;

use crate::error::{ensure_grid_len, Result};

/// Visual scale applied to `sqrt(height * period)`.
///
/// Tuned for particle speed on screen; it has no physical unit. Changing it
/// changes rendered output.
pub const WAVE_SPEED_SCALE: f32 = 0.5;

#[derive(Debug, Clone, Copy, Default)]
struct SinCos {
    sin: f32,
    cos: f32,
}

/// Synthesized vectors plus the wave height raster.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveVectors {
    /// Interleaved `[u0, v0, u1, v1, ...]`, `2 * width * height` long.
    pub vectors: Vec<f32>,
    /// Significant wave height per cell; zero where the cell is invalid.
    pub magnitude: Vec<f32>,
}

/// Builds wave flow vectors using a precomputed heading table.
///
/// The table holds the sine and cosine of the going-to heading for every
/// whole compass degree `0..=360`.
#[derive(Debug, Clone)]
pub struct WaveSynthesizer {
    table: [SinCos; 361],
}

impl Default for WaveSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveSynthesizer {
    pub fn new() -> Self {
        let table = std::array::from_fn(|degree| {
            // Feed directions are "coming from"; +180 turns them into "going to".
            let radians = (((degree + 180) % 360) as f64).to_radians();
            SinCos {
                sin: radians.sin() as f32,
                cos: radians.cos() as f32,
            }
        });
        Self { table }
    }

    /// Heading components for a direction in degrees, `0 <= direction <= 360`.
    fn heading(&self, direction: f32) -> SinCos {
        self.table[direction.round() as usize % self.table.len()]
    }

    /// Synthesize flow vectors from wave height (m), direction (° coming
    /// from) and period (s).
    ///
    /// A cell is valid only if `height > 0`, `0 <= direction <= 360` and
    /// `period > 0`. Invalid cells get an explicit zero vector and zero
    /// magnitude. Valid cells get
    /// `speed = sqrt(height * period) * WAVE_SPEED_SCALE` along the
    /// propagation heading, and their raw height as magnitude.
    pub fn synthesize(
        &self,
        heights: &[f32],
        directions: &[f32],
        periods: &[f32],
        width: usize,
        height: usize,
    ) -> Result<WaveVectors> {
        ensure_grid_len("wave height", heights.len(), width, height)?;
        ensure_grid_len("wave direction", directions.len(), width, height)?;
        ensure_grid_len("wave period", periods.len(), width, height)?;

        let cells = heights.len();
        let mut vectors = vec![0.0f32; cells * 2];
        let mut magnitude = vec![0.0f32; cells];
        let mut valid = 0usize;

        for (i, ((&h, &d), &p)) in heights.iter().zip(directions).zip(periods).enumerate() {
            if !(h > 0.0 && (0.0..=360.0).contains(&d) && p > 0.0) {
                continue;
            }

            let heading = self.heading(d);
            let speed = (h * p).sqrt() * WAVE_SPEED_SCALE;

            vectors[i * 2] = speed * heading.sin;
            vectors[i * 2 + 1] = speed * heading.cos;
            magnitude[i] = h;
            valid += 1;
        }

        debug!(width, height, valid, "Synthesized wave vectors");
        Ok(WaveVectors { vectors, magnitude })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{assert_approx_eq, assert_vector_approx_eq};

    #[test]
    fn test_heading_table_rotates_by_half_turn() {
        let synth = WaveSynthesizer::new();

        // From the north -> heading south.
        let south = synth.heading(0.0);
        assert_approx_eq!(south.sin, 0.0, 1e-6);
        assert_approx_eq!(south.cos, -1.0, 1e-6);

        // From the east -> heading west.
        let west = synth.heading(90.0);
        assert_approx_eq!(west.sin, -1.0, 1e-6);
        assert_approx_eq!(west.cos, 0.0, 1e-6);

        // 360 is the same bearing as 0.
        let also_south = synth.heading(360.0);
        assert_approx_eq!(also_south.cos, -1.0, 1e-6);
    }

    #[test]
    fn test_valid_cell_vector() {
        let synth = WaveSynthesizer::new();
        // speed = sqrt(4 * 4) * 0.5 = 2, heading north (from 180).
        let out = synth.synthesize(&[4.0], &[180.0], &[4.0], 1, 1).unwrap();
        assert_vector_approx_eq!(out.vectors, 0, (0.0, 2.0), 1e-5);
        assert_eq!(out.magnitude, vec![4.0]);
    }

    #[test]
    fn test_direction_rounds_to_whole_degree() {
        let synth = WaveSynthesizer::new();
        let exact = synth.synthesize(&[1.0], &[270.0], &[1.0], 1, 1).unwrap();
        let near = synth.synthesize(&[1.0], &[269.6], &[1.0], 1, 1).unwrap();
        assert_eq!(exact.vectors, near.vectors);
        // From the west -> heading east.
        assert_vector_approx_eq!(exact.vectors, 0, (0.5, 0.0), 1e-5);
    }

    #[test]
    fn test_zero_height_is_zero_vector() {
        let synth = WaveSynthesizer::new();
        let out = synth
            .synthesize(&[0.0, 0.0], &[45.0, 200.0], &[10.0, 8.0], 2, 1)
            .unwrap();
        assert_eq!(out.vectors, vec![0.0; 4]);
        assert_eq!(out.magnitude, vec![0.0; 2]);
    }

    #[test]
    fn test_invalid_direction_or_period() {
        let synth = WaveSynthesizer::new();
        let heights = [2.0, 2.0, 2.0, 2.0];
        let directions = [-1.0, 361.0, f32::NAN, 90.0];
        let periods = [5.0, 5.0, 5.0, 0.0];
        let out = synth
            .synthesize(&heights, &directions, &periods, 4, 1)
            .unwrap();
        assert!(out.vectors.iter().all(|&v| v == 0.0));
        assert!(out.magnitude.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_rejects_mismatched_inputs() {
        let synth = WaveSynthesizer::new();
        assert!(synth.synthesize(&[1.0, 1.0], &[0.0], &[1.0, 1.0], 2, 1).is_err());
    }
}
