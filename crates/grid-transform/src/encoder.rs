//! Per-kind field encoding and dispatch.
//!
//! ```text
//! encode(kind, field)
//!      │
//!      ├─► required arrays present? ──no──► zero-filled raster
//!      │
//!      ├─► reproject_longitude (each input array)
//!      │
//!      └─► kind pipeline
//!             wind / current ─► interleave u,v + magnitude
//!             wave ───────────► WaveSynthesizer
//!             sst ────────────► pass-through
//!             airpressure ────► pass-through + normalize_to_u8
//! ```

use std::time::Instant;

use tracing::{debug, warn};
use weather_common::{GriddedField, Variable};

use crate::error::Result;
use crate::normalize::normalize_to_u8;
use crate::projection::{reproject_longitude, OUTPUT_BOUNDS};
use crate::types::{FieldMetadata, Image, TransformedField, WeatherType};
use crate::wave::WaveSynthesizer;

/// Buffers produced by one kind pipeline.
struct Encoded {
    particle: Option<Image<f32>>,
    raster: Image<f32>,
    contour: Option<Image<u8>>,
}

/// Turns gridded snapshots into renderer-ready fields.
///
/// Holds the wave heading table so repeated calls share it. Encoding takes
/// `&self` and allocates fresh output buffers, so one encoder can serve
/// concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct FieldEncoder {
    wave: WaveSynthesizer,
}

impl FieldEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode `field` as `kind`.
    ///
    /// If any array the kind needs is absent, the result is still a valid
    /// TransformedField: a zero-filled raster and no particle or contour
    /// image.
    pub fn encode(&self, kind: WeatherType, field: &GriddedField) -> Result<TransformedField> {
        let start = Instant::now();
        let (width, height) = (field.width(), field.height());

        let encoded = match self.inputs(kind, field) {
            Some(inputs) => match kind {
                WeatherType::Wind | WeatherType::Current => {
                    encode_flow(inputs[0], inputs[1], width, height)?
                }
                WeatherType::Wave => {
                    self.encode_wave(inputs[0], inputs[1], inputs[2], width, height)?
                }
                WeatherType::Sst => encode_scalar(inputs[0], width, height)?,
                WeatherType::AirPressure => encode_pressure(inputs[0], width, height)?,
            },
            None => Encoded {
                particle: None,
                raster: Image::zeros(width, height),
                contour: None,
            },
        };

        debug!(
            kind = %kind,
            width,
            height,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Encoded field"
        );

        Ok(TransformedField {
            particle_image: encoded.particle,
            raster_image: encoded.raster,
            contour_image: encoded.contour,
            value_range: kind.value_range(),
            bounds: OUTPUT_BOUNDS,
            data_type: kind,
            metadata: FieldMetadata {
                time: field.time().clone(),
                variables: field.variables().clone(),
                width,
                height,
                data_type: kind,
            },
        })
    }

    /// Collect the kind's input arrays in `required_variables` order.
    fn inputs<'a>(&self, kind: WeatherType, field: &'a GriddedField) -> Option<Vec<&'a [f32]>> {
        let required = kind.required_variables();
        let missing: Vec<Variable> = required
            .iter()
            .copied()
            .filter(|v| !field.contains(*v))
            .collect();

        if !missing.is_empty() {
            warn!(
                kind = %kind,
                missing = ?missing,
                "Required arrays absent, emitting zero-filled raster"
            );
            return None;
        }

        required.iter().map(|v| field.get(*v)).collect()
    }

    fn encode_wave(
        &self,
        heights: &[f32],
        directions: &[f32],
        periods: &[f32],
        width: usize,
        height: usize,
    ) -> Result<Encoded> {
        let heights = reproject_longitude(heights, width, height)?;
        let directions = reproject_longitude(directions, width, height)?;
        let periods = reproject_longitude(periods, width, height)?;

        let waves = self
            .wave
            .synthesize(&heights, &directions, &periods, width, height)?;

        Ok(Encoded {
            particle: Some(Image::new(waves.vectors, width, height)),
            raster: Image::new(waves.magnitude, width, height),
            contour: None,
        })
    }
}

/// Interleave u/v components and compute per-cell speed.
fn encode_flow(u: &[f32], v: &[f32], width: usize, height: usize) -> Result<Encoded> {
    let u = reproject_longitude(u, width, height)?;
    let v = reproject_longitude(v, width, height)?;

    let mut interleaved = Vec::with_capacity(u.len() * 2);
    let mut magnitude = Vec::with_capacity(u.len());
    for (&u, &v) in u.iter().zip(&v) {
        interleaved.push(u);
        interleaved.push(v);
        magnitude.push((u * u + v * v).sqrt());
    }

    Ok(Encoded {
        particle: Some(Image::new(interleaved, width, height)),
        raster: Image::new(magnitude, width, height),
        contour: None,
    })
}

fn encode_scalar(values: &[f32], width: usize, height: usize) -> Result<Encoded> {
    Ok(Encoded {
        particle: None,
        raster: Image::new(reproject_longitude(values, width, height)?, width, height),
        contour: None,
    })
}

fn encode_pressure(values: &[f32], width: usize, height: usize) -> Result<Encoded> {
    let pressure = reproject_longitude(values, width, height)?;
    let range = WeatherType::AirPressure.value_range();
    let contour = normalize_to_u8(&pressure, width, height, range.min, range.max)?;

    Ok(Encoded {
        particle: None,
        raster: Image::new(pressure, width, height),
        contour: Some(Image::new(contour, width, height)),
    })
}

/// Encode `field` as `kind` with a fresh encoder.
pub fn encode(kind: WeatherType, field: &GriddedField) -> Result<TransformedField> {
    FieldEncoder::new().encode(kind, field)
}

/// Encode `field` for a string weather-type tag.
///
/// An unrecognised tag fails before any array is touched.
pub fn encode_tag(tag: &str, field: &GriddedField) -> Result<TransformedField> {
    let kind: WeatherType = tag.parse()?;
    encode(kind, field)
}
