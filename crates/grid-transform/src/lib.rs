//! Gridded Weather Field Transformation
//!
//! Turns raw global snapshots (wind, ocean current, wave, sea-surface
//! temperature, sea-level pressure) into buffers a map renderer can upload
//! directly:
//!
//! - **Reprojection**: 0..360 feed grids become -180..180 grids
//! - **Normalization**: scalar fields become gap-filled 0-255 bytes
//! - **Encoding**: per-kind particle, raster and contour images
//!
//! # Architecture
//!
//! ```text
//! GriddedField ──► encode(kind) ──► reproject_longitude
//!                                        │
//!                      ┌─────────────────┼──────────────────┐
//!                      ▼                 ▼                  ▼
//!               flow (u,v)       WaveSynthesizer      normalize_to_u8
//!                      └─────────────────┼──────────────────┘
//!                                        ▼
//!                                 TransformedField
//! ```
//!
//! Every function is synchronous and pure: inputs are borrowed, outputs
//! are freshly allocated. Callers wanting to keep a UI thread responsive
//! run encoding on a worker thread; nothing here needs to change for that.
//!
//! # Example
//!
//! ```
//! use grid_transform::{encode, WeatherType};
//! use weather_common::{GriddedField, Variable};
//!
//! let field = GriddedField::new(4, 1)?
//!     .with_variable(Variable::WindU, vec![3.0, 0.0, 1.0, 2.0])?
//!     .with_variable(Variable::WindV, vec![4.0, 0.0, 1.0, 2.0])?;
//!
//! let out = encode(WeatherType::Wind, &field)?;
//! assert_eq!(out.raster_image.data.len(), 4);
//! assert_eq!(out.particle_image.unwrap().data.len(), 8);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod encoder;
pub mod error;
pub mod normalize;
pub mod projection;
pub mod types;
pub mod wave;

// Re-export commonly used types at crate root
pub use encoder::{encode, encode_tag, FieldEncoder};
pub use error::{Result, TransformError};
pub use normalize::{normalize_to_u8, FILL_MIDPOINT};
pub use projection::{reproject_longitude, OUTPUT_BOUNDS};
pub use types::{FieldMetadata, Image, TransformedField, ValueRange, WeatherType};
pub use wave::{WaveSynthesizer, WaveVectors, WAVE_SPEED_SCALE};
