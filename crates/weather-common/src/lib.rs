//! Common types shared by the weather-layers crates.
//!
//! Holds the vocabulary both sides of the transformation pipeline agree on:
//! the geographic bounding box, the gridded input payload and the error
//! type raised while loading it.

pub mod bbox;
pub mod error;
pub mod grid;

pub use bbox::BoundingBox;
pub use error::{WeatherError, WeatherResult};
pub use grid::{GriddedField, RawGriddedField, Variable};
