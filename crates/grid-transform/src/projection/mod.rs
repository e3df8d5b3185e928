//! Projection utilities for feed grids.
//!
//! Feed grids are regular lat/lon grids in the 0..360 longitude convention.
//! Everything handed to renderers is in the -180..180 convention with the
//! global bounds `[-180, -90, 180, 90]`.

pub mod reproject;

pub use reproject::reproject_longitude;

use weather_common::BoundingBox;

/// Bounds of every reprojected grid.
pub const OUTPUT_BOUNDS: BoundingBox = BoundingBox::GLOBAL;
