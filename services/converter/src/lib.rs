//! Weather layer converter library.
//!
//! Reads raw feed payloads from disk, runs them through the grid and storm
//! transforms, and writes the renderer-ready results as JSON.

pub mod config;
pub mod convert;

pub use config::ConverterConfig;
pub use convert::{
    convert_cyclone_file, convert_grid_file, convert_grids, parse_kinds, run_cyclones, run_grids,
};
