//! Payload to layer file conversion.
//!
//! Encoding is CPU bound. The async entry points move the work onto the
//! blocking pool, and grid kinds are converted in parallel with rayon.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, bail, Context, Result};
use grid_transform::{FieldEncoder, TransformError, WeatherType};
use rayon::prelude::*;
use serde::Serialize;
use storm_track::{build_cyclone_visuals, CycloneRecord};
use tracing::{error, info};
use weather_common::GriddedField;

use crate::config::ConverterConfig;

/// Parse a `--kind` argument: `all`, one kind, or a comma-separated list.
pub fn parse_kinds(arg: &str) -> std::result::Result<Vec<WeatherType>, TransformError> {
    if arg.trim().eq_ignore_ascii_case("all") {
        return Ok(WeatherType::ALL.to_vec());
    }

    let mut kinds = Vec::new();
    for tag in arg.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let kind: WeatherType = tag.parse()?;
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }

    if kinds.is_empty() {
        return Err(TransformError::UnknownWeatherType(arg.to_string()));
    }
    Ok(kinds)
}

/// Convert one payload file into a layer file, returning the output path.
pub fn convert_grid_file(
    encoder: &FieldEncoder,
    kind: WeatherType,
    config: &ConverterConfig,
) -> Result<PathBuf> {
    let start = Instant::now();
    let input = config.payload_path(kind);

    let file = File::open(&input).with_context(|| format!("Failed to open {:?}", input))?;
    let field = GriddedField::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {:?}", input))?;

    let layer = encoder
        .encode(kind, &field)
        .with_context(|| format!("Failed to encode {} from {:?}", kind, input))?;

    let output = config.layer_path(kind);
    write_json(&output, &layer, config.pretty)?;

    info!(
        kind = %kind,
        width = field.width(),
        height = field.height(),
        output = %output.display(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Converted grid layer"
    );
    Ok(output)
}

/// Convert several kinds in parallel.
///
/// Every kind is attempted; failures are logged and reported together.
pub fn convert_grids(kinds: &[WeatherType], config: &ConverterConfig) -> Result<Vec<PathBuf>> {
    let encoder = FieldEncoder::new();

    let results: Vec<(WeatherType, Result<PathBuf>)> = kinds
        .par_iter()
        .map(|&kind| (kind, convert_grid_file(&encoder, kind, config)))
        .collect();

    let mut written = Vec::with_capacity(results.len());
    let mut failed = Vec::new();
    for (kind, result) in results {
        match result {
            Ok(path) => written.push(path),
            Err(e) => {
                let reason = format!("{:#}", e);
                error!(kind = %kind, error = %reason, "Grid conversion failed");
                failed.push(kind.as_str());
            }
        }
    }

    if !failed.is_empty() {
        bail!(
            "{} of {} conversions failed: {}",
            failed.len(),
            kinds.len(),
            failed.join(", ")
        );
    }
    Ok(written)
}

/// Convert the storm list into a visuals file, returning the output path
/// and the number of storms written.
pub fn convert_cyclone_file(config: &ConverterConfig) -> Result<(PathBuf, usize)> {
    let input = config.cyclone_path();
    let json = fs::read_to_string(&input).with_context(|| format!("Failed to read {:?}", input))?;
    let records = CycloneRecord::list_from_json(&json)
        .with_context(|| format!("Failed to parse {:?}", input))?;

    let visuals = build_cyclone_visuals(&records);

    let output = config.cyclone_layer_path();
    write_json(&output, &visuals, config.pretty)?;

    info!(
        storms = records.len(),
        active = visuals.len(),
        output = %output.display(),
        "Converted cyclone layer"
    );
    Ok((output, visuals.len()))
}

/// Run [`convert_grids`] on the blocking pool.
pub async fn run_grids(kinds: Vec<WeatherType>, config: ConverterConfig) -> Result<Vec<PathBuf>> {
    tokio::task::spawn_blocking(move || convert_grids(&kinds, &config))
        .await
        .map_err(|e| anyhow!("Grid conversion task failed: {}", e))?
}

/// Run [`convert_cyclone_file`] on the blocking pool.
pub async fn run_cyclones(config: ConverterConfig) -> Result<(PathBuf, usize)> {
    tokio::task::spawn_blocking(move || convert_cyclone_file(&config))
        .await
        .map_err(|e| anyhow!("Cyclone conversion task failed: {}", e))?
}

fn write_json<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
    let mut writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writer.flush()?;
    Ok(())
}
