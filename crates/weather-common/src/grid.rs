//! Gridded meteorological snapshots.
//!
//! A snapshot is a regular global lat/lon grid stored row-major with
//! longitude varying fastest, starting at 0°E. Each physical quantity is a
//! separate named array of exactly `width * height` values.

use std::collections::HashMap;
use std::io::Read;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{WeatherError, WeatherResult};

/// Named scalar arrays a payload may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    WindU,
    WindV,
    CurrentU,
    CurrentV,
    WaveHeight,
    WaveDirection,
    WavePeriod,
    SeaSurfaceTemperature,
    PressureMsl,
}

impl Variable {
    pub const ALL: [Variable; 9] = [
        Variable::WindU,
        Variable::WindV,
        Variable::CurrentU,
        Variable::CurrentV,
        Variable::WaveHeight,
        Variable::WaveDirection,
        Variable::WavePeriod,
        Variable::SeaSurfaceTemperature,
        Variable::PressureMsl,
    ];

    /// Key used for this variable in the `data` object of a payload.
    pub fn key(&self) -> &'static str {
        match self {
            Variable::WindU => "wind_u",
            Variable::WindV => "wind_v",
            Variable::CurrentU => "current_u",
            Variable::CurrentV => "current_v",
            Variable::WaveHeight => "significant_wave_height",
            Variable::WaveDirection => "significant_wave_direction",
            Variable::WavePeriod => "significant_wave_period",
            Variable::SeaSurfaceTemperature => "temperature_sea_surface",
            Variable::PressureMsl => "pressure_msl",
        }
    }

    /// Resolve a payload key, including the misspelled wave keys the
    /// upstream feed publishes.
    pub fn from_key(key: &str) -> Option<Self> {
        let variable = match key {
            "wind_u" => Variable::WindU,
            "wind_v" => Variable::WindV,
            "current_u" => Variable::CurrentU,
            "current_v" => Variable::CurrentV,
            "significant_wave_height" | "siginificant_wave_height" => Variable::WaveHeight,
            "significant_wave_direction" | "siginificant_wave_direction" => {
                Variable::WaveDirection
            }
            "significant_wave_period" | "siginificant_wave_period" => Variable::WavePeriod,
            "temperature_sea_surface" => Variable::SeaSurfaceTemperature,
            "pressure_msl" => Variable::PressureMsl,
            _ => return None,
        };
        Some(variable)
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One meteorological snapshot with validated array lengths.
///
/// Every array stored here holds exactly `width * height` values; index
/// `y * width + x` addresses longitude bin `x`, latitude bin `y`.
#[derive(Debug, Clone)]
pub struct GriddedField {
    width: usize,
    height: usize,
    cells: usize,
    time: Value,
    variables: Value,
    arrays: HashMap<Variable, Vec<f32>>,
}

impl GriddedField {
    /// Create an empty snapshot of the given dimensions.
    ///
    /// Rejects zero-sized grids and grids whose cell count overflows `usize`.
    pub fn new(width: usize, height: usize) -> WeatherResult<Self> {
        let cells = width
            .checked_mul(height)
            .filter(|&cells| cells > 0)
            .ok_or(WeatherError::InvalidDimensions { width, height })?;

        Ok(Self {
            width,
            height,
            cells,
            time: Value::Null,
            variables: Value::Null,
            arrays: HashMap::new(),
        })
    }

    /// Set the opaque time metadata.
    pub fn with_time(mut self, time: Value) -> Self {
        self.time = time;
        self
    }

    /// Set the opaque variable-description metadata.
    pub fn with_variables(mut self, variables: Value) -> Self {
        self.variables = variables;
        self
    }

    /// Add a named array, rejecting it if its length does not match the grid.
    pub fn with_variable(mut self, variable: Variable, data: Vec<f32>) -> WeatherResult<Self> {
        self.insert(variable, data)?;
        Ok(self)
    }

    /// Insert or replace a named array.
    pub fn insert(&mut self, variable: Variable, data: Vec<f32>) -> WeatherResult<()> {
        let expected = self.len();
        if data.len() != expected {
            return Err(WeatherError::LengthMismatch {
                variable: variable.key().to_string(),
                expected,
                actual: data.len(),
            });
        }
        self.arrays.insert(variable, data);
        Ok(())
    }

    /// Get a named array if the payload carried it.
    pub fn get(&self, variable: Variable) -> Option<&[f32]> {
        self.arrays.get(&variable).map(Vec::as_slice)
    }

    /// Check whether a named array is present.
    pub fn contains(&self, variable: Variable) -> bool {
        self.arrays.contains_key(&variable)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn time(&self) -> &Value {
        &self.time
    }

    pub fn variables(&self) -> &Value {
        &self.variables
    }

    /// Number of cells in the grid.
    pub fn len(&self) -> usize {
        self.cells
    }

    /// Always false for a constructed field; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse a raw JSON payload.
    pub fn from_json(json: &str) -> WeatherResult<Self> {
        let raw: RawGriddedField = serde_json::from_str(json)?;
        raw.try_into()
    }

    /// Parse a raw JSON payload from a reader.
    pub fn from_reader<R: Read>(reader: R) -> WeatherResult<Self> {
        let raw: RawGriddedField = serde_json::from_reader(reader)?;
        raw.try_into()
    }
}

/// The payload shape published by the upstream data feed.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGriddedField {
    pub meta: RawMeta,
    #[serde(default)]
    pub data: HashMap<String, Vec<Option<f32>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMeta {
    pub coordinate: RawCoordinate,
    #[serde(default)]
    pub time: Value,
    #[serde(default)]
    pub variables: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCoordinate {
    pub lon: RawAxis,
    pub lat: RawAxis,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawAxis {
    pub size: usize,
}

impl TryFrom<RawGriddedField> for GriddedField {
    type Error = WeatherError;

    fn try_from(raw: RawGriddedField) -> WeatherResult<Self> {
        let RawMeta {
            coordinate,
            time,
            variables,
        } = raw.meta;

        let mut field = GriddedField::new(coordinate.lon.size, coordinate.lat.size)?
            .with_time(time)
            .with_variables(variables);

        // Both spellings of a wave key may be present; the correct one wins.
        let mut resolved: HashMap<Variable, (String, Vec<Option<f32>>)> = HashMap::new();
        for (key, values) in raw.data {
            let Some(variable) = Variable::from_key(&key) else {
                warn!(key = %key, "Ignoring unrecognised payload variable");
                continue;
            };
            if let Some((kept, _)) = resolved.get(&variable) {
                let keep_existing = kept == variable.key();
                let ignored = if keep_existing { key.clone() } else { kept.clone() };
                warn!(variable = %variable, ignored = %ignored, "Duplicate payload variable");
                if keep_existing {
                    continue;
                }
            }
            resolved.insert(variable, (key, values));
        }

        for variable in Variable::ALL {
            let Some((_, values)) = resolved.remove(&variable) else {
                continue;
            };
            // Nulls are missing cells; NaN is what the per-cell policies treat as missing.
            let data = values.into_iter().map(|v| v.unwrap_or(f32::NAN)).collect();
            field.insert(variable, data)?;
        }

        Ok(field)
    }
}
