//! Core types for grid transformation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use weather_common::{BoundingBox, Variable};

use crate::error::TransformError;

/// The physical quantity a TransformedField encodes.
///
/// Selects the encoder pipeline; the tag is never inferred from which
/// arrays a payload happens to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherType {
    Wind,
    Current,
    Wave,
    Sst,
    AirPressure,
}

impl WeatherType {
    pub const ALL: [WeatherType; 5] = [
        WeatherType::Wind,
        WeatherType::Current,
        WeatherType::Wave,
        WeatherType::Sst,
        WeatherType::AirPressure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wind => "wind",
            Self::Current => "current",
            Self::Wave => "wave",
            Self::Sst => "sst",
            Self::AirPressure => "airpressure",
        }
    }

    /// Fixed physical range declared for this kind.
    pub fn value_range(&self) -> ValueRange {
        match self {
            Self::Wind => ValueRange::new(0.0, 30.0),
            Self::Current => ValueRange::new(0.0, 3.0),
            Self::Wave => ValueRange::new(0.0, 10.0),
            Self::Sst => ValueRange::new(-2.0, 35.0),
            Self::AirPressure => ValueRange::new(900.0, 1040.0),
        }
    }

    /// Arrays the encoder for this kind reads.
    pub fn required_variables(&self) -> &'static [Variable] {
        match self {
            Self::Wind => &[Variable::WindU, Variable::WindV],
            Self::Current => &[Variable::CurrentU, Variable::CurrentV],
            Self::Wave => &[
                Variable::WaveHeight,
                Variable::WaveDirection,
                Variable::WavePeriod,
            ],
            Self::Sst => &[Variable::SeaSurfaceTemperature],
            Self::AirPressure => &[Variable::PressureMsl],
        }
    }

    /// Whether this kind produces an interleaved particle image.
    pub fn is_flow(&self) -> bool {
        matches!(self, Self::Wind | Self::Current | Self::Wave)
    }
}

impl FromStr for WeatherType {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wind" => Ok(Self::Wind),
            "current" => Ok(Self::Current),
            "wave" => Ok(Self::Wave),
            "sst" => Ok(Self::Sst),
            "airpressure" => Ok(Self::AirPressure),
            other => Err(TransformError::UnknownWeatherType(other.to_string())),
        }
    }
}

impl std::fmt::Display for WeatherType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Physical range used for normalization and color scales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

/// A flat buffer with the grid dimensions it belongs to.
///
/// Particle images hold two values per cell, so their `data` is
/// `2 * width * height` long.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image<T> {
    pub data: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T> Image<T> {
    pub fn new(data: Vec<T>, width: usize, height: usize) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// Number of grid cells covered, regardless of values per cell.
    pub fn cells(&self) -> usize {
        self.width * self.height
    }
}

impl Image<f32> {
    /// A zero-filled scalar image.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::new(vec![0.0; width * height], width, height)
    }
}

/// Pass-through metadata from the source snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetadata {
    pub time: Value,
    pub variables: Value,
    pub width: usize,
    pub height: usize,
    pub data_type: WeatherType,
}

/// Renderer-ready product of one snapshot for one weather kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformedField {
    /// Interleaved `[u0, v0, u1, v1, ...]` for flow kinds.
    pub particle_image: Option<Image<f32>>,
    /// Magnitude for flow kinds, physical value for scalar kinds.
    pub raster_image: Image<f32>,
    /// Gap-filled 0-255 encoding of the raster, air pressure only.
    pub contour_image: Option<Image<u8>>,
    pub value_range: ValueRange,
    pub bounds: BoundingBox,
    pub data_type: WeatherType,
    pub metadata: FieldMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_type_from_str() {
        for kind in WeatherType::ALL {
            assert_eq!(kind.as_str().parse::<WeatherType>().unwrap(), kind);
        }

        assert!(matches!(
            "humidity".parse::<WeatherType>(),
            Err(TransformError::UnknownWeatherType(tag)) if tag == "humidity"
        ));
        // Tags are exact; no case folding.
        assert!("Wind".parse::<WeatherType>().is_err());
    }

    #[test]
    fn test_weather_type_serde_matches_tag() {
        let json = serde_json::to_string(&WeatherType::AirPressure).unwrap();
        assert_eq!(json, "\"airpressure\"");
    }

    #[test]
    fn test_value_ranges() {
        assert_eq!(WeatherType::Wind.value_range(), ValueRange::new(0.0, 30.0));
        assert_eq!(WeatherType::Current.value_range(), ValueRange::new(0.0, 3.0));
        assert_eq!(WeatherType::Wave.value_range(), ValueRange::new(0.0, 10.0));
        assert_eq!(WeatherType::Sst.value_range(), ValueRange::new(-2.0, 35.0));
        assert_eq!(
            WeatherType::AirPressure.value_range(),
            ValueRange::new(900.0, 1040.0)
        );
    }

    #[test]
    fn test_flow_kinds() {
        assert!(WeatherType::Wind.is_flow());
        assert!(WeatherType::Wave.is_flow());
        assert!(!WeatherType::Sst.is_flow());
        assert!(!WeatherType::AirPressure.is_flow());
    }
}
