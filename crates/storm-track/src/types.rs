//! Cyclone records as published by the storm feed.
//!
//! Field names follow the feed (`cycloneName`, `datas`, `utcTime`, ...);
//! the Rust names describe what the fields hold.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use weather_common::WeatherResult;

/// Anything with a longitude and latitude in degrees.
pub trait GeoPoint {
    fn lon(&self) -> f64;
    fn lat(&self) -> f64;

    /// `[lon, lat]` pair as renderers expect it.
    fn coords(&self) -> [f64; 2] {
        [self.lon(), self.lat()]
    }
}

impl GeoPoint for [f64; 2] {
    fn lon(&self) -> f64 {
        self[0]
    }

    fn lat(&self) -> f64 {
        self[1]
    }
}

/// One observed storm position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackPoint {
    pub lon: f64,
    pub lat: f64,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub air_pressure: Option<f64>,
    #[serde(rename = "utcTime", alias = "time", default)]
    pub time: Option<String>,
}

/// One predicted storm position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub lon: f64,
    pub lat: f64,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub air_pressure: Option<f64>,
    /// Classification expected at this point.
    #[serde(rename = "cycloneForecastCategory", alias = "category", default)]
    pub category: Option<String>,
    #[serde(rename = "utcTime", alias = "time", default)]
    pub time: Option<String>,
}

impl GeoPoint for TrackPoint {
    fn lon(&self) -> f64 {
        self.lon
    }

    fn lat(&self) -> f64 {
        self.lat
    }
}

impl GeoPoint for ForecastPoint {
    fn lon(&self) -> f64 {
        self.lon
    }

    fn lat(&self) -> f64 {
        self.lat
    }
}

/// Forecast uncertainty cone, a GeoJSON polygon or multi-polygon.
///
/// Rings are lists of `[lon, lat]`; the first ring of each polygon is the
/// exterior, any further rings are holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConeGeometry {
    Polygon {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<[f64; 2]>>>,
    },
}

/// One storm with its observed track, forecast and uncertainty cone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycloneRecord {
    /// Unique storm identifier, e.g. `WP152025`.
    #[serde(rename = "cycloneName")]
    pub name: String,
    /// Classification code, e.g. `TY` or `TS`.
    #[serde(rename = "cycloneCategory", default)]
    pub category: String,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    /// Observed positions, oldest first.
    #[serde(default)]
    pub tracks: Vec<TrackPoint>,
    /// Predicted positions, earliest first.
    #[serde(rename = "datas", alias = "forecasts", default)]
    pub forecasts: Vec<ForecastPoint>,
    #[serde(rename = "errorCone", default)]
    pub error_cone: Option<ConeGeometry>,
}

impl CycloneRecord {
    /// Parse a single storm record.
    pub fn from_json(json: &str) -> WeatherResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a storm list.
    ///
    /// A well-formed document that is not an array yields an empty list
    /// with a warning; the feed has been seen to publish an error object in
    /// place of the list.
    pub fn list_from_json(json: &str) -> WeatherResult<Vec<Self>> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_array() {
            warn!("Cyclone payload is not a list, treating as empty");
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::cyclones::{CYCLONE_LIST_JSON, FORECAST_ONLY_JSON};

    #[test]
    fn test_parse_feed_names() {
        let records = CycloneRecord::list_from_json(CYCLONE_LIST_JSON).unwrap();
        assert_eq!(records.len(), 2);

        let typhoon = &records[0];
        assert_eq!(typhoon.name, "WP152025");
        assert_eq!(typhoon.category, "TY");
        assert!(typhoon.is_active);
        assert_eq!(typhoon.tracks.len(), 4);
        assert_eq!(typhoon.tracks[0].wind_speed, Some(35.0));
        assert_eq!(
            typhoon.tracks[3].time.as_deref(),
            Some("2025-08-30T18:00:00Z")
        );
        assert_eq!(typhoon.forecasts[1].category.as_deref(), Some("STY"));
        assert!(matches!(
            typhoon.error_cone,
            Some(ConeGeometry::MultiPolygon { ref coordinates }) if coordinates.len() == 2
        ));

        assert!(!records[1].is_active);
        assert!(records[1].error_cone.is_none());
    }

    #[test]
    fn test_parse_polygon_cone() {
        let record = CycloneRecord::from_json(FORECAST_ONLY_JSON).unwrap();
        assert!(record.tracks.is_empty());
        match record.error_cone {
            Some(ConeGeometry::Polygon { coordinates }) => assert_eq!(coordinates.len(), 2),
            other => panic!("expected Polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_optional_fields() {
        let record = CycloneRecord::from_json(
            r#"{"cycloneName": "X", "tracks": [{"lon": 1.0, "lat": 2.0, "windSpeed": null}]}"#,
        )
        .unwrap();
        assert_eq!(record.category, "");
        assert!(!record.is_active);
        assert!(record.forecasts.is_empty());
        assert_eq!(record.tracks[0].wind_speed, None);
        assert_eq!(record.tracks[0].time, None);
    }

    #[test]
    fn test_non_list_payload_is_empty() {
        let records = CycloneRecord::list_from_json(r#"{"error": "upstream timeout"}"#).unwrap();
        assert!(records.is_empty());
        assert!(CycloneRecord::list_from_json("[{").is_err());
    }

    #[test]
    fn test_geo_point_coords() {
        let point = TrackPoint {
            lon: -178.0,
            lat: 12.0,
            wind_speed: None,
            air_pressure: None,
            time: None,
        };
        assert_eq!(point.coords(), [-178.0, 12.0]);
        assert_eq!([5.0f64, 6.0].lat(), 6.0);
    }
}
