//! Common test fixtures for weather-layers tests.
//!
//! Payload builders produce JSON in the exact shape the upstream feed
//! publishes, so tests exercise the same parsing path as production.

use serde_json::{json, Map, Value};

/// Common grid dimensions for testing.
pub mod grid {
    /// Global 0.5° feed grid.
    pub const FEED_WIDTH: usize = 720;
    pub const FEED_HEIGHT: usize = 361;

    /// Smallest grid with an even width and more than one row.
    pub const TINY_WIDTH: usize = 4;
    pub const TINY_HEIGHT: usize = 2;
}

/// Common time values for testing.
pub mod time {
    /// A fixed reference time for tests.
    pub const REFERENCE_TIME: &str = "2025-09-01T00:00:00Z";
}

/// Builds a gridded payload with the given named arrays.
///
/// NaN values are emitted as JSON `null`, the way the feed marks missing
/// cells.
pub fn gridded_payload(width: usize, height: usize, arrays: &[(&str, &[f32])]) -> Value {
    let mut data = Map::new();
    for (key, values) in arrays {
        let values: Vec<Value> = values
            .iter()
            .map(|v| if v.is_nan() { Value::Null } else { json!(v) })
            .collect();
        data.insert((*key).to_string(), Value::Array(values));
    }

    json!({
        "meta": {
            "coordinate": {
                "lon": { "size": width },
                "lat": { "size": height }
            },
            "time": time::REFERENCE_TIME,
            "variables": arrays.iter().map(|(k, _)| *k).collect::<Vec<_>>()
        },
        "data": data
    })
}

/// Same as [`gridded_payload`] rendered to a string.
pub fn gridded_payload_json(width: usize, height: usize, arrays: &[(&str, &[f32])]) -> String {
    gridded_payload(width, height, arrays).to_string()
}

/// Cyclone feed fixtures.
pub mod cyclones {
    /// Two storms: an active typhoon whose track and forecast cross the
    /// antimeridian, and an inactive storm that must be filtered out.
    pub const CYCLONE_LIST_JSON: &str = r#"[
        {
            "cycloneName": "WP152025",
            "cycloneCategory": "TY",
            "isActive": true,
            "startDate": "2025-08-28T00:00:00Z",
            "tracks": [
                {"lon": 170.0, "lat": 10.0, "windSpeed": 35.0, "airPressure": 985.0, "utcTime": "2025-08-30T00:00:00Z"},
                {"lon": 175.0, "lat": 11.0, "windSpeed": 40.0, "airPressure": 975.0, "utcTime": "2025-08-30T06:00:00Z"},
                {"lon": -178.0, "lat": 12.0, "windSpeed": 45.0, "airPressure": 965.0, "utcTime": "2025-08-30T12:00:00Z"},
                {"lon": -170.0, "lat": 13.0, "windSpeed": 50.0, "airPressure": 955.0, "utcTime": "2025-08-30T18:00:00Z"}
            ],
            "datas": [
                {"lon": -170.0, "lat": 13.0, "windSpeed": 50.0, "airPressure": 955.0, "cycloneForecastCategory": "TY", "utcTime": "2025-08-30T18:00:00Z"},
                {"lon": -165.0, "lat": 15.0, "windSpeed": 55.0, "airPressure": 950.0, "cycloneForecastCategory": "STY", "utcTime": "2025-08-31T06:00:00Z"}
            ],
            "errorCone": {
                "type": "MultiPolygon",
                "coordinates": [
                    [[[-171.0, 12.0], [-164.0, 14.0], [-166.0, 16.0], [-171.0, 12.0]]],
                    [[[179.0, 11.0], [180.0, 12.0], [178.0, 13.0], [179.0, 11.0]]]
                ]
            }
        },
        {
            "cycloneName": "EP092025",
            "cycloneCategory": "TS",
            "isActive": false,
            "startDate": "2025-08-20T00:00:00Z",
            "tracks": [
                {"lon": -120.0, "lat": 15.0, "windSpeed": 20.0, "airPressure": 1000.0, "utcTime": "2025-08-20T00:00:00Z"}
            ],
            "datas": []
        }
    ]"#;

    /// A storm known only from its forecast, with an unlisted category code
    /// and a single-polygon cone carrying a hole.
    pub const FORECAST_ONLY_JSON: &str = r#"{
        "cycloneName": "AL032025",
        "cycloneCategory": "XX",
        "isActive": true,
        "startDate": "2025-09-01T00:00:00Z",
        "tracks": [],
        "datas": [
            {"lon": -60.0, "lat": 20.0, "windSpeed": 18.0, "airPressure": 1004.0, "cycloneForecastCategory": "TD", "utcTime": "2025-09-01T00:00:00Z"},
            {"lon": -62.0, "lat": 21.0, "windSpeed": 22.0, "airPressure": 1001.0, "cycloneForecastCategory": "TS", "utcTime": "2025-09-01T12:00:00Z"}
        ],
        "errorCone": {
            "type": "Polygon",
            "coordinates": [
                [[-61.0, 19.0], [-63.0, 22.0], [-59.0, 22.0], [-61.0, 19.0]],
                [[-61.0, 20.5], [-61.5, 21.0], [-60.5, 21.0], [-61.0, 20.5]]
            ]
        }
    }"#;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gridded_payload_shape() {
        let payload = gridded_payload(2, 1, &[("pressure_msl", &[1000.0, f32::NAN])]);
        assert_eq!(payload["meta"]["coordinate"]["lon"]["size"], 2);
        assert_eq!(payload["meta"]["coordinate"]["lat"]["size"], 1);
        assert_eq!(payload["data"]["pressure_msl"][0], 1000.0);
        assert!(payload["data"]["pressure_msl"][1].is_null());
    }

    #[test]
    fn test_cyclone_fixtures_parse() {
        let list: Value = serde_json::from_str(cyclones::CYCLONE_LIST_JSON).unwrap();
        assert_eq!(list.as_array().map(Vec::len), Some(2));

        let single: Value = serde_json::from_str(cyclones::FORECAST_ONLY_JSON).unwrap();
        assert_eq!(single["errorCone"]["type"], "Polygon");
    }
}
