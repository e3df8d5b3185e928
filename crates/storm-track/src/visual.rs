//! Render-ready storm visuals.

use serde::Serialize;
use tracing::debug;

use crate::category::{lookup, Rgba};
use crate::cone::{extract_cone_polygons, ConePolygon};
use crate::segment::segment_path;
use crate::types::{CycloneRecord, ForecastPoint, TrackPoint};

/// Latest known position of a storm.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPosition {
    pub lon: f64,
    pub lat: f64,
    pub wind_speed: Option<f64>,
    pub air_pressure: Option<f64>,
    pub time: Option<String>,
}

impl CurrentPosition {
    /// Placeholder for a storm with neither track nor forecast points.
    pub fn sentinel() -> Self {
        Self {
            lon: 0.0,
            lat: 0.0,
            wind_speed: Some(0.0),
            air_pressure: Some(0.0),
            time: None,
        }
    }

    /// Last observed point, else first forecast point, else the sentinel.
    pub fn resolve(tracks: &[TrackPoint], forecasts: &[ForecastPoint]) -> Self {
        tracks
            .last()
            .map(Self::from)
            .or_else(|| forecasts.first().map(Self::from))
            .unwrap_or_else(Self::sentinel)
    }

    pub fn coords(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl From<&TrackPoint> for CurrentPosition {
    fn from(point: &TrackPoint) -> Self {
        Self {
            lon: point.lon,
            lat: point.lat,
            wind_speed: point.wind_speed,
            air_pressure: point.air_pressure,
            time: point.time.clone(),
        }
    }
}

impl From<&ForecastPoint> for CurrentPosition {
    fn from(point: &ForecastPoint) -> Self {
        Self {
            lon: point.lon,
            lat: point.lat,
            wind_speed: point.wind_speed,
            air_pressure: point.air_pressure,
            time: point.time.clone(),
        }
    }
}

/// A drawable polyline that does not cross the antimeridian.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSegment {
    pub path: Vec<[f64; 2]>,
    pub color: Rgba,
}

/// Marker drawn at the storm's current position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionMarker {
    pub coords: [f64; 2],
    pub color: Rgba,
    pub name: String,
}

/// Per-layer inputs for the map renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerData {
    pub error_cone_polygons: Vec<ConePolygon>,
    pub track_segments: Vec<PathSegment>,
    pub forecast_segments: Vec<PathSegment>,
    pub position: PositionMarker,
}

/// One storm ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycloneVisual {
    pub id: String,
    pub name: String,
    pub category: String,
    pub is_active: bool,
    pub start_date: Option<String>,
    pub color: Rgba,
    pub icon: &'static str,
    pub current_position: CurrentPosition,
    pub layer_data: LayerData,
}

/// Build the visual for one storm.
///
/// Track and forecast are segmented independently and both drawn in the
/// storm's category color. An unknown category yields the default style,
/// never an error. Activity is not checked here; see
/// [`build_cyclone_visuals`].
pub fn build_cyclone_visual(record: &CycloneRecord) -> CycloneVisual {
    let style = lookup(&record.category);
    let current_position = CurrentPosition::resolve(&record.tracks, &record.forecasts);

    let segments = |paths: Vec<Vec<[f64; 2]>>| -> Vec<PathSegment> {
        paths
            .into_iter()
            .map(|path| PathSegment {
                path,
                color: style.color,
            })
            .collect()
    };
    let track_segments = segments(segment_path(&record.tracks));
    let forecast_segments = segments(segment_path(&record.forecasts));

    let error_cone_polygons = record
        .error_cone
        .as_ref()
        .map(|cone| extract_cone_polygons(cone, &record.name))
        .unwrap_or_default();

    debug!(
        cyclone = %record.name,
        category = %record.category,
        track_segments = track_segments.len(),
        forecast_segments = forecast_segments.len(),
        cone_polygons = error_cone_polygons.len(),
        "Built cyclone visual"
    );

    CycloneVisual {
        id: record.name.clone(),
        name: record.name.clone(),
        category: record.category.clone(),
        is_active: record.is_active,
        start_date: record.start_date.clone(),
        color: style.color,
        icon: style.icon,
        layer_data: LayerData {
            error_cone_polygons,
            track_segments,
            forecast_segments,
            position: PositionMarker {
                coords: current_position.coords(),
                color: style.color,
                name: record.name.clone(),
            },
        },
        current_position,
    }
}

/// Build visuals for every active storm, keeping input order.
pub fn build_cyclone_visuals(records: &[CycloneRecord]) -> Vec<CycloneVisual> {
    let visuals: Vec<CycloneVisual> = records
        .iter()
        .filter(|record| record.is_active)
        .map(build_cyclone_visual)
        .collect();

    debug!(
        total = records.len(),
        active = visuals.len(),
        "Built cyclone visuals"
    );
    visuals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConeGeometry;

    fn track(lon: f64, lat: f64) -> TrackPoint {
        TrackPoint {
            lon,
            lat,
            wind_speed: Some(30.0),
            air_pressure: Some(990.0),
            time: Some(format!("t{}", lon)),
        }
    }

    fn forecast(lon: f64, lat: f64) -> ForecastPoint {
        ForecastPoint {
            lon,
            lat,
            wind_speed: Some(40.0),
            air_pressure: Some(980.0),
            category: Some("TY".to_string()),
            time: None,
        }
    }

    fn record(tracks: Vec<TrackPoint>, forecasts: Vec<ForecastPoint>) -> CycloneRecord {
        CycloneRecord {
            name: "WP012025".to_string(),
            category: "TS".to_string(),
            is_active: true,
            start_date: Some("2025-07-01T00:00:00Z".to_string()),
            tracks,
            forecasts,
            error_cone: None,
        }
    }

    #[test]
    fn test_current_position_prefers_last_track() {
        let visual = build_cyclone_visual(&record(
            vec![track(130.0, 15.0), track(131.0, 16.0)],
            vec![forecast(132.0, 17.0)],
        ));
        assert_eq!(visual.current_position.coords(), [131.0, 16.0]);
        assert_eq!(visual.current_position.time.as_deref(), Some("t131"));
        assert_eq!(visual.layer_data.position.coords, [131.0, 16.0]);
    }

    #[test]
    fn test_current_position_falls_back_to_forecast() {
        let visual = build_cyclone_visual(&record(vec![], vec![forecast(132.0, 17.0)]));
        assert_eq!(visual.current_position.coords(), [132.0, 17.0]);
        assert_eq!(visual.current_position.wind_speed, Some(40.0));
        assert_eq!(visual.current_position.time, None);
    }

    #[test]
    fn test_current_position_sentinel() {
        let visual = build_cyclone_visual(&record(vec![], vec![]));
        assert_eq!(visual.current_position, CurrentPosition::sentinel());
        assert!(visual.layer_data.track_segments.is_empty());
        assert!(visual.layer_data.forecast_segments.is_empty());
        assert!(visual.layer_data.error_cone_polygons.is_empty());
    }

    #[test]
    fn test_segments_carry_category_color() {
        let visual = build_cyclone_visual(&record(
            vec![track(170.0, 10.0), track(175.0, 11.0), track(-178.0, 12.0), track(-170.0, 13.0)],
            vec![forecast(-170.0, 13.0), forecast(-165.0, 15.0)],
        ));
        let orange = [255, 165, 0, 255];
        assert_eq!(visual.color, orange);
        assert_eq!(visual.icon, "⛈️");
        assert_eq!(visual.layer_data.track_segments.len(), 2);
        assert_eq!(visual.layer_data.forecast_segments.len(), 1);
        assert!(visual
            .layer_data
            .track_segments
            .iter()
            .chain(&visual.layer_data.forecast_segments)
            .all(|s| s.color == orange && s.path.len() >= 2));
    }

    #[test]
    fn test_cone_polygons_tagged_with_name() {
        let mut storm = record(vec![track(0.0, 0.0)], vec![]);
        storm.error_cone = Some(ConeGeometry::Polygon {
            coordinates: vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
        });
        let visual = build_cyclone_visual(&storm);
        assert_eq!(visual.layer_data.error_cone_polygons.len(), 1);
        assert_eq!(visual.layer_data.error_cone_polygons[0].cyclone_id, "WP012025");
    }

    #[test]
    fn test_batch_filters_inactive_and_keeps_order() {
        let mut a = record(vec![], vec![]);
        a.name = "A".to_string();
        let mut b = record(vec![], vec![]);
        b.name = "B".to_string();
        b.is_active = false;
        let mut c = record(vec![], vec![]);
        c.name = "C".to_string();

        let ids: Vec<String> = build_cyclone_visuals(&[a, b, c])
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec!["A", "C"]);
    }

    #[test]
    fn test_serialized_names() {
        let visual = build_cyclone_visual(&record(vec![track(1.0, 2.0), track(3.0, 4.0)], vec![]));
        let json = serde_json::to_value(&visual).unwrap();
        assert_eq!(json["isActive"], true);
        assert_eq!(json["startDate"], "2025-07-01T00:00:00Z");
        assert_eq!(json["currentPosition"]["windSpeed"], 30.0);
        assert_eq!(json["layerData"]["trackSegments"][0]["path"][1], serde_json::json!([3.0, 4.0]));
        assert_eq!(json["layerData"]["position"]["name"], "WP012025");
        assert!(json["layerData"]["errorConePolygons"].as_array().unwrap().is_empty());
    }
}
