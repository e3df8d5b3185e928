//! Uncertainty cone extraction.

use serde::Serialize;
use tracing::debug;

use crate::types::ConeGeometry;

/// One exterior ring of a storm's uncertainty cone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConePolygon {
    pub polygon: Vec<[f64; 2]>,
    pub cyclone_id: String,
}

/// Exterior rings of `cone`, tagged with the storm they belong to.
///
/// A polygon yields its first ring; a multi-polygon yields the first ring of
/// each member. Holes are never emitted. Polygons without rings are skipped.
pub fn extract_cone_polygons(cone: &ConeGeometry, cyclone_id: &str) -> Vec<ConePolygon> {
    let exteriors: Vec<&Vec<[f64; 2]>> = match cone {
        ConeGeometry::Polygon { coordinates } => coordinates.first().into_iter().collect(),
        ConeGeometry::MultiPolygon { coordinates } => {
            coordinates.iter().filter_map(|rings| rings.first()).collect()
        }
    };

    debug!(cyclone = cyclone_id, polygons = exteriors.len(), "Extracted cone polygons");

    exteriors
        .into_iter()
        .map(|ring| ConePolygon {
            polygon: ring.clone(),
            cyclone_id: cyclone_id.to_string(),
        })
        .collect()
}
