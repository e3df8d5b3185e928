//! Antimeridian-safe path segmentation.
//!
//! Renderers draw straight lines between consecutive path points in
//! unprojected degrees. A storm crossing ±180° would otherwise be drawn as a
//! line across the whole map, so paths are cut wherever consecutive points
//! jump more than half the globe in longitude.
//!
//! The threshold is a heuristic, not a great-circle unwrap. Feed points are
//! a few degrees apart, far below the threshold.

use crate::types::GeoPoint;

/// Longitude jump, in degrees, that starts a new segment.
pub const ANTIMERIDIAN_JUMP: f64 = 180.0;

/// Split `points` into runs that never cross the antimeridian.
///
/// A new run starts at every point whose longitude differs from the
/// previous point's by more than [`ANTIMERIDIAN_JUMP`]. Runs shorter than two
/// points cannot be drawn as a line and are dropped. Points keep their type
/// so callers can still read per-point metadata.
pub fn split_at_antimeridian<P: GeoPoint + Clone>(points: &[P]) -> Vec<Vec<P>> {
    let mut segments = Vec::new();
    let mut current: Vec<P> = Vec::new();

    for point in points {
        if let Some(prev) = current.last() {
            if (point.lon() - prev.lon()).abs() > ANTIMERIDIAN_JUMP {
                close_segment(&mut segments, std::mem::take(&mut current));
            }
        }
        current.push(point.clone());
    }
    close_segment(&mut segments, current);

    segments
}

/// Split `points` like [`split_at_antimeridian`] and keep only `[lon, lat]`.
pub fn segment_path<P: GeoPoint>(points: &[P]) -> Vec<Vec<[f64; 2]>> {
    let coords: Vec<[f64; 2]> = points.iter().map(GeoPoint::coords).collect();
    split_at_antimeridian(&coords)
}

fn close_segment<P>(segments: &mut Vec<Vec<P>>, segment: Vec<P>) {
    if segment.len() >= 2 {
        segments.push(segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_at_crossing() {
        let points = [[170.0, 10.0], [175.0, 11.0], [-178.0, 12.0], [-170.0, 13.0]];
        let segments = segment_path(&points);
        assert_eq!(
            segments,
            vec![
                vec![[170.0, 10.0], [175.0, 11.0]],
                vec![[-178.0, 12.0], [-170.0, 13.0]],
            ]
        );
    }

    #[test]
    fn test_no_crossing_is_one_segment() {
        let points = [[120.0, 10.0], [125.0, 15.0], [130.0, 20.0]];
        assert_eq!(segment_path(&points), vec![points.to_vec()]);
    }

    #[test]
    fn test_single_point_runs_are_dropped() {
        // Leading run of one point, then a crossing.
        let points = [[179.0, 5.0], [-179.0, 6.0], [-178.0, 7.0]];
        assert_eq!(segment_path(&points), vec![vec![[-179.0, 6.0], [-178.0, 7.0]]]);

        // Trailing run of one point.
        let points = [[178.0, 5.0], [179.0, 6.0], [-179.0, 7.0]];
        assert_eq!(segment_path(&points), vec![vec![[178.0, 5.0], [179.0, 6.0]]]);

        // Alternating crossings leave nothing drawable.
        let points = [[179.0, 0.0], [-179.0, 0.0], [179.0, 0.0]];
        assert!(segment_path(&points).is_empty());
    }

    #[test]
    fn test_exactly_half_turn_does_not_split() {
        let points = [[-90.0, 0.0], [90.0, 0.0]];
        assert_eq!(segment_path(&points).len(), 1);
    }

    #[test]
    fn test_empty_and_single_input() {
        assert!(segment_path::<[f64; 2]>(&[]).is_empty());
        assert!(segment_path(&[[10.0, 10.0]]).is_empty());
    }

    #[test]
    fn test_segments_cover_input() {
        let points: Vec<[f64; 2]> = (0..40)
            .map(|i| {
                let lon = 160.0 + i as f64 * 1.5;
                let lon = if lon > 180.0 { lon - 360.0 } else { lon };
                [lon, i as f64 * 0.25]
            })
            .collect();

        let segments = split_at_antimeridian(&points);
        assert_eq!(segments.len(), 2);

        let rejoined: Vec<[f64; 2]> = segments.concat();
        assert_eq!(rejoined, points);
        for pair in segments.iter().flat_map(|s| s.windows(2)) {
            assert!((pair[1][0] - pair[0][0]).abs() <= ANTIMERIDIAN_JUMP);
        }
    }
}
