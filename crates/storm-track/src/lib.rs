//! Tropical cyclone tracks for map display.
//!
//! Converts storm feed records into render-ready visuals:
//!
//! - **Segmentation**: tracks and forecasts are cut where they cross the
//!   antimeridian, so no segment is drawn across the whole map
//! - **Cones**: exterior rings of the forecast uncertainty cone
//! - **Styling**: category color and icon from a fixed table with a gray
//!   default for unknown codes
//!
//! # Example
//!
//! ```
//! use storm_track::segment_path;
//!
//! let track = [[170.0, 10.0], [175.0, 11.0], [-178.0, 12.0], [-170.0, 13.0]];
//! let segments = segment_path(&track);
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[1][0], [-178.0, 12.0]);
//! ```

pub mod category;
pub mod cone;
pub mod segment;
pub mod types;
pub mod visual;

pub use category::{lookup, CategoryStyle, Rgba, CATEGORIES, UNKNOWN_CATEGORY};
pub use cone::{extract_cone_polygons, ConePolygon};
pub use segment::{segment_path, split_at_antimeridian, ANTIMERIDIAN_JUMP};
pub use types::{ConeGeometry, CycloneRecord, ForecastPoint, GeoPoint, TrackPoint};
pub use visual::{
    build_cyclone_visual, build_cyclone_visuals, CurrentPosition, CycloneVisual, LayerData,
    PathSegment, PositionMarker,
};
