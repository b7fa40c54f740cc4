//! # Geosegment
//!
//! Great-circle distances and snapping of GPS fixes onto route polylines.
//!
//! This library provides:
//! - Haversine distance and path length on a configurable sphere
//! - Nearest point on a path, with segment index and along-path distance
//! - Slicing a path between the projections of two points
//! - Snap-to-road restricted to the window around the previous, current and
//!   next waypoints of a route
//!
//! ## Features
//!
//! - **`serde`** - Derive `Serialize`/`Deserialize` on the public value types
//!
//! ## Quick Start
//!
//! ```rust
//! use geosegment::{GpsPoint, snap_to_road};
//!
//! let road = vec![
//!     GpsPoint::from_lng_lat(106.876024, -6.254066),
//!     GpsPoint::from_lng_lat(106.875928, -6.254471),
//!     GpsPoint::from_lng_lat(106.875976, -6.254615),
//!     GpsPoint::from_lng_lat(106.876298, -6.254679),
//! ];
//!
//! let current = GpsPoint::from_lng_lat(106.875928, -6.254471);
//! let next = GpsPoint::from_lng_lat(106.876298, -6.254679);
//! let fix = GpsPoint::from_lng_lat(106.875874, -6.254178);
//!
//! let snapped = snap_to_road(None, Some(next), Some(current), &fix, &road).unwrap();
//! println!(
//!     "{:?}: {:.1}m off road, {:.1}m along",
//!     snapped.point, snapped.distance_meters, snapped.along_path_meters
//! );
//! ```

use geo::{Coord, Point};

pub mod geo_utils;
pub mod locate;
pub mod projection;
pub mod segment;
pub mod slice;
pub mod snap;

pub use geo_utils::{haversine_distance, polyline_length, GreatCircle, EARTH_RADIUS_METERS};
pub use locate::{locate_on_path, locate_on_path_with, PathProjection};
pub use segment::{Line, Segment};
pub use slice::{slice_path, slice_path_with};
pub use snap::{snap_to_road, RoadSnapper, SnapContext, SnapMode, SnapResult};

// ============================================================================
// Core Types
// ============================================================================

/// A GPS coordinate with latitude and longitude in decimal degrees.
///
/// # Example
/// ```
/// use geosegment::GpsPoint;
/// let a = GpsPoint::new(-6.2, 106.816666);         // Jakarta
/// let b = GpsPoint::from_lng_lat(106.816666, -6.2); // same point, lon/lat order
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GpsPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsPoint {
    /// Create a new GPS point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Create a point from a (longitude, latitude) pair, the x/y order used by
    /// GeoJSON and `geo`.
    pub fn from_lng_lat(longitude: f64, latitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Check if the point has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

impl From<GpsPoint> for Coord {
    fn from(p: GpsPoint) -> Self {
        Coord { x: p.longitude, y: p.latitude }
    }
}

impl From<Coord> for GpsPoint {
    fn from(c: Coord) -> Self {
        GpsPoint::from_lng_lat(c.x, c.y)
    }
}

impl From<GpsPoint> for Point {
    fn from(p: GpsPoint) -> Self {
        Point::new(p.longitude, p.latitude)
    }
}

impl From<Point> for GpsPoint {
    fn from(p: Point) -> Self {
        GpsPoint::from_lng_lat(p.x(), p.y())
    }
}

/// Configuration for locating, slicing and snapping.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapConfig {
    /// Radius of the sphere distances are measured on.
    /// Default: 6,371,000 meters (mean Earth radius)
    pub earth_radius_meters: f64,

    /// Projections closer than this to a path vertex are treated as the vertex
    /// when slicing, so slices carry no near-duplicate points.
    /// Default: 0.01 meters
    pub vertex_tolerance_meters: f64,
}

impl SnapConfig {
    /// The sphere distances are measured on.
    pub fn sphere(&self) -> GreatCircle {
        GreatCircle::new(self.earth_radius_meters)
    }
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            earth_radius_meters: EARTH_RADIUS_METERS,
            vertex_tolerance_meters: 0.01,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while locating, slicing or snapping.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SnapError {
    /// A segment search needs a path of at least two points.
    #[error("path has {points} point(s), at least 2 are required")]
    DegenerateInput { points: usize },

    /// A coordinate is non-finite or outside the latitude/longitude range.
    #[error("invalid point (latitude {latitude}, longitude {longitude})")]
    InvalidPoint { latitude: f64, longitude: f64 },

    /// The known waypoints select no snapping window.
    #[error(
        "no snapping window for waypoints (previous: {previous}, current: {current}, next: {next})"
    )]
    AmbiguousContext { previous: bool, current: bool, next: bool },
}

pub type Result<T> = std::result::Result<T, SnapError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_road() -> Vec<GpsPoint> {
        vec![
            GpsPoint::from_lng_lat(106.876024, -6.254066),
            GpsPoint::from_lng_lat(106.875928, -6.254471),
            GpsPoint::from_lng_lat(106.875976, -6.254615),
            GpsPoint::from_lng_lat(106.876298, -6.254679),
        ]
    }

    #[test]
    fn test_gps_point_validation() {
        assert!(GpsPoint::new(-6.2, 106.816666).is_valid());
        assert!(!GpsPoint::new(91.0, 0.0).is_valid());
        assert!(!GpsPoint::new(0.0, 181.0).is_valid());
        assert!(!GpsPoint::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_geo_conversions_use_lng_as_x() {
        let p = GpsPoint::new(-6.2, 106.8);
        let c: Coord = p.into();
        assert_eq!((c.x, c.y), (106.8, -6.2));
        let pt: Point = p.into();
        assert_eq!(GpsPoint::from(pt), p);
        assert_eq!(GpsPoint::from(c), p);
    }

    #[test]
    fn test_default_config() {
        let config = SnapConfig::default();
        assert_eq!(config.earth_radius_meters, 6_371_000.0);
        assert_eq!(config.sphere(), GreatCircle::default());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SnapError::DegenerateInput { points: 1 }.to_string(),
            "path has 1 point(s), at least 2 are required"
        );
        assert_eq!(
            SnapError::InvalidPoint { latitude: 91.0, longitude: 0.0 }.to_string(),
            "invalid point (latitude 91, longitude 0)"
        );
        let err = SnapError::AmbiguousContext {
            previous: true,
            current: false,
            next: false,
        };
        assert!(err.to_string().contains("previous: true"));
    }

    #[test]
    fn test_street_pipeline() {
        let road = sample_road();

        let length = polyline_length(&road);
        assert!(length > 50.0 && length < 120.0, "got {length}");

        let sliced = slice_path(&road[0], &road[2], &road).unwrap();
        assert_eq!(sliced.len(), 3);

        let fix = GpsPoint::from_lng_lat(106.875799, -6.254226);
        let nearest = locate_on_path(&fix, &road).unwrap();
        assert_eq!(nearest.segment_index, 0);
        assert!(nearest.along_path_meters <= length);

        let snapped = snap_to_road(
            None,
            Some(road[3]),
            Some(road[1]),
            &GpsPoint::from_lng_lat(106.875874, -6.254178),
            &road,
        )
        .unwrap();
        assert_eq!(snapped.mode, SnapMode::StartOfRoute);
        // The window starts at road[1], behind the fix, so it clamps there
        assert_eq!(snapped.point, road[1]);
        assert_eq!(snapped.along_path_meters, 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_snap_result_serde() {
        let result = SnapResult {
            point: GpsPoint::new(-6.25, 106.87),
            distance_meters: 12.5,
            along_path_meters: 40.0,
            mode: SnapMode::Arrival,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"mode\":\"Arrival\""));
        let back: SnapResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
