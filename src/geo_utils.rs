//! # Geographic Utilities
//!
//! Distance computations shared by the locator, slicer and snapper.
//!
//! ## Overview
//!
//! | Item | Description |
//! |------|-------------|
//! | [`GreatCircle`] | Haversine distance on a sphere of configurable radius |
//! | [`haversine_distance`] | Great-circle distance on the default Earth sphere |
//! | [`polyline_length`] | Total length of a path in meters |
//!
//! ## Example
//!
//! ```rust
//! use geosegment::{GpsPoint, geo_utils};
//!
//! let jakarta = GpsPoint::new(-6.2, 106.816666);
//! let bandung = GpsPoint::new(-6.914744, 107.609810);
//!
//! let dist = geo_utils::haversine_distance(&jakarta, &bandung);
//! assert!(dist > 100_000.0 && dist < 200_000.0);
//! ```
//!
//! ## Algorithm Notes
//!
//! ### Haversine Formula
//!
//! `h = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)`, distance `2·R·asin(√h)`.
//! Rounding can push `h` marginally outside `[0, 1]` for coincident or antipodal
//! points, so it is clamped before the square root.
//!
//! Reference: [Haversine formula (Wikipedia)](https://en.wikipedia.org/wiki/Haversine_formula)

use crate::GpsPoint;

/// Mean Earth radius in meters used when no other radius is configured.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

// =============================================================================
// Distance Functions
// =============================================================================

/// Haversine distance on a sphere with a fixed radius.
///
/// The radius is part of the value rather than a global so that tests and
/// non-Earth bodies can use their own.
///
/// # Example
///
/// ```rust
/// use geosegment::{GpsPoint, geo_utils::GreatCircle};
///
/// let unit = GreatCircle::new(1.0);
/// let d = unit.distance(&GpsPoint::new(0.0, 0.0), &GpsPoint::new(0.0, 90.0));
/// assert!((d - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreatCircle {
    radius_meters: f64,
}

impl GreatCircle {
    /// Create a sphere with the given radius in meters.
    pub fn new(radius_meters: f64) -> Self {
        Self { radius_meters }
    }

    /// Radius of the sphere in meters.
    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    /// Great-circle distance between two points, in meters. Always `>= 0`.
    #[inline]
    pub fn distance(&self, p1: &GpsPoint, p2: &GpsPoint) -> f64 {
        let lat1 = p1.latitude.to_radians();
        let lat2 = p2.latitude.to_radians();
        let d_lat = lat2 - lat1;
        let d_lng = (p2.longitude - p1.longitude).to_radians();

        let h = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

        2.0 * self.radius_meters * h.clamp(0.0, 1.0).sqrt().asin()
    }

    /// Sum of the great-circle lengths of consecutive segments, in meters.
    ///
    /// Empty or single-point paths have length 0.
    pub fn path_length(&self, points: &[GpsPoint]) -> f64 {
        points
            .windows(2)
            .map(|w| self.distance(&w[0], &w[1]))
            .sum()
    }
}

impl Default for GreatCircle {
    fn default() -> Self {
        Self::new(EARTH_RADIUS_METERS)
    }
}

/// Calculate the great-circle distance between two GPS points in meters,
/// on a sphere of radius [`EARTH_RADIUS_METERS`].
///
/// # Example
///
/// ```rust
/// use geosegment::{GpsPoint, geo_utils};
///
/// let a = GpsPoint::from_lng_lat(106.875279, -6.191511);
/// let b = GpsPoint::from_lng_lat(106.878737, -6.166889);
///
/// let distance = geo_utils::haversine_distance(&a, &b);
/// assert!((distance - 2764.0).abs() < 5.0);
/// ```
#[inline]
pub fn haversine_distance(p1: &GpsPoint, p2: &GpsPoint) -> f64 {
    GreatCircle::default().distance(p1, p2)
}

/// Calculate the total length of a polyline in meters.
///
/// Sums the haversine distance between consecutive points. Empty or
/// single-point paths return 0.0.
///
/// ```rust
/// use geosegment::{GpsPoint, geo_utils};
///
/// let path = vec![
///     GpsPoint::from_lng_lat(106.875279, -6.191511),
///     GpsPoint::from_lng_lat(106.878737, -6.166889),
/// ];
/// let length = geo_utils::polyline_length(&path);
/// assert_eq!(length, geo_utils::haversine_distance(&path[0], &path[1]));
/// ```
pub fn polyline_length(points: &[GpsPoint]) -> f64 {
    GreatCircle::default().path_length(points)
}

// =============================================================================
// Unit Tests
// =============================================================================
