//! Two-point segment helpers.
//!
//! Lengths here are in **kilometres**, unlike the rest of the crate.

use crate::geo_utils::haversine_distance;
use crate::GpsPoint;

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub start: GpsPoint,
    pub end: GpsPoint,
}

impl Segment {
    pub fn new(start: GpsPoint, end: GpsPoint) -> Self {
        Self { start, end }
    }

    /// Great-circle length in kilometres.
    ///
    /// ```rust
    /// use geosegment::{GpsPoint, Segment};
    ///
    /// let jakarta_bandung = Segment::new(
    ///     GpsPoint::new(-6.2, 106.816666),
    ///     GpsPoint::new(-6.914744, 107.609810),
    /// );
    /// let km = jakarta_bandung.length_km();
    /// assert!(km > 100.0 && km < 200.0);
    /// ```
    pub fn length_km(&self) -> f64 {
        haversine_distance(&self.start, &self.end) / 1000.0
    }

    /// Arithmetic mean of the endpoints' coordinates.
    pub fn midpoint(&self) -> GpsPoint {
        GpsPoint::new(
            (self.start.latitude + self.end.latitude) / 2.0,
            (self.start.longitude + self.end.longitude) / 2.0,
        )
    }
}

/// A line made of independent segments.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub segments: Vec<Segment>,
}

impl Line {
    /// Segments joining consecutive points.
    pub fn from_points(points: &[GpsPoint]) -> Self {
        Self {
            segments: points.windows(2).map(|w| Segment::new(w[0], w[1])).collect(),
        }
    }

    /// Total length of all segments in kilometres.
    pub fn length_km(&self) -> f64 {
        self.segments.iter().map(Segment::length_km).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_utils::polyline_length;

    #[test]
    fn test_segment_length_jakarta_yogyakarta() {
        let s = Segment::new(
            GpsPoint::new(-6.2, 106.816666),
            GpsPoint::new(-7.8013953, 110.3641204),
        );
        let km = s.length_km();
        assert!(km > 100.0 && km < 500.0, "got {km}");
    }

    #[test]
    fn test_segment_midpoint() {
        let s = Segment::new(GpsPoint::new(0.0, 0.0), GpsPoint::new(10.0, 10.0));
        assert_eq!(s.midpoint(), GpsPoint::new(5.0, 5.0));
    }

    #[test]
    fn test_line_length_matches_polyline_length() {
        let points = vec![
            GpsPoint::new(-6.254066, 106.876024),
            GpsPoint::new(-6.254471, 106.875928),
            GpsPoint::new(-6.254615, 106.875976),
        ];
        let line = Line::from_points(&points);
        assert_eq!(line.segments.len(), 2);
        assert!((line.length_km() * 1000.0 - polyline_length(&points)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(Line::from_points(&[]).length_km(), 0.0);
        assert_eq!(Line::from_points(&[GpsPoint::new(1.0, 1.0)]).segments.len(), 0);
    }
}
