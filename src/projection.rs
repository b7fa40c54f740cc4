//! Closest point on a segment.
//!
//! Longitude and latitude are treated as planar x/y. The foreshortening error
//! grows with the angular span of the segment and with latitude, so results
//! are only accurate for the short segments of a road polyline; a segment
//! spanning several degrees can return a point that is not the great-circle
//! nearest one.

use geo::{Coord, Line, LineLocatePoint, Point};

use crate::GpsPoint;

/// Where a point projects onto a segment `[a, b]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    /// The projected point, always on the closed segment.
    pub point: GpsPoint,
    /// Clamped projection parameter: 0 at `a`, 1 at `b`.
    pub fraction: f64,
}

/// Project `p` onto the segment `[a, b]`.
///
/// The projection parameter is clamped to `[0, 1]`, so when the perpendicular
/// foot lies beyond either end the nearest endpoint is returned exactly. A
/// zero-length segment projects everything onto `a` with fraction 0.
pub fn project_onto_segment(p: &GpsPoint, a: &GpsPoint, b: &GpsPoint) -> SegmentProjection {
    let start: Coord = (*a).into();
    let end: Coord = (*b).into();
    let query: Point = (*p).into();

    // `None` only for non-finite coordinates
    let t = Line::new(start, end).line_locate_point(&query).unwrap_or(0.0);

    // Out-of-range parameters yield the endpoint itself, bit for bit.
    if t <= 0.0 {
        SegmentProjection { point: *a, fraction: 0.0 }
    } else if t >= 1.0 {
        SegmentProjection { point: *b, fraction: 1.0 }
    } else {
        SegmentProjection {
            point: (start + (end - start) * t).into(),
            fraction: t,
        }
    }
}

/// Closest point to `p` on the segment `[a, b]`.
///
/// ```rust
/// use geosegment::{GpsPoint, projection::closest_point_on_segment};
///
/// let a = GpsPoint::from_lng_lat(0.0, 0.0);
/// let b = GpsPoint::from_lng_lat(0.0, 1.0);
///
/// let p = closest_point_on_segment(&GpsPoint::from_lng_lat(0.1, 0.5), &a, &b);
/// assert_eq!(p, GpsPoint::from_lng_lat(0.0, 0.5));
///
/// // Beyond the end: clamped to b
/// let p = closest_point_on_segment(&GpsPoint::from_lng_lat(0.0, 3.0), &a, &b);
/// assert_eq!(p, b);
/// ```
#[inline]
pub fn closest_point_on_segment(p: &GpsPoint, a: &GpsPoint, b: &GpsPoint) -> GpsPoint {
    project_onto_segment(p, a, b).point
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ll(lng: f64, lat: f64) -> GpsPoint {
        GpsPoint::from_lng_lat(lng, lat)
    }

    #[test]
    fn test_zero_length_segment_returns_start() {
        let a = ll(106.8, -6.2);
        let proj = project_onto_segment(&ll(107.0, -6.0), &a, &a);
        assert_eq!(proj.point, a);
        assert_eq!(proj.fraction, 0.0);
    }

    #[test]
    fn test_perpendicular_foot_inside_segment() {
        let proj = project_onto_segment(&ll(0.1, 0.5), &ll(0.0, 0.0), &ll(0.0, 1.0));
        assert_eq!(proj.point, ll(0.0, 0.5));
        assert_eq!(proj.fraction, 0.5);
    }

    #[test]
    fn test_before_start_clamps_to_start() {
        let a = ll(0.0, 0.0);
        let b = ll(1.0, 0.0);
        let proj = project_onto_segment(&ll(-2.0, 0.3), &a, &b);
        assert_eq!(proj.point, a);
        assert_eq!(proj.fraction, 0.0);
    }

    #[test]
    fn test_after_end_clamps_to_end() {
        let a = ll(0.0, 0.0);
        let b = ll(1.0, 1.0);
        let proj = project_onto_segment(&ll(5.0, 4.0), &a, &b);
        assert_eq!(proj.point, b);
        assert_eq!(proj.fraction, 1.0);
    }

    #[test]
    fn test_point_on_segment_projects_to_itself() {
        let proj = project_onto_segment(&ll(0.25, 0.25), &ll(0.0, 0.0), &ll(1.0, 1.0));
        assert!((proj.point.longitude - 0.25).abs() < 1e-12);
        assert!((proj.point.latitude - 0.25).abs() < 1e-12);
        assert!((proj.fraction - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite_query_falls_back_to_start() {
        let a = ll(0.0, 0.0);
        let b = ll(0.0, 1.0);
        let proj = project_onto_segment(&ll(f64::NAN, 0.5), &a, &b);
        assert_eq!(proj.point, a);
        assert_eq!(proj.fraction, 0.0);
    }

    #[test]
    fn test_projection_stays_within_segment_bounds() {
        let a = ll(106.876024, -6.254066);
        let b = ll(106.875928, -6.254471);
        for p in [ll(106.87, -6.25), ll(106.88, -6.26), ll(106.875799, -6.254226)] {
            let q = closest_point_on_segment(&p, &a, &b);
            assert!(q.longitude >= b.longitude && q.longitude <= a.longitude);
            assert!(q.latitude >= b.latitude && q.latitude <= a.latitude);
        }
    }
}
