//! # Nearest Point on a Path
//!
//! Finds where a query point meets a path: every segment is projected onto
//! (see [`crate::projection`]) and the candidate with the smallest
//! great-circle distance wins. The along-path distance of the winner is the
//! running sum of full segment lengths before it plus the distance from its
//! segment start to the projected point.

use log::{trace, warn};

use crate::geo_utils::GreatCircle;
use crate::projection::project_onto_segment;
use crate::{GpsPoint, Result, SnapError};

/// The nearest location on a path to some query point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathProjection {
    /// Projected point on the path
    pub point: GpsPoint,
    /// Great-circle distance from the query point to `point`, in meters
    pub distance_meters: f64,
    /// Index `i` of the winning segment `(path[i], path[i + 1])`
    pub segment_index: usize,
    /// Clamped projection parameter within the winning segment
    pub fraction: f64,
    /// Distance along the path from `path[0]` to `point`, in meters
    pub along_path_meters: f64,
}

/// Locate the point on `path` closest to `point`, on the default Earth sphere.
///
/// Returns [`SnapError::DegenerateInput`] when the path has fewer than two
/// vertices and [`SnapError::InvalidPoint`] when the query point or any
/// vertex fails [`GpsPoint::is_valid`].
///
/// # Example
///
/// ```rust
/// use geosegment::{GpsPoint, locate_on_path};
///
/// let path = vec![
///     GpsPoint::from_lng_lat(0.0, 0.0),
///     GpsPoint::from_lng_lat(0.0, 1.0),
///     GpsPoint::from_lng_lat(1.0, 1.0),
/// ];
///
/// let nearest = locate_on_path(&GpsPoint::from_lng_lat(0.1, 0.5), &path).unwrap();
/// assert_eq!(nearest.segment_index, 0);
/// assert_eq!(nearest.point, GpsPoint::from_lng_lat(0.0, 0.5));
/// assert!(nearest.distance_meters > 0.0);
/// ```
pub fn locate_on_path(point: &GpsPoint, path: &[GpsPoint]) -> Result<PathProjection> {
    locate_on_path_with(point, path, &GreatCircle::default())
}

/// Locate the point on `path` closest to `point`, measuring on `sphere`.
///
/// Ties are broken towards the lowest segment index.
pub fn locate_on_path_with(
    point: &GpsPoint,
    path: &[GpsPoint],
    sphere: &GreatCircle,
) -> Result<PathProjection> {
    if path.len() < 2 {
        warn!("cannot locate on a path of {} point(s)", path.len());
        return Err(SnapError::DegenerateInput { points: path.len() });
    }

    if let Some(bad) = std::iter::once(point).chain(path).find(|p| !p.is_valid()) {
        warn!("rejecting invalid point ({}, {})", bad.latitude, bad.longitude);
        return Err(SnapError::InvalidPoint {
            latitude: bad.latitude,
            longitude: bad.longitude,
        });
    }

    let mut best: Option<PathProjection> = None;
    let mut walked = 0.0;

    for (i, w) in path.windows(2).enumerate() {
        let (a, b) = (&w[0], &w[1]);
        let proj = project_onto_segment(point, a, b);
        let distance_meters = sphere.distance(point, &proj.point);

        trace!(
            "segment {}: fraction {:.4}, {:.2}m off path",
            i,
            proj.fraction,
            distance_meters
        );

        if best.map_or(true, |cur| distance_meters < cur.distance_meters) {
            best = Some(PathProjection {
                point: proj.point,
                distance_meters,
                segment_index: i,
                fraction: proj.fraction,
                along_path_meters: walked + sphere.distance(a, &proj.point),
            });
        }

        walked += sphere.distance(a, b);
    }

    // At least one window exists once the length check has passed.
    best.ok_or(SnapError::DegenerateInput { points: path.len() })
}
