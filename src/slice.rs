//! # Path Slicing
//!
//! Cuts the part of a path lying between the projections of two points.
//!
//! Both points are located on the path first. Each projection already knows
//! its segment and fraction, so the slice is assembled from those positions:
//! the start projection, every vertex strictly between the two positions, then
//! the end projection. No coordinate equality is involved. Projections that
//! land within [`SnapConfig::vertex_tolerance_meters`] of a vertex collapse
//! onto it.
//!
//! The slice always runs in the path's direction of travel. If `end` projects
//! before `start`, the positions are swapped rather than reversing the output.

use log::debug;

use crate::geo_utils::GreatCircle;
use crate::locate::{locate_on_path_with, PathProjection};
use crate::{GpsPoint, Result, SnapConfig};

/// Sub-path of `path` between the projections of `start` and `end`, using
/// the default configuration.
///
/// The result has at least two points. When both projections coincide it is
/// the zero-length path `[p, p]`.
///
/// # Example
///
/// ```rust
/// use geosegment::{GpsPoint, slice_path};
///
/// let path = vec![
///     GpsPoint::from_lng_lat(0.0, 0.0),
///     GpsPoint::from_lng_lat(0.0, 1.0),
///     GpsPoint::from_lng_lat(1.0, 1.0),
/// ];
///
/// let sliced = slice_path(
///     &GpsPoint::from_lng_lat(0.0, 0.2),
///     &GpsPoint::from_lng_lat(1.0, 1.0),
///     &path,
/// ).unwrap();
///
/// assert_eq!(sliced, vec![
///     GpsPoint::from_lng_lat(0.0, 0.2),
///     GpsPoint::from_lng_lat(0.0, 1.0),
///     GpsPoint::from_lng_lat(1.0, 1.0),
/// ]);
/// ```
pub fn slice_path(start: &GpsPoint, end: &GpsPoint, path: &[GpsPoint]) -> Result<Vec<GpsPoint>> {
    slice_path_with(start, end, path, &SnapConfig::default())
}

/// Sub-path of `path` between the projections of `start` and `end`.
///
/// Fails with [`crate::SnapError::DegenerateInput`] for paths of fewer than
/// two points and with [`crate::SnapError::InvalidPoint`] for non-finite or
/// out-of-range coordinates.
pub fn slice_path_with(
    start: &GpsPoint,
    end: &GpsPoint,
    path: &[GpsPoint],
    config: &SnapConfig,
) -> Result<Vec<GpsPoint>> {
    let sphere = config.sphere();
    let from = locate_on_path_with(start, path, &sphere)?;
    let to = locate_on_path_with(end, path, &sphere)?;

    let (from, to) = if precedes(&to, &from) {
        debug!(
            "slice end precedes start (segment {} vs {}), following path order",
            to.segment_index, from.segment_index
        );
        (to, from)
    } else {
        (from, to)
    };

    let tolerance = config.vertex_tolerance_meters;
    let mut sliced = Vec::with_capacity(to.segment_index - from.segment_index + 2);
    sliced.push(settle_on_vertex(&from, path, &sphere, tolerance));
    for vertex in &path[from.segment_index + 1..=to.segment_index] {
        push_distinct(&mut sliced, *vertex, &sphere, tolerance);
    }
    push_distinct(&mut sliced, settle_on_vertex(&to, path, &sphere, tolerance), &sphere, tolerance);

    if sliced.len() == 1 {
        sliced.push(sliced[0]);
    }

    Ok(sliced)
}

/// Whether `a` lies strictly before `b` along the path.
fn precedes(a: &PathProjection, b: &PathProjection) -> bool {
    (a.segment_index, a.fraction) < (b.segment_index, b.fraction)
}

/// The projected point, or the end of its segment when within `tolerance` of it.
fn settle_on_vertex(
    proj: &PathProjection,
    path: &[GpsPoint],
    sphere: &GreatCircle,
    tolerance: f64,
) -> GpsPoint {
    let a = path[proj.segment_index];
    let b = path[proj.segment_index + 1];
    if sphere.distance(&proj.point, &a) <= tolerance {
        a
    } else if sphere.distance(&proj.point, &b) <= tolerance {
        b
    } else {
        proj.point
    }
}

fn push_distinct(points: &mut Vec<GpsPoint>, p: GpsPoint, sphere: &GreatCircle, tolerance: f64) {
    match points.last() {
        Some(last) if sphere.distance(last, &p) <= tolerance => {}
        _ => points.push(p),
    }
}
