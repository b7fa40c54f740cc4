//! # Snap to Road
//!
//! Snaps a GPS fix onto the part of a route relevant to where the vehicle is
//! in its stop sequence.
//!
//! The previous, current and next waypoints that are known select a window of
//! the route (see [`SnapMode`]). The route is sliced to that window first and
//! the fix is located on the slice only, so a point near an overlapping or
//! looping stretch of road cannot jump to a geometrically closer part of the
//! route that the vehicle is not on.

use std::fmt;

use log::{debug, warn};

use crate::locate::locate_on_path_with;
use crate::slice::slice_path_with;
use crate::{GpsPoint, Result, SnapConfig, SnapError};

/// The waypoints surrounding a fix. Any of them may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SnapContext {
    pub previous: Option<GpsPoint>,
    pub current: Option<GpsPoint>,
    pub next: Option<GpsPoint>,
}

impl SnapContext {
    pub fn new(
        previous: Option<GpsPoint>,
        current: Option<GpsPoint>,
        next: Option<GpsPoint>,
    ) -> Self {
        Self { previous, current, next }
    }

    /// Pick the snapping mode and its route window.
    ///
    /// Fails with [`SnapError::AmbiguousContext`] when the known waypoints match
    /// none of the modes.
    pub fn window(&self) -> Result<(SnapMode, GpsPoint, GpsPoint)> {
        match (self.previous, self.current, self.next) {
            (None, Some(current), Some(next)) => Ok((SnapMode::StartOfRoute, current, next)),
            (Some(previous), None, Some(next)) => Ok((SnapMode::Departure, previous, next)),
            (Some(_), Some(current), Some(next)) => Ok((SnapMode::Arrival, current, next)),
            (Some(previous), Some(current), None) => Ok((SnapMode::EndToEnd, previous, current)),
            _ => Err(SnapError::AmbiguousContext {
                previous: self.previous.is_some(),
                current: self.current.is_some(),
                next: self.next.is_some(),
            }),
        }
    }
}

/// Which route window a fix is snapped within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapMode {
    /// No previous waypoint: window is current to next.
    StartOfRoute,
    /// Between waypoints with no current one: window is previous to next.
    Departure,
    /// All three known: window is current to next.
    Arrival,
    /// No next waypoint: window is previous to current.
    EndToEnd,
}

impl fmt::Display for SnapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SnapMode::StartOfRoute => "start-of-route",
            SnapMode::Departure => "departure",
            SnapMode::Arrival => "arrival",
            SnapMode::EndToEnd => "end-to-end",
        };
        f.write_str(name)
    }
}

/// A fix snapped onto its route window.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapResult {
    /// Snapped location on the route
    pub point: GpsPoint,
    /// Distance from the fix to `point`, in meters
    pub distance_meters: f64,
    /// Distance along the window from its start to `point`, in meters
    pub along_path_meters: f64,
    /// Mode that selected the window
    pub mode: SnapMode,
}

/// Snaps fixes onto a route with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct RoadSnapper {
    config: SnapConfig,
}

impl RoadSnapper {
    pub fn new(config: SnapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Snap `target` onto the window of `path` selected by `context`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geosegment::{GpsPoint, RoadSnapper, SnapContext, SnapMode};
    ///
    /// let path = vec![
    ///     GpsPoint::from_lng_lat(0.0, 0.0),
    ///     GpsPoint::from_lng_lat(0.0, 1.0),
    ///     GpsPoint::from_lng_lat(1.0, 1.0),
    /// ];
    /// let context = SnapContext::new(
    ///     None,
    ///     Some(GpsPoint::from_lng_lat(0.0, 0.0)),
    ///     Some(GpsPoint::from_lng_lat(0.0, 1.0)),
    /// );
    ///
    /// let snapped = RoadSnapper::default()
    ///     .snap(&context, &GpsPoint::from_lng_lat(0.1, 0.5), &path)
    ///     .unwrap();
    ///
    /// assert_eq!(snapped.mode, SnapMode::StartOfRoute);
    /// assert_eq!(snapped.point, GpsPoint::from_lng_lat(0.0, 0.5));
    /// ```
    pub fn snap(
        &self,
        context: &SnapContext,
        target: &GpsPoint,
        path: &[GpsPoint],
    ) -> Result<SnapResult> {
        let (mode, from, to) = context.window().inspect_err(|e| warn!("{}", e))?;

        let window = slice_path_with(&from, &to, path, &self.config)?;
        debug!("snapping in {} mode on a {}-point window", mode, window.len());

        let nearest = locate_on_path_with(target, &window, &self.config.sphere())?;

        Ok(SnapResult {
            point: nearest.point,
            distance_meters: nearest.distance_meters,
            along_path_meters: nearest.along_path_meters,
            mode,
        })
    }
}

/// Snap `target` onto `path` given the surrounding waypoints, with the default
/// configuration.
pub fn snap_to_road(
    previous: Option<GpsPoint>,
    next: Option<GpsPoint>,
    current: Option<GpsPoint>,
    target: &GpsPoint,
    path: &[GpsPoint],
) -> Result<SnapResult> {
    RoadSnapper::default().snap(&SnapContext::new(previous, current, next), target, path)
}
