// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Runs (lift + descent pairings) and their summary statistics.

use super::{format_elevation, LatLon, Segment, TrackPoint};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// An optional ascent leg followed by a descent leg.
///
/// Borrows its segments from the [`Track`](super::Track) it was cut from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Run<'a> {
    /// Lift ride (or hike up); absent for a leading descent-only run
    pub ascent: Option<&'a Segment>,
    pub descent: &'a Segment,
}

/// Statistics over a run's descent leg.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStats {
    /// First point of the descent
    pub start: TrackPoint,
    /// Last point of the descent
    pub end: TrackPoint,
    /// `None` when no descent point has an elevation
    pub elevation_max: Option<f64>,
    pub elevation_min: Option<f64>,
    /// Seconds from first to last descent point; negative only if timestamps
    /// go backwards
    pub duration_secs: f64,
    /// km/h
    pub max_speed: f64,
    /// Index within the descent of the first point reaching `max_speed`
    pub max_speed_index: usize,
    pub max_speed_point: TrackPoint,
}

impl RunStats {
    /// Elevation lost over the descent (max - min), never negative.
    pub fn drop_m(&self) -> Option<f64> {
        match (self.elevation_max, self.elevation_min) {
            (Some(max), Some(min)) => Some(max - min),
            _ => None,
        }
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration_secs / 60.0
    }

    /// Tooltip for the start-of-descent marker.
    pub fn start_text(&self) -> String {
        format!("Starting Elevation: {}", format_elevation(self.elevation_max))
    }

    /// Tooltip for the end-of-descent marker.
    pub fn end_text(&self) -> String {
        format!(
            "Ending Elevation: {}\nDrop: {}\nDuration: {:.2}min\nMax Speed: {:.2}kmph",
            format_elevation(self.elevation_min),
            format_elevation(self.drop_m()),
            self.duration_minutes(),
            self.max_speed
        )
    }

    /// Popup for the descent path.
    pub fn descent_text(&self) -> String {
        format!("Max Speed: {:.2}kmph", self.max_speed)
    }
}

// ─── API Representation ──────────────────────────────────────

/// One run as handed to the map renderer.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RunSummary {
    /// "Run 1", "Run 2", ...
    pub label: String,
    /// LineString of the ascent, if any
    #[cfg_attr(feature = "binding-generation", ts(type = "unknown | null"))]
    pub ascent: Option<geojson::Geometry>,
    /// LineString of the descent
    #[cfg_attr(feature = "binding-generation", ts(type = "unknown"))]
    pub descent: geojson::Geometry,
    pub stats: RunStatsSummary,
}

/// Serializable form of [`RunStats`] plus its display text.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RunStatsSummary {
    pub start: LatLon,
    pub end: LatLon,
    pub elevation_max: Option<f64>,
    pub elevation_min: Option<f64>,
    pub drop_m: Option<f64>,
    pub duration_secs: f64,
    pub max_speed_kmh: f64,
    pub max_speed_location: LatLon,
    pub start_text: String,
    pub end_text: String,
    pub descent_text: String,
}

impl From<&RunStats> for RunStatsSummary {
    fn from(stats: &RunStats) -> Self {
        Self {
            start: LatLon::from(&stats.start),
            end: LatLon::from(&stats.end),
            elevation_max: stats.elevation_max,
            elevation_min: stats.elevation_min,
            drop_m: stats.drop_m(),
            duration_secs: stats.duration_secs,
            max_speed_kmh: stats.max_speed,
            max_speed_location: LatLon::from(&stats.max_speed_point),
            start_text: stats.start_text(),
            end_text: stats.end_text(),
            descent_text: stats.descent_text(),
        }
    }
}
