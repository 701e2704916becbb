// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Global motion timeline across every segment of a track.

use crate::error::TrackError;
use crate::models::{format_elevation, MotionRecord, Timeline, Track, TrackPoint};

/// Build one [`MotionRecord`] per point, in recorded order.
///
/// Run boundaries are ignored. Record `i` covers `[t(i), t(i+1))`; the final
/// record covers the zero-length `[t(last), t(last)]` with
/// `end_exclusive == false`. Equal consecutive timestamps produce
/// zero-length intervals and are kept as-is.
pub fn build_timeline(track: &Track) -> Result<Timeline, TrackError> {
    if track.segments.is_empty() {
        return Err(TrackError::NoSegments);
    }

    let points: Vec<&TrackPoint> = track.points().collect();
    let last = points.len() - 1;

    let records: Vec<MotionRecord> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let (end, end_exclusive) = if i < last {
                (points[i + 1].time, true)
            } else {
                (p.time, false)
            };
            MotionRecord {
                index: i,
                latitude: p.latitude,
                longitude: p.longitude,
                elevation: p.elevation,
                speed: p.speed,
                azimuth: p.azimuth,
                text: motion_text(p),
                start: p.time,
                end,
                end_exclusive,
            }
        })
        .collect();

    tracing::debug!(records = records.len(), "Built motion timeline");
    Ok(Timeline { records })
}

/// Hover text for a sample, e.g. `"Elevation: 2750.00m\nSpeed: 48.20kmph"`.
fn motion_text(p: &TrackPoint) -> String {
    format!(
        "Elevation: {}\nSpeed: {:.2}kmph",
        format_elevation(p.elevation),
        p.speed
    )
}
