// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-run statistics over the descent leg.

use crate::models::{Run, RunStats};
use crate::time_utils::seconds_between;

/// Compute summary statistics for a run.
///
/// Only the descent contributes. Elevation extremes skip points without an
/// elevation. The max-speed point is the first one (lowest index) reaching
/// the maximum, so ties resolve deterministically.
pub fn compute_stats(run: &Run<'_>) -> RunStats {
    let descent = run.descent;
    let start = descent.first();
    let end = descent.last();

    let mut elevation_max: Option<f64> = None;
    let mut elevation_min: Option<f64> = None;
    let mut max_speed_index = 0;

    for (i, p) in descent.points().iter().enumerate() {
        if let Some(ele) = p.elevation {
            elevation_max = Some(elevation_max.map_or(ele, |m| m.max(ele)));
            elevation_min = Some(elevation_min.map_or(ele, |m| m.min(ele)));
        }
        // Strict comparison keeps the earliest maximum.
        if p.speed > descent.points()[max_speed_index].speed {
            max_speed_index = i;
        }
    }

    let duration_secs = seconds_between(start.time, end.time);
    if duration_secs < 0.0 || !descent.is_chronological() {
        tracing::warn!(
            duration_secs,
            "Descent timestamps are not monotonic; duration passed through as-is"
        );
    }

    let max_speed_point = descent.points()[max_speed_index].clone();

    RunStats {
        start: start.clone(),
        end: end.clone(),
        elevation_max,
        elevation_min,
        duration_secs,
        max_speed: max_speed_point.speed,
        max_speed_index,
        max_speed_point,
    }
}
