// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod run;
pub mod timeline;
pub mod track;

pub use run::{Run, RunStats, RunSummary};
pub use timeline::{MotionRecord, Timeline};
pub use track::{Segment, Track, TrackDocument, TrackPoint};

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A latitude/longitude pair for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl From<&TrackPoint> for LatLon {
    fn from(p: &TrackPoint) -> Self {
        Self {
            lat: p.latitude,
            lon: p.longitude,
        }
    }
}

/// Elevation for display text, e.g. `"3201.50m"`, or `"n/a"` when absent.
pub(crate) fn format_elevation(elevation: Option<f64>) -> String {
    match elevation {
        Some(e) => format!("{:.2}m", e),
        None => "n/a".to_string(),
    }
}
