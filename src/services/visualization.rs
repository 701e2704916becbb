// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Track model assembly.
//!
//! Runs the whole decomposition for one track:
//! 1. Validate the parsed document into a typed track
//! 2. Segment it into runs and compute per-run statistics
//! 3. Build the global motion timeline
//! 4. Package paths, stats and timeline for the renderer

use crate::error::TrackError;
use crate::models::run::RunStatsSummary;
use crate::models::{LatLon, RunSummary, Track, TrackDocument};
use crate::services::{build_timeline, compute_stats, segment_runs};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Default playback rate relative to real time.
pub const DEFAULT_PLAYBACK_SPEEDUP: f64 = 20.0;

/// Everything the map renderer needs for one track.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TrackModel {
    pub name: Option<String>,
    /// Initial map center: first point of the first run's descent
    pub focal_point: LatLon,
    pub runs: Vec<RunSummary>,
    /// One Point feature per recorded sample
    #[cfg_attr(feature = "binding-generation", ts(type = "unknown"))]
    pub timeline: geojson::FeatureCollection,
    /// Number of timeline steps (one per sample)
    pub steps: usize,
    /// Seconds between the first and last sample
    pub total_duration_secs: f64,
    /// Suggested wall-clock length of a full replay
    pub playback_duration_ms: f64,
}

/// Builds [`TrackModel`]s at a fixed playback speedup.
#[derive(Debug, Clone)]
pub struct VisualizationService {
    playback_speedup: f64,
}

impl Default for VisualizationService {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYBACK_SPEEDUP)
    }
}

impl VisualizationService {
    pub fn new(playback_speedup: f64) -> Self {
        Self { playback_speedup }
    }

    pub fn playback_speedup(&self) -> f64 {
        self.playback_speedup
    }

    /// Validate a parsed document and build its model.
    pub fn build_from_document(&self, doc: TrackDocument) -> Result<TrackModel, TrackError> {
        let track = Track::from_document(doc)?;
        self.build(&track)
    }

    /// Build the full model for a validated track.
    ///
    /// Fails without partial output if the track has no segments.
    pub fn build(&self, track: &Track) -> Result<TrackModel, TrackError> {
        let runs = segment_runs(track)?;
        let timeline = build_timeline(track)?;

        let focal_point = LatLon::from(runs[0].descent.first());

        let summaries: Vec<RunSummary> = runs
            .iter()
            .enumerate()
            .map(|(i, run)| {
                let stats = compute_stats(run);
                RunSummary {
                    label: format!("Run {}", i + 1),
                    ascent: run
                        .ascent
                        .map(|s| geojson::Geometry::new(geojson::Value::from(&s.line_string()))),
                    descent: geojson::Geometry::new(geojson::Value::from(
                        &run.descent.line_string(),
                    )),
                    stats: RunStatsSummary::from(&stats),
                }
            })
            .collect();

        let total_duration_secs = timeline.total_duration_secs();
        let playback_duration_ms = total_duration_secs * 1000.0 / self.playback_speedup;

        tracing::info!(
            name = ?track.name,
            runs = summaries.len(),
            points = timeline.len(),
            total_duration_secs,
            "Built track model"
        );

        Ok(TrackModel {
            name: track.name.clone(),
            focal_point,
            runs: summaries,
            steps: timeline.len(),
            timeline: timeline.to_feature_collection(),
            total_duration_secs,
            playback_duration_ms,
        })
    }
}
