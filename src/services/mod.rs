// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - track decomposition logic.

pub mod segmenter;
pub mod stats;
pub mod timeline;
pub mod visualization;

pub use segmenter::{segment_runs, PairingPolicy};
pub use stats::compute_stats;
pub use timeline::build_timeline;
pub use visualization::{TrackModel, VisualizationService};
