// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, Duration, Utc};
use ski_replay::config::Config;
use ski_replay::models::{Segment, Track, TrackDocument, TrackPoint};
use ski_replay::routes::create_router;
use ski_replay::AppState;
use std::sync::Arc;

/// Path of the three-segment JSON fixture (lengths 2, 3, 2).
#[allow(dead_code)]
pub const THREE_SEGMENT_FIXTURE: &str = "tests/fixtures/three_segment_day.json";

/// Load the fixture as raw JSON text.
#[allow(dead_code)]
pub fn fixture_json() -> String {
    std::fs::read_to_string(THREE_SEGMENT_FIXTURE)
        .expect("Failed to read fixture - is tests/fixtures/ committed?")
}

/// Load the fixture as a parsed document.
#[allow(dead_code)]
pub fn fixture_document() -> TrackDocument {
    serde_json::from_str(&fixture_json()).expect("Fixture should deserialize")
}

/// Build a track with segments of the given lengths.
///
/// Points are one second apart across the whole track; speed rises and
/// elevation falls with the global index.
#[allow(dead_code)]
pub fn synthetic_track(lengths: &[usize]) -> Track {
    let base: DateTime<Utc> = "2024-02-03T09:00:00Z".parse().unwrap();
    let mut global = 0i64;
    let segments = lengths
        .iter()
        .map(|&len| {
            let points = (0..len)
                .map(|_| {
                    let i = global;
                    global += 1;
                    TrackPoint {
                        latitude: 40.58 + i as f64 * 1e-4,
                        longitude: -111.64,
                        elevation: Some(3000.0 - i as f64),
                        time: base + Duration::seconds(i),
                        speed: (i % 17) as f64 * 3.5,
                        azimuth: (i * 37 % 360) as f64,
                    }
                })
                .collect();
            Segment::new(points).expect("synthetic segments are non-empty")
        })
        .collect();
    Track::new(Some("synthetic".to_string()), segments)
}

/// Create a test app with default config.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::default()));
    (create_router(state.clone()), state)
}
