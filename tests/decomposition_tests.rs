// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Run segmentation, run statistics and timeline tests.
//!
//! These exercise the full decomposition on the JSON fixture and on
//! synthetic tracks of many shapes. If the contiguity checks fail, the
//! replay will show gaps or double markers.

use ski_replay::models::Track;
use ski_replay::services::{build_timeline, compute_stats, segment_runs, VisualizationService};

mod common;

#[test]
fn test_fixture_runs() {
    let track = Track::from_document(common::fixture_document()).expect("Fixture should validate");
    let runs = segment_runs(&track).expect("Fixture has segments");

    assert_eq!(runs.len(), 2);
    assert!(runs[0].ascent.is_none());
    assert_eq!(runs[0].descent, &track.segments[0]);
    assert_eq!(runs[1].ascent, Some(&track.segments[1]));
    assert_eq!(runs[1].descent, &track.segments[2]);

    let first = compute_stats(&runs[0]);
    assert_eq!(first.elevation_max, Some(2900.0));
    assert_eq!(first.elevation_min, Some(2860.5));
    assert_eq!(first.duration_secs, 20.0);
    assert_eq!(first.max_speed, 44.1);
    assert_eq!(first.max_speed_index, 1);

    let second = compute_stats(&runs[1]);
    assert_eq!(second.drop_m(), Some(292.75));
    assert_eq!(second.duration_secs, 150.0);
    assert_eq!(second.max_speed, 52.75);
    assert_eq!(
        second.end_text(),
        "Ending Elevation: 2611.25m\nDrop: 292.75m\nDuration: 2.50min\nMax Speed: 52.75kmph"
    );
}

#[test]
fn test_fixture_timeline() {
    let track = Track::from_document(common::fixture_document()).expect("Fixture should validate");
    let timeline = build_timeline(&track).expect("Fixture has segments");

    assert_eq!(timeline.len(), 7);
    assert_eq!(timeline.total_duration_secs(), 990.0);

    let last = &timeline.records[6];
    assert!(!last.end_exclusive);
    assert_eq!(last.end, last.start);

    // Segment boundary: the last sample of segment 0 runs until segment 1 starts.
    assert_eq!(timeline.records[1].end, timeline.records[2].start);
    assert!(timeline.records[1].end_exclusive);
}

#[test]
fn test_run_count_follows_parity() {
    for count in 1..12 {
        let track = common::synthetic_track(&vec![3; count]);
        let runs = segment_runs(&track).unwrap();
        if count % 2 == 0 {
            assert_eq!(runs.len(), count / 2);
            assert!(runs.iter().all(|r| r.ascent.is_some()));
        } else {
            assert_eq!(runs.len(), count / 2 + 1);
            assert!(runs[0].ascent.is_none());
            assert_eq!(runs[0].descent, &track.segments[0]);
            assert!(runs[1..].iter().all(|r| r.ascent.is_some()));
        }
    }
}

#[test]
fn test_stats_invariants() {
    let track = common::synthetic_track(&[4, 9, 1, 20, 6, 33, 2]);
    for run in segment_runs(&track).unwrap() {
        let stats = compute_stats(&run);
        let max = stats.elevation_max.unwrap();
        let min = stats.elevation_min.unwrap();
        assert!(max >= min);
        assert!(stats.drop_m().unwrap() >= 0.0);
        assert!(stats.duration_secs >= 0.0);

        let points = run.descent.points();
        assert!(points.iter().all(|p| p.speed <= stats.max_speed));
        assert!(points[..stats.max_speed_index]
            .iter()
            .all(|p| p.speed < stats.max_speed));
    }
}

#[test]
fn test_timeline_contiguity_law() {
    for lengths in [&[1][..], &[2, 3, 2], &[5], &[1, 1, 1, 1], &[40, 1, 17, 8]] {
        let track = common::synthetic_track(lengths);
        let timeline = build_timeline(&track).unwrap();
        let n: usize = lengths.iter().sum();

        assert_eq!(timeline.len(), n);
        assert_eq!(timeline.len(), track.point_count());
        for (i, (record, point)) in timeline.records.iter().zip(track.points()).enumerate() {
            assert_eq!(record.index, i);
            assert_eq!(record.start, point.time);
            assert_eq!(record.latitude, point.latitude);
        }
        for pair in timeline.records.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert!(pair[0].end_exclusive);
        }
        let last = &timeline.records[n - 1];
        assert_eq!(last.end, last.start);
        assert!(!last.end_exclusive);
    }
}

#[test]
fn test_single_point_track() {
    let track = common::synthetic_track(&[1]);
    let runs = segment_runs(&track).unwrap();
    assert_eq!(runs.len(), 1);
    assert!(runs[0].ascent.is_none());
    assert_eq!(compute_stats(&runs[0]).duration_secs, 0.0);

    let timeline = build_timeline(&track).unwrap();
    assert_eq!(timeline.len(), 1);
    assert!(!timeline.records[0].end_exclusive);
}

#[test]
fn test_pipeline_is_idempotent() {
    let track = Track::from_document(common::fixture_document()).unwrap();

    let runs_a: Vec<_> = segment_runs(&track).unwrap().iter().map(compute_stats).collect();
    let runs_b: Vec<_> = segment_runs(&track).unwrap().iter().map(compute_stats).collect();
    assert_eq!(runs_a, runs_b);
    assert_eq!(build_timeline(&track).unwrap(), build_timeline(&track).unwrap());

    let service = VisualizationService::default();
    let model_a = serde_json::to_string(&service.build(&track).unwrap()).unwrap();
    let model_b = serde_json::to_string(&service.build(&track).unwrap()).unwrap();
    assert_eq!(model_a, model_b);
}
