// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Run segmentation: pairing a track's segments into ascent/descent runs.
//!
//! Segments alternate lift ride, descent, lift ride, descent, ... When the
//! count is odd the recording started mid-mountain, so the first segment is
//! a descent with no lift before it.

use crate::error::TrackError;
use crate::models::{Run, Segment, Track};

/// How segments are grouped into runs, chosen once from the segment count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingPolicy {
    /// Even count: `(S0, S1), (S2, S3), ...` as `(ascent, descent)`.
    EvenParityPairing,
    /// Odd count: `S0` is a standalone descent, then `S1..` are paired as above.
    OddParityLeadingDescent,
}

impl PairingPolicy {
    pub fn for_segment_count(count: usize) -> Self {
        if count % 2 == 0 {
            PairingPolicy::EvenParityPairing
        } else {
            PairingPolicy::OddParityLeadingDescent
        }
    }
}

/// Split a track into runs, preserving chronological order.
///
/// Never returns an empty list: a track without segments is an error, and a
/// single segment becomes one descent-only run.
pub fn segment_runs(track: &Track) -> Result<Vec<Run<'_>>, TrackError> {
    let segments = track.segments.as_slice();
    if segments.is_empty() {
        return Err(TrackError::NoSegments);
    }

    let policy = PairingPolicy::for_segment_count(segments.len());
    let mut runs = Vec::with_capacity(segments.len() / 2 + 1);

    let paired: &[Segment] = match policy {
        PairingPolicy::EvenParityPairing => segments,
        PairingPolicy::OddParityLeadingDescent => {
            runs.push(Run {
                ascent: None,
                descent: &segments[0],
            });
            &segments[1..]
        }
    };

    runs.extend(paired.chunks_exact(2).map(|pair| Run {
        ascent: Some(&pair[0]),
        descent: &pair[1],
    }));

    tracing::debug!(
        segments = segments.len(),
        runs = runs.len(),
        policy = ?policy,
        "Segmented track into runs"
    );

    Ok(runs)
}
