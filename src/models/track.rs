// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recorded track model: the parsed input document and its validated form.
//!
//! A [`TrackDocument`] is what a GPX parser hands over: tracks, segments and
//! points, with per-point extension attributes left as an open key/value bag.
//! [`Track::from_document`] turns that into a [`Track`] whose points carry
//! typed `speed` and `azimuth` values, rejecting anything that cannot be
//! decomposed later.

use crate::error::TrackError;
use chrono::{DateTime, Utc};
use geo::{Coord, LineString, Point};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Extension attribute holding the sample speed (km/h).
pub const SPEED_EXTENSION: &str = "speed";
/// Extension attribute holding the heading of travel (degrees, 0-360).
pub const AZIMUTH_EXTENSION: &str = "azimuth";

// ─── Input Document ──────────────────────────────────────────

/// Parsed track-recording document, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackDocument {
    #[serde(default)]
    pub tracks: Vec<RawTrack>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTrack {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub segments: Vec<RawSegment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSegment {
    #[serde(default)]
    pub points: Vec<RawPoint>,
}

/// One sample as the parser produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPoint {
    pub lat: f64,
    pub lon: f64,
    /// Elevation in meters, if the recorder logged one
    #[serde(default)]
    pub ele: Option<f64>,
    pub time: DateTime<Utc>,
    /// Extension attributes by name; values are usually strings (XML attributes)
    #[serde(default)]
    pub extensions: BTreeMap<String, Value>,
}

// ─── Validated Track ─────────────────────────────────────────

/// One GPS sample with its extension fields extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    /// Degrees, WGS84
    pub latitude: f64,
    /// Degrees, WGS84
    pub longitude: f64,
    /// Meters; absent values are carried through, never defaulted
    pub elevation: Option<f64>,
    pub time: DateTime<Utc>,
    /// km/h
    pub speed: f64,
    /// Degrees, 0-360
    pub azimuth: f64,
}

impl TrackPoint {
    /// Position as a geo coordinate (x = longitude, y = latitude).
    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }

    pub fn point(&self) -> Point<f64> {
        Point::from(self.coord())
    }
}

/// A contiguous recording, e.g. one lift ride or one descent.
///
/// Never empty: [`Segment::new`] refuses an empty point list.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    points: Vec<TrackPoint>,
}

impl Segment {
    /// Returns `None` if `points` is empty.
    pub fn new(points: Vec<TrackPoint>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    pub fn points(&self) -> &[TrackPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> &TrackPoint {
        &self.points[0]
    }

    pub fn last(&self) -> &TrackPoint {
        &self.points[self.points.len() - 1]
    }

    /// Whether timestamps never decrease along the segment.
    pub fn is_chronological(&self) -> bool {
        self.points.windows(2).all(|w| w[0].time <= w[1].time)
    }

    /// Path of the segment for rendering.
    pub fn line_string(&self) -> LineString<f64> {
        self.points.iter().map(TrackPoint::coord).collect()
    }
}

/// The single track of an activity: chronologically ordered segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub name: Option<String>,
    pub segments: Vec<Segment>,
}

impl Track {
    pub fn new(name: Option<String>, segments: Vec<Segment>) -> Self {
        Self { name, segments }
    }

    /// Validate a parsed document and extract typed point fields.
    ///
    /// The document must hold exactly one track, every segment must have at
    /// least one point, and every point must carry numeric `speed` and
    /// `azimuth` extensions. A track with zero segments is accepted here and
    /// rejected by the stages that need a first point.
    pub fn from_document(doc: TrackDocument) -> Result<Self, TrackError> {
        if doc.tracks.len() != 1 {
            return Err(TrackError::TrackCount {
                found: doc.tracks.len(),
            });
        }
        let Some(raw) = doc.tracks.into_iter().next() else {
            return Err(TrackError::TrackCount { found: 0 });
        };

        let mut segments = Vec::with_capacity(raw.segments.len());
        for (seg_idx, raw_segment) in raw.segments.into_iter().enumerate() {
            let points = raw_segment
                .points
                .into_iter()
                .enumerate()
                .map(|(pt_idx, p)| extract_point(p, seg_idx, pt_idx))
                .collect::<Result<Vec<_>, _>>()?;
            let segment =
                Segment::new(points).ok_or(TrackError::EmptySegment { segment: seg_idx })?;
            segments.push(segment);
        }

        Ok(Self {
            name: raw.name,
            segments,
        })
    }

    /// All points across all segments, in recorded order.
    pub fn points(&self) -> impl Iterator<Item = &TrackPoint> {
        self.segments.iter().flat_map(|s| s.points().iter())
    }

    pub fn point_count(&self) -> usize {
        self.segments.iter().map(Segment::len).sum()
    }
}

fn extract_point(raw: RawPoint, segment: usize, point: usize) -> Result<TrackPoint, TrackError> {
    let speed = read_extension(&raw.extensions, SPEED_EXTENSION, segment, point)?;
    let azimuth = read_extension(&raw.extensions, AZIMUTH_EXTENSION, segment, point)?;
    Ok(TrackPoint {
        latitude: raw.lat,
        longitude: raw.lon,
        elevation: raw.ele,
        time: raw.time,
        speed,
        azimuth,
    })
}

/// Read a numeric extension attribute by name.
///
/// Accepts either a JSON number or a string holding one; anything that does
/// not yield a finite float is rejected.
fn read_extension(
    extensions: &BTreeMap<String, Value>,
    field: &'static str,
    segment: usize,
    point: usize,
) -> Result<f64, TrackError> {
    let value = extensions
        .get(field)
        .ok_or(TrackError::MissingExtension {
            segment,
            point,
            field,
        })?;

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(TrackError::InvalidExtension {
            segment,
            point,
            field,
            value: match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        }),
    }
}
