// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Per-sample motion timeline for animated playback.

use crate::time_utils::{format_utc_rfc3339, seconds_between};
use chrono::{DateTime, Utc};
use geojson::{feature::Id, Feature, FeatureCollection, Geometry};

/// Metrics and playback interval for one sample of the flattened track.
///
/// The interval is `[start, end)` when `end_exclusive` is true. The last
/// record of a timeline has `end == start` and `end_exclusive == false`.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionRecord {
    /// 0-based index across all segments
    pub index: usize,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>,
    /// km/h
    pub speed: f64,
    /// Degrees, 0-360
    pub azimuth: f64,
    /// Human-readable summary (elevation and speed)
    pub text: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub end_exclusive: bool,
}

impl MotionRecord {
    /// Convert to a GeoJSON Point feature keyed by `index`.
    pub fn to_feature(&self) -> Feature {
        let point = geo::Point::new(self.longitude, self.latitude);
        let mut feature = Feature {
            bbox: None,
            geometry: Some(Geometry::new(geojson::Value::from(&point))),
            id: Some(Id::Number(self.index.into())),
            properties: None,
            foreign_members: None,
        };
        feature.set_property("elevation", self.elevation);
        feature.set_property("speed", self.speed);
        feature.set_property("azimuth", self.azimuth);
        feature.set_property("text", self.text.clone());
        feature.set_property("start", format_utc_rfc3339(self.start));
        feature.set_property("end", format_utc_rfc3339(self.end));
        feature.set_property("endExclusive", self.end_exclusive);
        feature
    }
}

/// Ordered motion records, one per recorded point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    pub records: Vec<MotionRecord>,
}

impl Timeline {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Seconds from the first record's start to the last record's start.
    pub fn total_duration_secs(&self) -> f64 {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => seconds_between(first.start, last.start),
            _ => 0.0,
        }
    }

    pub fn to_feature_collection(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.records.iter().map(MotionRecord::to_feature).collect(),
            foreign_members: None,
        }
    }
}
