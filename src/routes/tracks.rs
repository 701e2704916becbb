// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Track model routes.
//!
//! Both endpoints take an already-parsed track document as JSON. GPX parsing
//! happens upstream.

use crate::error::Result;
use crate::models::{Track, TrackDocument};
use crate::services::{build_timeline, TrackModel};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;

/// Track routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/tracks/model", post(build_model))
        .route("/api/tracks/timeline", post(build_timeline_geojson))
}

/// Build the full run + timeline model for a track.
async fn build_model(
    State(state): State<Arc<AppState>>,
    Json(doc): Json<TrackDocument>,
) -> Result<Json<TrackModel>> {
    let model = state.visualization_service.build_from_document(doc)?;
    Ok(Json(model))
}

/// Build only the motion timeline, as a GeoJSON FeatureCollection.
async fn build_timeline_geojson(
    Json(doc): Json<TrackDocument>,
) -> Result<Json<geojson::FeatureCollection>> {
    let track = Track::from_document(doc)?;
    let timeline = build_timeline(&track)?;
    tracing::debug!(records = timeline.len(), "Serving timeline");
    Ok(Json(timeline.to_feature_collection()))
}
