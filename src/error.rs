// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for track decomposition and the HTTP layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Fatal input errors raised while validating or decomposing a track.
///
/// Segment and point indices are 0-based; `point` is the index within its
/// segment.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrackError {
    #[error("exactly one track required, found {found}")]
    TrackCount { found: usize },

    #[error("track has no segments")]
    NoSegments,

    #[error("segment {segment} has no points")]
    EmptySegment { segment: usize },

    #[error("segment {segment} point {point}: missing `{field}` extension")]
    MissingExtension {
        segment: usize,
        point: usize,
        field: &'static str,
    },

    #[error("segment {segment} point {point}: `{field}` extension is not a number: {value:?}")]
    InvalidExtension {
        segment: usize,
        point: usize,
        field: &'static str,
        value: String,
    },
}

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid track: {0}")]
    InvalidTrack(#[from] TrackError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::InvalidTrack(err) => {
                tracing::info!(error = %err, "Rejected track");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "invalid_track",
                    Some(err.to_string()),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
