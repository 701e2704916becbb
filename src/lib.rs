// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Ski-Replay: turn a recorded ski day into an animated map model
//!
//! This crate decomposes a parsed GPS track into lift/descent runs with
//! summary statistics, and into a per-sample motion timeline for playback.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::VisualizationService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub visualization_service: VisualizationService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let visualization_service = VisualizationService::new(config.playback_speedup);
        Self {
            config,
            visualization_service,
        }
    }
}
