//! Application configuration loaded from environment variables.

use crate::services::visualization::DEFAULT_PLAYBACK_SPEEDUP;
use std::env;

/// Default request body cap (16 MiB), enough for a full day of 1 Hz samples.
const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Replay speed relative to real time (20.0 = 20x)
    pub playback_speedup: f64,
    /// Largest accepted track document, in bytes
    pub max_body_bytes: usize,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            playback_speedup: DEFAULT_PLAYBACK_SPEEDUP,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default; only malformed values are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let playback_speedup = match env::var("PLAYBACK_SPEEDUP") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v > 0.0)
                .ok_or(ConfigError::Invalid("PLAYBACK_SPEEDUP", raw))?,
            Err(_) => DEFAULT_PLAYBACK_SPEEDUP,
        };

        let max_body_bytes = match env::var("MAX_BODY_BYTES") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::Invalid("MAX_BODY_BYTES", raw))?,
            Err(_) => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            playback_speedup,
            max_body_bytes,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
