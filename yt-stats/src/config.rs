//! Startup configuration taken from the environment.

use crate::error::StatsError;
use crate::youtube_api::{ApiKey, DEFAULT_BASE_URL};
use std::env;

/// Variable holding the Google API key.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
/// Optional override of the API root, e.g. to point at a local mock server.
pub const BASE_URL_VAR: &str = "YOUTUBE_API_BASE_URL";

/// Loads `.env` from the working directory (or a parent) if there is one.
///
/// Variables already set in the process environment win over the file.
pub fn load_environment() {
    match dotenv::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("ignoring unreadable environment file: {e}"),
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: ApiKey,
    pub base_url: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// A missing or empty API key is [`StatsError::MissingCredential`].
    pub fn from_env() -> Result<Self, StatsError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StatsError> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(StatsError::MissingCredential(API_KEY_VAR))?;
        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key: ApiKey::new(api_key.trim()),
            base_url,
        })
    }
}
