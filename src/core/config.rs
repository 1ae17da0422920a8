//! Runtime settings loaded from the environment (and `.env` via dotenv).

use std::env;
use std::time::Duration;

/// Default summary endpoint; the URL-encoded term is appended as the last path segment.
pub const DEFAULT_SUMMARY_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";

/// Default timeout for a single summary lookup.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_SUMMARY_URL: &str = "WIKICHAT_SUMMARY_URL";
pub const ENV_TIMEOUT_SECS: &str = "WIKICHAT_TIMEOUT_SECS";
pub const ENV_SHOW_TIMESTAMPS: &str = "WIKICHAT_SHOW_TIMESTAMPS";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the summary endpoint, without trailing slash.
    pub summary_url: String,
    pub request_timeout: Duration,
    /// Show local times next to history entries.
    pub show_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summary_url: DEFAULT_SUMMARY_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            show_timestamps: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("WIKICHAT_TIMEOUT_SECS must be a positive integer (got {0:?})")]
    InvalidTimeout(String),
    #[error("WIKICHAT_SUMMARY_URL must start with http:// or https:// (got {0:?})")]
    InvalidUrl(String),
}

/// Load configuration from the process environment.
pub fn load() -> Result<Config, ConfigError> {
    load_from(|key| env::var(key).ok())
}

/// Load configuration from an arbitrary key lookup. Empty values count as unset.
pub fn load_from<F>(get: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| get(key).filter(|v| !v.trim().is_empty());
    let mut config = Config::default();

    if let Some(url) = get(ENV_SUMMARY_URL) {
        let url = url.trim().trim_end_matches('/').to_string();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(url));
        }
        config.summary_url = url;
    }

    if let Some(raw) = get(ENV_TIMEOUT_SECS) {
        let secs = raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|s| *s > 0)
            .ok_or(ConfigError::InvalidTimeout(raw))?;
        config.request_timeout = Duration::from_secs(secs);
    }

    config.show_timestamps = get(ENV_SHOW_TIMESTAMPS)
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);

    Ok(config)
}
