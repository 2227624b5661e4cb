//! Configuration Module
//!
//! Handles loading the cache and client settings from environment variables.

use std::env;
use std::time::Duration;

/// Default reap interval in milliseconds
const DEFAULT_CACHE_INTERVAL_MS: u64 = 5_000;
/// Default PokeAPI root
const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
/// Default per-request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Application configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Reap period and staleness threshold of the response cache
    pub cache_interval: Duration,
    /// Root URL of the PokeAPI, without trailing slash
    pub api_base_url: String,
    /// Timeout applied to every outgoing HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_INTERVAL_MS` - Cache reap interval in milliseconds (default: 5000)
    /// - `POKEAPI_BASE_URL` - API root URL (default: https://pokeapi.co/api/v2)
    /// - `REQUEST_TIMEOUT_SECS` - HTTP request timeout in seconds (default: 10)
    ///
    /// A zero interval is loaded as-is; `Cache::new` rejects it.
    pub fn from_env() -> Self {
        Self {
            cache_interval: Duration::from_millis(
                env::var("CACHE_INTERVAL_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_CACHE_INTERVAL_MS),
            ),
            api_base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            request_timeout: Duration::from_secs(
                env::var("REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
        }
    }

    /// URL of the first location-area listing page.
    pub fn location_area_url(&self) -> String {
        format!("{}/location-area", self.api_base_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval: Duration::from_millis(DEFAULT_CACHE_INTERVAL_MS),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}
