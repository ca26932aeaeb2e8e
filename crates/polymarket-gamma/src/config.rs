//! Client configuration
//!
//! All settings are optional. `GammaConfig::default()` targets the production
//! Gamma host with a 30 second timeout.

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::warn;

use crate::GAMMA_API_BASE;

/// Default per-call timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "GAMMA_API_BASE_URL";

/// Environment variable overriding the timeout (milliseconds)
pub const ENV_TIMEOUT_MS: &str = "GAMMA_TIMEOUT_MS";

/// Construction-time settings for [`GammaClient`](crate::GammaClient)
#[derive(Clone, Debug)]
pub struct GammaConfig {
    /// Base address that relative paths are resolved against
    pub base_url: String,
    /// Upper bound on each call, including body download
    pub timeout: Duration,
    /// Headers merged over the `Content-Type: application/json` baseline,
    /// keyed by lowercase name
    pub default_headers: BTreeMap<String, String>,
}

impl Default for GammaConfig {
    fn default() -> Self {
        Self {
            base_url: GAMMA_API_BASE.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            default_headers: BTreeMap::new(),
        }
    }
}

impl GammaConfig {
    /// Defaults overlaid with `GAMMA_API_BASE_URL` / `GAMMA_TIMEOUT_MS`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            if !base_url.trim().is_empty() {
                config = config.with_base_url(base_url.trim());
            }
        }

        if let Ok(raw) = std::env::var(ENV_TIMEOUT_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config = config.with_timeout_ms(ms),
                Err(e) => warn!("Ignoring {}={:?}: {}", ENV_TIMEOUT_MS, raw, e),
            }
        }

        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_timeout_ms(self, timeout_ms: u64) -> Self {
        self.with_timeout(Duration::from_millis(timeout_ms))
    }

    /// Add a header sent with every request. A later call with the same name
    /// (compared case-insensitively) wins.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into().to_ascii_lowercase(), value.into());
        self
    }
}
