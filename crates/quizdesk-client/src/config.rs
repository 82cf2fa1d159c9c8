//! Client settings loaded via OrthoConfig.
//!
//! Layers, lowest precedence first: defaults, configuration file,
//! `QUIZDESK_CLIENT_*` environment variables, command-line flags.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the client sends requests and how long it waits for them.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "QUIZDESK_CLIENT")]
pub struct ClientSettings {
    /// Base address of the API.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl ClientSettings {
    /// The configured base URL, falling back to the local API on port 5000.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    /// Request timeout; a zero setting falls back to the default.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        )
    }
}
