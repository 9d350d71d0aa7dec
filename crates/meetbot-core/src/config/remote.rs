//! Remote admin API configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for the remote admin API backing store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the admin API (e.g. `https://api.example.com`).
    pub base_url: String,
    /// Per-request timeout in seconds. A timed-out request is reported as
    /// a failure of the operation that issued it; nothing is retried.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl RemoteConfig {
    /// Creates a config with default timeouts for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}
