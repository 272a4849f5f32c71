//! Verification backend connection settings.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL of the verification backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// Base URL without a trailing slash, ready for path concatenation.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn base_strips_trailing_slash() {
        let config = BackendConfig {
            base_url: "https://api.trustcheck.example/".into(),
            ..Default::default()
        };
        assert_eq!(config.base(), "https://api.trustcheck.example");
    }
}
