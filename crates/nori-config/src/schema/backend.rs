//! Retrieval backend connection settings.

use serde::{Deserialize, Serialize};

/// Where and how to reach the retrieval backend.
///
/// An empty `url` is a valid config: the client starts, but every
/// submission is blocked with a configuration notice until one is set.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSection {
    pub url: String,
    /// Sent as `x-api-key` when non-empty.
    pub api_key: String,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u32,
}

impl BackendSection {
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    pub fn api_key(&self) -> Option<&str> {
        let key = self.api_key.trim();
        (!key.is_empty()).then_some(key)
    }
}

impl std::fmt::Debug for BackendSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendSection")
            .field("url", &self.url)
            .field(
                "api_key",
                &if self.api_key.is_empty() { "" } else { "[REDACTED]" },
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            timeout_secs: 60,
        }
    }
}
