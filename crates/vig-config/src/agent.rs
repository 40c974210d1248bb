//! Text-generation agent configuration.

use serde::{Deserialize, Serialize};

/// Default per-call request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AgentConfig {
    /// API key for the chat-completions endpoint. Required for `run`.
    #[serde(default)]
    pub api_key: String,

    /// Endpoint base URL. Empty means the client's OpenAI default.
    #[serde(default)]
    pub base_url: String,

    /// Model name. Empty means the client's default.
    #[serde(default)]
    pub model: String,

    /// Per-call request timeout in seconds. There are no retries.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: String::new(),
            model: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AgentConfig {
    /// Whether the agent can be called at all.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = AgentConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn configured_when_api_key_set() {
        let config = AgentConfig {
            api_key: "sk-test".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }
}
