//! Outbound mail configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MailConfig {
    /// API key for the mail HTTP API.
    #[serde(default)]
    pub api_key: String,

    /// Sender address (e.g., `vigia@example.org`).
    #[serde(default)]
    pub from: String,

    /// Recipient address. Empty means no notification is sent — a pass
    /// still runs and records what it saw.
    #[serde(default)]
    pub to: String,
}

impl MailConfig {
    /// Whether a digest can actually be delivered.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.from.is_empty() && !self.to.is_empty()
    }
}
