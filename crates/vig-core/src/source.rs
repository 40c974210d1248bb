//! Monitored source definitions.

use serde::{Deserialize, Serialize};

/// Record shape a source's listings follow.
///
/// Drives prompt construction and which auxiliary fields extraction keeps.
/// Identity never depends on the variant — only title and deadline
/// participate (plus the source name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceSchema {
    /// Title and date only.
    #[default]
    Plain,
    /// Title and date plus an identifier-like label (e.g. a call number)
    /// and a one-line summary.
    Labeled,
}

/// One monitored external listing.
///
/// Immutable for the duration of a run; built from configuration at process
/// start. `label` and `color` are cosmetic display attributes for the digest
/// and carry no dedup semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Unique, stable name. Participates in record identity.
    pub name: String,
    /// Page URL or locator handed to the agent.
    pub location: String,
    /// Record shape this source's listings follow.
    #[serde(default)]
    pub schema: SourceSchema,
    /// Human-readable heading for the digest.
    #[serde(default)]
    pub label: String,
    /// Accent color (hex) for the digest heading.
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "#4a5568".to_string()
}

impl Source {
    /// Digest heading, falling back to the source name when no label is set.
    #[must_use]
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }
}
