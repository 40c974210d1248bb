//! Seen-set store configuration.

use serde::{Deserialize, Serialize};

/// Default database path, relative to the working directory.
fn default_path() -> String {
    "vigia.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path to the libSQL database file.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_local_file() {
        assert_eq!(StoreConfig::default().path, "vigia.db");
    }
}
