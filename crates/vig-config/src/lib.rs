//! # vig-config
//!
//! Layered configuration loading for Vigia using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VIGIA_*` prefix, `__` as separator)
//! 2. Project-level `.vigia/config.toml`
//! 3. User-level `~/.config/vigia/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `VIGIA_AGENT__API_KEY` -> `agent.api_key`,
//! `VIGIA_MAIL__TO` -> `mail.to`, etc. The `__` (double underscore)
//! separates nested config sections.

mod agent;
mod error;
mod mail;
mod sources;
mod store;

pub use agent::AgentConfig;
pub use error::ConfigError;
pub use mail::MailConfig;
pub use sources::default_sources;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use vig_core::Source;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VigiaConfig {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub store: StoreConfig,
    /// Source catalog. Empty means the built-in defaults.
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl VigiaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` — use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "merging user-level config");
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".vigia/config.toml");
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "merging project-level config");
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("VIGIA_").split("__"))
    }

    /// The sources a pass will watch: configured ones, or the built-in
    /// catalog when the configuration lists none.
    #[must_use]
    pub fn effective_sources(&self) -> Vec<Source> {
        if self.sources.is_empty() {
            default_sources()
        } else {
            self.sources.clone()
        }
    }

    /// Fail unless agent credentials are present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the agent API key is
    /// missing — a startup failure for `run`, per the interface contract.
    pub fn require_agent(&self) -> Result<(), ConfigError> {
        if self.agent.is_configured() {
            Ok(())
        } else {
            Err(ConfigError::NotConfigured {
                section: "agent".to_string(),
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vigia").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = VigiaConfig::default();
        assert!(!config.agent.is_configured());
        assert!(!config.mail.is_configured());
        assert_eq!(config.store.path, "vigia.db");
        assert!(config.sources.is_empty());
    }

    #[test]
    fn empty_sources_fall_back_to_builtin_catalog() {
        let config = VigiaConfig::default();
        let sources = config.effective_sources();
        assert!(!sources.is_empty());
        assert!(sources.iter().any(|s| s.name == "IPEA"));
    }

    #[test]
    fn configured_sources_replace_builtin_catalog() {
        let config: VigiaConfig = toml::from_str(
            r#"
            [[sources]]
            name = "Jobs"
            location = "https://example.test/jobs"
            "#,
        )
        .unwrap();
        let sources = config.effective_sources();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, "Jobs");
    }

    #[test]
    fn require_agent_without_key_fails() {
        let config = VigiaConfig::default();
        assert!(matches!(
            config.require_agent(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn project_config_file_is_merged() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".vigia")?;
            jail.create_file(
                ".vigia/config.toml",
                r#"
                [agent]
                model = "local-model"

                [store]
                path = "project.db"
                "#,
            )?;
            let config: VigiaConfig = VigiaConfig::figment().extract()?;
            assert_eq!(config.agent.model, "local-model");
            assert_eq!(config.store.path, "project.db");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_project_config_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".vigia")?;
            jail.create_file(".vigia/config.toml", "[store]\npath = \"project.db\"\n")?;
            jail.set_env("VIGIA_STORE__PATH", "env.db");
            let config: VigiaConfig = VigiaConfig::figment().extract()?;
            assert_eq!(config.store.path, "env.db");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("VIGIA_AGENT__API_KEY", "sk-jail");
            jail.set_env("VIGIA_STORE__PATH", "/tmp/jail.db");
            let config: VigiaConfig = VigiaConfig::figment().extract()?;
            assert_eq!(config.agent.api_key, "sk-jail");
            assert_eq!(config.store.path, "/tmp/jail.db");
            assert!(config.require_agent().is_ok());
            Ok(())
        });
    }
}
