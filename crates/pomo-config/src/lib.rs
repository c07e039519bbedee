//! # pomo-config
//!
//! Layered configuration loading for Pomo using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`POMO_*` prefix, `__` as separator)
//! 2. Project-level `.pomo/config.toml`
//! 3. User-level `~/.config/pomo/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `POMO_SERVER__PORT` -> `server.port`,
//! `POMO_LIFECYCLE__POLICY` -> `lifecycle.policy`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use pomo_config::PomoConfig;
//!
//! let config = PomoConfig::load_with_dotenv().expect("config");
//! println!("serving on {}:{}", config.server.host, config.server.port);
//! ```

mod client;
mod database;
mod error;
mod general;
mod lifecycle;
mod server;

pub use client::ClientConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use lifecycle::LifecycleConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PomoConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub lifecycle: LifecycleConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

impl PomoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".pomo/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("POMO_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lifecycle.validate()?;
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pomo").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pomo_core::enums::TransitionPolicy;

    #[test]
    fn default_config_is_valid() {
        let config = PomoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 3456);
        assert_eq!(config.database.path, "pomodoro.db");
        assert_eq!(config.lifecycle.policy, TransitionPolicy::Strict);
        assert_eq!(config.client.base_url, "http://127.0.0.1:3456");
    }

    #[test]
    fn zero_limit_is_invalid() {
        let mut config = PomoConfig::default();
        config.general.default_limit = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "general.default_limit"
        ));
    }
}
