//! # hn-config
//!
//! Layered configuration loading for hackernews using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HN_*` prefix, `__` as separator)
//! 2. Project-level `./hackernews.toml`
//! 3. User-level `~/.config/hackernews/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `HN_DATABASE__PATH` -> `database.path`,
//! `HN_GRAPHQL__DEPTH_LIMIT` -> `graphql.depth_limit`, etc.
//!
//! ```no_run
//! use hn_config::HnConfig;
//!
//! let config = HnConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod database;
mod error;
mod graphql;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use graphql::GraphqlConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the project-local config file, resolved against the working directory.
pub const PROJECT_CONFIG_FILE: &str = "hackernews.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HnConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub graphql: GraphqlConfig,
}

impl HnConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`HnConfig::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source fails to parse or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`HnConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("HN_").split("__"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.graphql.depth_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "graphql.depth_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hackernews").join("config.toml"))
    }
}
