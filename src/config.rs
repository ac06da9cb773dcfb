//! Configuration management for the file store demo
//!
//! Loads demo configuration from config.toml with environment overrides.
//! The library itself never reads configuration; only the demo binary does.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Demo driver configuration
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Root directory all logical paths resolve against
    pub root_dir: String,

    /// Create the root directory at startup if it is missing
    pub create_root_if_missing: bool,
}

impl StoreConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(Environment::with_prefix("RAX_STORE"))
            .build()?;

        let config: StoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.root_dir.is_empty() {
            return Err(ConfigError::Message("root_dir cannot be empty".into()));
        }
        Ok(())
    }
}
