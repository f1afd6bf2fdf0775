//! Configuration store port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for persisted configuration
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load configuration. A missing file yields an empty config.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist configuration, creating parent directories as needed.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the configuration file.
    fn path(&self) -> PathBuf;

    fn exists(&self) -> bool;

    /// Write a config file populated with defaults.
    /// Fails if one already exists.
    async fn init(&self) -> Result<(), ConfigError>;

    /// Load configuration, falling back to an empty config when the file
    /// cannot be read or parsed.
    async fn load_or_empty(&self) -> AppConfig {
        match self.load().await {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %self.path().display(), error = %e, "Ignoring config file");
                AppConfig::empty()
            }
        }
    }
}
