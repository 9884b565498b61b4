//! Application configuration.
//!
//! Configuration is a small TOML file pointing at the directory that holds
//! the six CSV exports. The file location can be overridden through the
//! `SHOPLENS_CONFIG` environment variable; a missing file is not an error
//! and falls back to the default dataset locations.

/// Dataset file locations and the `[data]` section of the config file
pub mod datasets;

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Environment variable naming an alternate config file location
pub const CONFIG_PATH_ENV: &str = "SHOPLENS_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level configuration structure for the config file
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Dataset location settings
    #[serde(default)]
    pub data: datasets::DataConfig,
}

impl AppConfig {
    /// Resolves the configured dataset paths, falling back to the default
    /// data directory when none is configured.
    #[must_use]
    pub fn dataset_paths(&self) -> datasets::DatasetPaths {
        match &self.data.dir {
            Some(dir) => datasets::DatasetPaths::from_dir(dir),
            None => datasets::DatasetPaths::default(),
        }
    }
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config file: {e}"),
    })
}

/// Loads the application configuration from the path named by
/// `SHOPLENS_CONFIG` (default `./config.toml`). A file that does not exist
/// yields the default configuration; a file that exists but cannot be
/// parsed is an error.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    if Path::new(&path).exists() {
        info!("Loading configuration from {path}");
        load_config(&path)
    } else {
        info!("No config file at {path}, using default dataset locations");
        Ok(AppConfig::default())
    }
}
