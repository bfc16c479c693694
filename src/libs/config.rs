//! Configuration management for the tasklens library.
//!
//! Settings live in a JSON file in the platform-specific application data
//! directory. Every section is optional and falls back to defaults, so the
//! library works with no configuration file at all.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklens::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let file_name = config.storage().file_name;
//! # Ok(())
//! # }
//! ```

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::store::TASKS_FILE_NAME;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Task blob storage settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// File name of the serialized task collection.
    pub file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file_name: TASKS_FILE_NAME.to_string(),
        }
    }
}

/// Defaults for dashboard-style statistics callers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatsConfig {
    /// How many months the creation histogram spans.
    pub histogram_months: u32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self { histogram_months: 6 }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub storage: Option<StorageConfig>,
    pub stats: Option<StatsConfig>,
}

impl Config {
    /// Loads the configuration, or returns defaults when no file exists.
    /// A file that exists but cannot be read or parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, creating the data
    /// directory when needed.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self).map_err(|_| msg_error_anyhow!(Message::ConfigSaveError))?;
        msg_debug!(Message::ConfigSaved);
        Ok(())
    }

    /// Storage section with defaults applied.
    pub fn storage(&self) -> StorageConfig {
        self.storage.clone().unwrap_or_default()
    }

    /// Stats section with defaults applied.
    pub fn stats(&self) -> StatsConfig {
        self.stats.clone().unwrap_or_default()
    }
}
