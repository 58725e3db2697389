//! User configuration file handling
//!
//! Manages settings from ~/.config/layersync/settings.json

use crate::core::errors::{LayerSyncContext, LayerSyncResult};
use crate::core::state::LayerRole;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User configuration from ~/.config/layersync/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Back up master layers into their backgrounds before every removal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_before_remove: Option<bool>,
    /// Layer roles a removal may touch (e.g. ["master", "intermediate"])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligible_roles: Option<Vec<LayerRole>>,
    /// Default log level ("error", "warn", "info", "debug", "trace")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl ConfigFile {
    /// Get the path to the layersync config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("layersync")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        match Self::try_load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{:#}", e);
                None
            }
        }
    }

    /// Like `load`, but hands back a broken file as an error instead of
    /// logging it, for callers that load settings before logging is set up
    pub fn try_load() -> LayerSyncResult<Option<Self>> {
        Self::try_load_from(&Self::config_path())
    }

    pub fn try_load_from(path: &Path) -> LayerSyncResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path).with_file_context("read", path)?;
        let config = serde_json::from_str(&contents).with_file_context("parse", path)?;
        debug!("Loaded user settings from {:?}", path);
        Ok(Some(config))
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> LayerSyncResult<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> LayerSyncResult<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_file_context("create directory for", path)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).with_file_context("write", path)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// The settings written by `layersync new-config`
    pub fn example() -> Self {
        Self {
            backup_before_remove: Some(false),
            eligible_roles: Some(LayerRole::default_eligible()),
            log_level: Some("info".to_string()),
        }
    }

    /// Initialize the user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/layersync directory with a logs/ directory
    /// 2. A settings.json file with default values
    pub fn initialize_config_directory() -> LayerSyncResult<()> {
        let config_dir = Self::config_dir();

        fs::create_dir_all(&config_dir).with_file_context("create", &config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = config_dir.join("logs");
        fs::create_dir_all(&logs_dir).with_file_context("create", &logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = Self::config_path();
        if !settings_path.exists() {
            Self::example().save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - View logs in: {:?}", logs_dir);

        Ok(())
    }
}
