//! Effective settings
//!
//! Priority order for every value:
//! 1. CLI argument
//! 2. Config file setting (~/.config/layersync/settings.json)
//! 3. Built-in default

use crate::core::config_file::ConfigFile;
use crate::core::state::LayerRole;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSyncSettings {
    pub backup_before_remove: bool,
    pub eligible_roles: Vec<LayerRole>,
    pub log_level: String,
}

impl Default for LayerSyncSettings {
    fn default() -> Self {
        Self {
            backup_before_remove: false,
            eligible_roles: LayerRole::default_eligible(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LayerSyncSettings {
    /// Built-in defaults overlaid with whatever the config file sets
    pub fn from_config(config: Option<&ConfigFile>) -> Self {
        let mut settings = Self::default();
        let Some(config) = config else {
            return settings;
        };

        if let Some(backup) = config.backup_before_remove {
            settings.backup_before_remove = backup;
        }
        if let Some(roles) = &config.eligible_roles {
            if roles.is_empty() {
                tracing::warn!("eligible_roles in settings.json is empty, using defaults");
            } else {
                settings.eligible_roles = roles.clone();
            }
        }
        if let Some(level) = &config.log_level {
            settings.log_level = level.clone();
        }
        settings
    }

    /// Whether to back up before removing, given the CLI flag if any
    pub fn backup_for(&self, cli_flag: Option<bool>) -> bool {
        cli_flag.unwrap_or(self.backup_before_remove)
    }
}
