//! Configuration management for jiralog.
//!
//! The configuration holds the connection settings of each tracker module
//! (currently only Jira). It is stored as pretty-printed JSON in the per-user
//! application directory resolved by [`DataStorage`]:
//!
//! - **Windows**: `%LOCALAPPDATA%\jiralog\jiralog\config.json`
//! - **macOS**: `~/Library/Application Support/jiralog/jiralog/config.json`
//! - **Linux**: `~/.local/share/jiralog/jiralog/config.json`
//!
//! Passwords are never part of the configuration. They are supplied per run
//! by [`Secret`] and combined with the stored settings into a
//! [`TrackerConfig`].
//!
//! ```rust,ignore
//! use jiralog::libs::config::Config;
//!
//! let config = Config::init()?;
//! config.save()?;
//!
//! let tracker_config = Config::read()?.tracker_config()?;
//! ```

use super::data_storage::DataStorage;
use super::secret::Secret;
use crate::api::jira::JiraConfig;
use crate::api::TrackerConfig;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module, as listed by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jira: Option<JiraConfig>,
}

impl Config {
    /// Loads the configuration, or the empty default when no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).with_context(|| Message::ConfigParseError.to_string())?;
        msg_debug!(format!("configuration loaded from {}", config_file_path.display()));
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path).with_context(|| Message::ConfigSaveError.to_string())?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![JiraConfig::module()];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .defaults(&[true])
            .interact()?;

        for &selection in &selected {
            if modules[selection].key.as_str() == "jira" {
                config.jira = Some(JiraConfig::init(&config.jira)?);
            }
        }

        Ok(config)
    }

    /// The stored Jira settings, or an error telling the user to run `init`.
    pub fn jira(&self) -> Result<&JiraConfig> {
        self.jira.as_ref().ok_or_else(|| msg_error_anyhow!(Message::JiraNotConfigured))
    }

    /// Stored Jira settings combined with the password for this run.
    pub fn tracker_config(&self) -> Result<TrackerConfig> {
        let jira = self.jira()?;
        let credential = Secret::jira().get_or_prompt()?;
        Ok(jira.tracker_config(&credential))
    }
}
