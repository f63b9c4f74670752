//! Configuration management for the Chrome agent

use crate::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Panel names the agent asks the host to display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PanelNames {
    /// Scanner shown the first time a browser window gains focus
    #[serde(default = "default_panel")]
    pub default_panel: String,

    /// Panel shown on a context-menu request
    #[serde(default = "default_context_menu")]
    pub context_menu: String,

    /// Panel shown for the zoom menu command
    #[serde(default = "default_zoom_menu")]
    pub zoom_menu: String,
}

fn default_panel() -> String {
    "Alphabet".to_string()
}

fn default_context_menu() -> String {
    "ChromeBrowserContextMenu".to_string()
}

fn default_zoom_menu() -> String {
    "ChromeBrowserZoomMenu".to_string()
}

impl Default for PanelNames {
    fn default() -> Self {
        Self {
            default_panel: default_panel(),
            context_menu: default_context_menu(),
            zoom_menu: default_zoom_menu(),
        }
    }
}

/// Agent configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Process the agent attaches to, and scopes the task switcher to
    #[serde(default = "default_process_name")]
    pub process_name: String,

    /// Category label attached to the agent's own panels
    #[serde(default = "default_category")]
    pub category: String,

    /// Panel names
    #[serde(default)]
    pub panels: PanelNames,
}

fn default_process_name() -> String {
    "chrome".to_string()
}

fn default_category() -> String {
    "Chrome".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            process_name: default_process_name(),
            category: default_category(),
            panels: PanelNames::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chrome-agent")
            .join("config.json")
    }
}
