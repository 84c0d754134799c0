//! Configuration management
//!
//! Element ids the page binding looks up and the render options used for
//! the indicator and result areas. The user-level file lives at
//! `~/.config/resolution-solver/config.toml`; every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::RenderOptions;

/// Errors reading or writing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that was read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// File is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Page element ids
    #[serde(default)]
    pub page: PageConfig,
    /// How solver text is rendered into the page
    #[serde(default)]
    pub render: RenderConfig,
}

/// Ids of the elements the controller binds to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// The formula textarea
    pub input_id: String,
    /// The validation indicator
    pub indicator_id: String,
    /// The calculate button
    pub button_id: String,
    /// The result area
    pub result_id: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            input_id: "input-string".to_string(),
            indicator_id: "input-validation".to_string(),
            button_id: "calculate-btn".to_string(),
            result_id: "result".to_string(),
        }
    }
}

/// Render settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Replacement for `\n` in solver output
    pub line_break: String,
    /// Escape HTML special characters
    pub escape_html: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let html = RenderOptions::html();
        Self {
            line_break: html.line_break,
            escape_html: html.escape_html,
        }
    }
}

impl RenderConfig {
    /// Render options for the controller
    #[must_use]
    pub fn options(&self) -> RenderOptions {
        RenderOptions {
            line_break: self.line_break.clone(),
            escape_html: self.escape_html,
        }
    }
}

impl AppConfig {
    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a config file, reporting every failure
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Get the config file path
    #[cfg(feature = "cli")]
    #[must_use]
    pub fn config_path() -> PathBuf {
        crate::paths::global_config()
    }

    /// Load the user config, or defaults if it is missing or broken
    #[cfg(feature = "cli")]
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|err| {
            log::warn!("ignoring config: {err}");
            Self::default()
        })
    }
}
