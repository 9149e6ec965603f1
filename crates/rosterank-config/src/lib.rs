//! Configuration system for Rosterank.
//!
//! Load console configuration from TOML or YAML files to control the default
//! ranking direction and output rendering without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use rosterank_config::{AppConfig, ColorMode};
//! use rosterank_ranking::Direction;
//!
//! let config = AppConfig::from_toml_str(r#"
//!     direction = "ascending"
//!     color = "never"
//!     feedback = false
//! "#).unwrap();
//!
//! assert_eq!(config.direction, Direction::Ascending);
//! assert_eq!(config.color, ColorMode::Never);
//! assert!(!config.feedback);
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use rosterank_config::AppConfig;
//!
//! let config = AppConfig::load("rosterank.toml").unwrap_or_default();
//! // Proceeds with defaults if the file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rosterank_ranking::Direction;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Console application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    /// Default ranking direction for the sort command.
    #[serde(default)]
    pub direction: Direction,

    /// When to colorize console output.
    #[serde(default)]
    pub color: ColorMode,

    /// Whether to print success feedback banners.
    #[serde(default = "default_feedback")]
    pub feedback: bool,
}

fn default_feedback() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            color: ColorMode::default(),
            feedback: true,
        }
    }
}

impl AppConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, dispatching on the extension.
    ///
    /// `.yaml` and `.yml` files parse as YAML; everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the default ranking direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the color mode.
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }
}

/// When to colorize console output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Colorize only when stdout is a terminal.
    #[default]
    Auto,

    /// Always colorize.
    Always,

    /// Never colorize.
    Never,
}
