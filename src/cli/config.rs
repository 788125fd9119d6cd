//! Configuration management for the maturity assessment
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.maturity/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::Verbosity;
use crate::errors::{AssessmentError, Result};

/// Complete configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Terminal output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub default_verbosity: String,
    pub color_output: bool,
    /// Width of report bars in characters
    pub bar_width: usize,
}

/// Question catalog source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Custom catalog file; built-in catalog when unset
    pub path: Option<String>,
}

/// File system paths configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub state_dir: String,
    pub history_file: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_verbosity: "normal".to_string(),
            color_output: true,
            bar_width: 40,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            state_dir: "~/.maturity".to_string(),
            history_file: "~/.maturity/history".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AssessmentError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| AssessmentError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".maturity").join("config.toml");
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.display.bar_width == 0 || self.display.bar_width > 200 {
            return Err(AssessmentError::ConfigError(
                "bar_width must be between 1 and 200".to_string(),
            ));
        }

        if Verbosity::parse(&self.display.default_verbosity).is_none() {
            return Err(AssessmentError::ConfigError(format!(
                "Invalid verbosity level: {}",
                self.display.default_verbosity
            )));
        }

        if matches!(self.catalog.path.as_deref(), Some(p) if p.trim().is_empty()) {
            return Err(AssessmentError::ConfigError(
                "catalog.path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Effective configuration as TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| AssessmentError::ConfigError(format!("Failed to serialize config: {}", e)))
    }

    /// Configured default verbosity
    pub fn default_verbosity(&self) -> Verbosity {
        Verbosity::parse(&self.display.default_verbosity).unwrap_or(Verbosity::Normal)
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get state directory path
    pub fn state_dir(&self) -> PathBuf {
        Self::expand_path(&self.paths.state_dir)
    }

    /// Get REPL history file path
    pub fn history_path(&self) -> PathBuf {
        Self::expand_path(&self.paths.history_file)
    }

    /// Get custom catalog path, if configured
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog.path.as_deref().map(Self::expand_path)
    }
}
