//! Configuration system for jsonselector.
//!
//! This module provides the configuration structure for the `jsonselector` command
//! with sensible defaults and support for serialization/deserialization via serde.
//! Configuration is loaded from a TOML file and merged with command-line arguments.
//!
//! # Example
//!
//! ```
//! use jsonselector::config::{Config, QueryMode};
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.mode, QueryMode::String);
//! assert_eq!(config.log_level, "warn");
//!
//! // Create custom configuration
//! let custom = Config {
//!     mode: QueryMode::Any,
//!     ..Config::default()
//! };
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which query operation the command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// Print whether anything matched
    Any,
    /// Print the first match as a string
    #[default]
    String,
    /// Print the first match as an integer
    Int,
}

/// Configuration for the jsonselector command.
///
/// # Fields
///
/// * `mode` - Query mode when `--mode` is not given (default: string)
/// * `log_level` - Tracing filter when `RUST_LOG` and `--log-level` are unset (default: "warn")
/// * `missing_placeholder` - Text printed when nothing matched (default: empty, print nothing)
/// * `fail_on_missing` - Exit with status 1 when no document matched (default: true)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Query mode when `--mode` is not given
    #[serde(default)]
    pub mode: QueryMode,

    /// Tracing filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Text printed for a document with no match in string or int mode
    #[serde(default)]
    pub missing_placeholder: String,

    /// Exit with status 1 when no document matched
    #[serde(default = "default_fail_on_missing")]
    pub fail_on_missing: bool,
}

/// Returns the default log level.
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_fail_on_missing() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: QueryMode::default(),
            log_level: default_log_level(),
            missing_placeholder: String::new(),
            fail_on_missing: default_fail_on_missing(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/jsonselector/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("jsonselector");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|_| Self::default()),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
