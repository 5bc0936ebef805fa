//! Configuration management for sqlsplit.
//!
//! Handles loading configuration from TOML files, with settings for the
//! result-shape classifier and the output renderer.

use crate::error::{Result, SplitError};
use crate::output::OutputFormat;
use crate::script::Classifier;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for sqlsplit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Classifier configuration.
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Leading keywords that mark a result set in addition to the built-in
    /// ones (e.g. `["WITH", "VALUES"]`).
    #[serde(default)]
    pub extra_result_prefixes: Vec<String>,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Output format: "text" or "json".
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[serde(default)]
    pub pretty: bool,
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("db-sqlsplit")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| SplitError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            SplitError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }

    /// Builds a classifier from the configured prefixes plus any given on
    /// the command line.
    pub fn build_classifier(&self, extra_prefixes: &[String]) -> Classifier {
        Classifier::with_extra_prefixes(
            self.classifier
                .extra_result_prefixes
                .iter()
                .chain(extra_prefixes),
        )
    }
}
