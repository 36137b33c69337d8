//! Tool configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use shorthand_humanize::DEFAULT_DELIMITER;
use shorthand_shortid::Alphabet;
use shorthand_types::PreconditionViolation;
use shorthand_utils::LogFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid alphabet: {0}")]
    Alphabet(#[from] PreconditionViolation),
}

/// Settings for the `shorthand` tool.
///
/// Can be loaded from a TOML file via [`ShorthandConfig::from_toml_file`];
/// every field is optional and falls back to the library defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShorthandConfig {
    /// Digit symbols for short ids, in digit order.
    #[serde(default)]
    pub alphabet: Alphabet,

    /// Thousands delimiter for large year counts.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ShorthandConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Replace the alphabet with symbols given on the command line.
    ///
    /// An empty list leaves the configured alphabet in place.
    pub fn override_alphabet(&mut self, symbols: Vec<String>) -> Result<(), ConfigError> {
        if !symbols.is_empty() {
            self.alphabet = Alphabet::new(symbols)?;
        }
        Ok(())
    }
}

impl Default for ShorthandConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            delimiter: default_delimiter(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
