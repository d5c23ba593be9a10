//! Pricer configuration, read from an optional TOML file.

use std::path::Path;

use pricing::lattice::DEFAULT_STEPS;
use serde::Deserialize;

use crate::error::{CliError, Result};

/// Log levels understood by the `log_level` key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricerConfig {
    /// Number of lattice steps
    pub steps: usize,
    pub log_level: LogLevel,
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            log_level: LogLevel::default(),
        }
    }
}

impl PricerConfig {
    /// Loads the file at `path`, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|err| CliError::Config(format!("{}: {}", path.display(), err)))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|err| CliError::Config(err.to_string()))
    }
}
