//! Section rendering configuration.
//!
//! # Responsibility
//! - Load and validate [`PortfolioConfig`] from JSON.
//!
//! # Invariants
//! - Every field has a default, so `{}` is a valid config file.
//! - `stagger_seconds` is finite and non-negative after validation.

use crate::logging::normalize_level;
use crate::render::DEFAULT_STAGGER_SECONDS;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DEFAULT_HEADING: &str = "Featured Projects Portfolio";
pub const DEFAULT_INTRO: &str = "Comprehensive showcase of clinical data management, AI/ML research, and enterprise application development";

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration loading/validation error.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidStagger(f64),
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config `{}`: {source}", path.display())
            }
            Self::InvalidStagger(value) => {
                write!(f, "stagger_seconds must be finite and >= 0, got {value}")
            }
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::InvalidStagger(_) | Self::InvalidLogLevel(_) => None,
        }
    }
}

/// Options for composing the projects section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub heading: String,
    pub intro: String,
    /// Per-card animation delay step in seconds.
    pub stagger_seconds: f64,
    /// Fail on blocks that match no marker instead of dropping them.
    pub strict: bool,
    pub log_level: Option<String>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            heading: DEFAULT_HEADING.to_string(),
            intro: DEFAULT_INTRO.to_string(),
            stagger_seconds: DEFAULT_STAGGER_SECONDS,
            strict: false,
            log_level: None,
        }
    }
}

impl PortfolioConfig {
    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.stagger_seconds.is_finite() || self.stagger_seconds < 0.0 {
            return Err(ConfigError::InvalidStagger(self.stagger_seconds));
        }
        if let Some(level) = &self.log_level {
            normalize_level(level).map_err(ConfigError::InvalidLogLevel)?;
        }
        Ok(())
    }
}

/// Reads, parses and validates a JSON config file.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<PortfolioConfig> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: PortfolioConfig =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}
