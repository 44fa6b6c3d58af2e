//! Configuration management for flowgen.
//!
//! Parses `flowgen.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `service.base_url` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use expand::expand_env;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "flowgen.toml";

/// Default generation service base URL (the Flask dev server default).
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override generation service base URL.
    pub base_url: Option<String>,
    /// Override HTTP timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Configuration load error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A `${VAR}` reference without a default named an unset variable.
    #[error("environment variable '{0}' is not set")]
    UnsetVariable(String),
}

/// Raw configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigRaw {
    service: ServiceConfigRaw,
}

/// Raw service section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ServiceConfigRaw {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

/// Resolved generation service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Generation service base URL.
    pub base_url: String,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl ServiceConfig {
    /// The timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Application configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// Generation service configuration.
    pub service: ServiceConfig,
    /// Path to the config file (None when defaults were used).
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration, discovering `flowgen.toml` upward from the
    /// current directory, then applying CLI overrides.
    ///
    /// Missing config files are not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a discovered file cannot be read or
    /// parsed, or when environment expansion fails.
    pub fn load(settings: &CliSettings) -> Result<Self, ConfigError> {
        let start = std::env::current_dir()?;
        Self::load_from(&start, settings)
    }

    /// Load configuration searching upward from `start_dir`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`load`](Self::load).
    pub fn load_from(start_dir: &Path, settings: &CliSettings) -> Result<Self, ConfigError> {
        let mut config = match discover(start_dir) {
            Some(path) => {
                let raw: ConfigRaw = toml::from_str(&std::fs::read_to_string(&path)?)?;
                let mut config = Self::from_raw(raw)?;
                config.config_path = Some(path);
                config
            }
            None => Self::default(),
        };

        if let Some(base_url) = &settings.base_url {
            config.service.base_url.clone_from(base_url);
        }
        if let Some(timeout_secs) = settings.timeout_secs {
            config.service.timeout_secs = timeout_secs;
        }

        Ok(config)
    }

    fn from_raw(raw: ConfigRaw) -> Result<Self, ConfigError> {
        let defaults = ServiceConfig::default();
        let base_url = match raw.service.base_url {
            Some(url) => expand_env(&url)?,
            None => defaults.base_url,
        };

        Ok(Self {
            service: ServiceConfig {
                base_url,
                timeout_secs: raw.service.timeout_secs.unwrap_or(defaults.timeout_secs),
            },
            config_path: None,
        })
    }
}

/// Search for the config file in `start_dir` and its ancestors.
fn discover(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}
