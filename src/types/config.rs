//! Configuration for Memora.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{MemoraError, MemoraResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "memora.toml";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["text", "json"];

/// Main configuration for Memora.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Memoization settings.
    #[serde(default)]
    pub memoize: MemoizeConfig,
}

/// General settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Memoization settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoizeConfig {
    /// Maximum number of stored calls per memoized function.
    /// Omitted means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_size: Option<usize>,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> MemoraResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> MemoraResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            memoize: MemoizeConfig::default(),
        }
    }

    /// Checks values that serde cannot check on its own.
    pub fn validate(&self) -> MemoraResult<()> {
        if !LOG_LEVELS.contains(&self.general.log_level.as_str()) {
            return Err(MemoraError::config(format!(
                "invalid log_level '{}' (expected one of: {})",
                self.general.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        if !LOG_FORMATS.contains(&self.general.log_format.as_str()) {
            return Err(MemoraError::config(format!(
                "invalid log_format '{}' (expected one of: {})",
                self.general.log_format,
                LOG_FORMATS.join(", ")
            )));
        }

        Ok(())
    }

    /// Candidate locations, in lookup order.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("memora").join(CONFIG_FILE_NAME));
        }
        paths
    }

    /// Tries to load configuration from the current directory, then from the
    /// user config directory, or uses default.
    pub fn load_or_default() -> Self {
        for path in Self::search_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load(&path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Ignoring invalid config file"
                    );
                }
            }
        }
        Self::default_config()
    }
}
