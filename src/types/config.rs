//! Configuration for complexity-cache.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::{CacheError, CacheResult};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "complexity-cache.toml";

/// Main configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
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

/// Assessment cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries.
    #[serde(default = "default_max_size")]
    pub max_size: usize,

    /// Entry time to live in milliseconds.
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,
}

impl CacheConfig {
    /// Entry time to live as a [`Duration`].
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
            ttl_ms: default_ttl_ms(),
        }
    }
}

pub(crate) fn default_max_size() -> usize {
    1000
}

fn default_ttl_ms() -> u64 {
    300_000 // 5 minutes
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> CacheResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> CacheResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            cache: CacheConfig::default(),
        }
    }

    /// Tries to load configuration from current directory or uses default.
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_CONFIG_FILE).unwrap_or_else(|e| {
            tracing::debug!("Using default configuration: {}", e);
            Self::default_config()
        })
    }

    /// Checks values that the cache cannot work with.
    pub fn validate(&self) -> CacheResult<()> {
        if self.cache.max_size == 0 {
            return Err(CacheError::config("cache.max_size must be greater than zero"));
        }
        if self.cache.ttl_ms == 0 {
            return Err(CacheError::config("cache.ttl_ms must be greater than zero"));
        }
        match self.general.log_format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(CacheError::config(format!(
                "general.log_format must be 'text' or 'json', got '{other}'"
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
