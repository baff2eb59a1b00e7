use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use crate::errors::DomainError;
use crate::host_record::HostRecord;

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Static host records served by the demo upstream resolver
    #[serde(default)]
    pub static_hosts: Vec<HostRecord>,
}

/// Settings the CLI may override after the file is parsed
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub max_entries: Option<usize>,
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults when
    /// no path is given, then apply CLI overrides on top.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => {
                let contents = std::fs::read_to_string(p)?;
                toml::from_str(&contents)?
            }
            None => Config::default(),
        };

        if let Some(max_entries) = overrides.max_entries {
            config.cache.max_entries = max_entries;
        }

        Ok(config)
    }

    /// Reject configurations the cache cannot be built from.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.cache.max_entries == 0 {
            return Err(DomainError::InvalidConfiguration(
                "cache.max_entries must be greater than zero".to_string(),
            ));
        }

        for record in &self.static_hosts {
            record
                .validate()
                .map_err(DomainError::InvalidConfiguration)?;
        }

        Ok(())
    }
}
