mod cache;
mod logging;
mod server;
mod upstream;

pub use cache::CacheConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Main configuration structure for CacheDNS.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line flags that take precedence over file values.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub upstream_address: Option<String>,
    pub listen_address: Option<String>,
    pub data_dir: Option<String>,
    pub log_level: Option<String>,
    pub offline: bool,
}

impl Config {
    /// Load configuration from file or use defaults.
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. cachedns.toml in current directory
    /// 3. /etc/cachedns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, DomainError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("cachedns.toml").exists() {
            Self::from_file("cachedns.toml")?
        } else if std::path::Path::new("/etc/cachedns/config.toml").exists() {
            Self::from_file("/etc/cachedns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, DomainError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DomainError::ConfigError(format!("Failed to read {}: {}", path, e)))?;
        toml::from_str(&contents)
            .map_err(|e| DomainError::ConfigError(format!("Failed to parse {}: {}", path, e)))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(upstream_address) = overrides.upstream_address {
            self.upstream.address = upstream_address;
        }
        if let Some(listen_address) = overrides.listen_address {
            self.server.listen_address = listen_address;
        }
        if let Some(data_dir) = overrides.data_dir {
            self.cache.data_dir = data_dir;
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
        if overrides.offline {
            self.upstream.enabled = false;
        }
    }
}
