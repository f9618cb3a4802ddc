//! Dashboard configuration file support.
//!
//! Settings are read from an optional TOML file and then overridden by
//! environment variables:
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8050
//!
//! [dataset]
//! path = "data/spacex_launch_dash.csv"
//! ```
//!
//! # Environment Variables
//!
//! - `LAUNCH_DASH_CONFIG`: explicit config file path
//! - `HOST`: server host
//! - `PORT`: server port
//! - `LAUNCH_DATA_PATH`: dataset CSV path

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "LAUNCH_DASH_CONFIG";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const DATA_PATH_ENV: &str = "LAUNCH_DATA_PATH";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value '{value}' for {key}")]
    InvalidEnv { key: &'static str, value: String },

    #[error("Invalid bind address {0}")]
    InvalidAddress(String),
}

/// Complete dashboard configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Dataset location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/spacex_launch_dash.csv")
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    ///
    /// A relative dataset path is resolved against the directory holding the
    /// config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.dataset.path.is_relative() {
            if let Some(dir) = path.parent() {
                config.dataset.path = dir.join(&config.dataset.path);
            }
        }
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from the default location.
    ///
    /// Uses `LAUNCH_DASH_CONFIG` when set, otherwise the first of
    /// `dashboard.toml`, `backend/dashboard.toml`, `../dashboard.toml` that
    /// exists. With no file at all the defaults are used.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Self::from_file(path);
        }

        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using config file {}", path.display());
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Apply `HOST`, `PORT` and `LAUNCH_DATA_PATH` overrides.
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = env::var(HOST_ENV) {
            self.server.host = host;
        }
        if let Ok(port) = env::var(PORT_ENV) {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                key: PORT_ENV,
                value: port,
            })?;
        }
        if let Ok(path) = env::var(DATA_PATH_ENV) {
            self.dataset.path = PathBuf::from(path);
        }
        Ok(self)
    }

    /// File (if any) plus environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_default_location()?.apply_env_overrides()
    }

    /// Resolve `host:port` to a socket address. Host names such as
    /// `localhost` go through the system resolver.
    pub async fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.server.host.as_str();
        let invalid = || ConfigError::InvalidAddress(format!("{}:{}", host, self.server.port));
        tokio::net::lookup_host((host, self.server.port))
            .await
            .map_err(|_| invalid())?
            .next()
            .ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8050);
        assert_eq!(
            config.dataset.path,
            PathBuf::from("data/spacex_launch_dash.csv")
        );
        assert_eq!(
            config.bind_address().await.unwrap(),
            "127.0.0.1:8050".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = DashboardConfig::from_toml_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.dataset, DatasetSettings::default());
    }

    #[test]
    fn test_full_toml() {
        let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [dataset]
            path = "/srv/launches.csv"
        "#;
        let config = DashboardConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.dataset.path, PathBuf::from("/srv/launches.csv"));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(DashboardConfig::from_toml_str("[server]\nport = \"eighty\"\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = DashboardConfig::from_file("no/such/dashboard.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[tokio::test]
    async fn test_invalid_bind_address() {
        let mut config = DashboardConfig::default();
        config.server.host = "not a host".to_string();
        assert!(matches!(
            config.bind_address().await,
            Err(ConfigError::InvalidAddress(_))
        ));
    }

    #[tokio::test]
    async fn test_bind_address_resolves_host_names() {
        let mut config = DashboardConfig::default();
        config.server.host = "localhost".to_string();
        config.server.port = 9100;
        let addr = config.bind_address().await.unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 9100);
    }
}
