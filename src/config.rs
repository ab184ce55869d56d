//! Application configuration
//!
//! Read from an optional JSON file; every field has a default so a partial
//! file (or none at all) is fine.

use crate::chain::{NetworkDescriptor, StubLatency, PLACEHOLDER_WALLET};
use crate::storage::StorageConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Which storage backend to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    Memory,
    Json,
}

/// Stub delays in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub compile_ms: u64,
    pub deploy_ms: u64,
    pub connect_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        let latency = StubLatency::default();
        Self {
            compile_ms: latency.compile.as_millis() as u64,
            deploy_ms: latency.deploy.as_millis() as u64,
            connect_ms: latency.connect.as_millis() as u64,
        }
    }
}

impl From<LatencyConfig> for StubLatency {
    fn from(config: LatencyConfig) -> Self {
        Self {
            compile: Duration::from_millis(config.compile_ms),
            deploy: Duration::from_millis(config.deploy_ms),
            connect: Duration::from_millis(config.connect_ms),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub storage: StorageKind,
    pub max_backups: usize,
    pub api_port: u16,
    pub latency: LatencyConfig,
    /// Wallet id used when no provider answers
    pub placeholder_wallet: String,
    /// Account exposed by the built-in wallet provider; none means no provider
    pub wallet_address: Option<String>,
    pub network: NetworkDescriptor,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".replifi_data"),
            storage: StorageKind::Json,
            max_backups: 5,
            api_port: 3000,
            latency: LatencyConfig::default(),
            placeholder_wallet: PLACEHOLDER_WALLET.to_string(),
            wallet_address: None,
            network: NetworkDescriptor::calibration(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Load `path` if given, otherwise defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                log::info!("Loading config from {:?}", path);
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Settings for the JSON file backend
    pub fn storage_config(&self) -> StorageConfig {
        StorageConfig {
            data_dir: self.data_dir.clone(),
            max_backups: self.max_backups,
            backup_enabled: self.max_backups > 0,
            ..Default::default()
        }
    }

    pub fn stub_latency(&self) -> StubLatency {
        self.latency.into()
    }
}
