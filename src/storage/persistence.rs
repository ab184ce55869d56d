//! JSON file storage backend
//!
//! One pretty-printed JSON file per wallet. Writes go to a temporary file
//! that is renamed over the old one, after rotating backups.

use crate::contract::{ContractCollection, ContractRecord};
use crate::storage::backend::{check_key, StorageBackend, StorageError};
use async_trait::async_trait;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub contracts_dir: String,
    pub backup_enabled: bool,
    pub max_backups: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".replifi_data"),
            contracts_dir: "contracts".to_string(),
            backup_enabled: true,
            max_backups: 5,
        }
    }
}

/// File-backed contract storage
pub struct JsonFileBackend {
    config: StorageConfig,
    /// Serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

/// Path-safe file stem, one per distinct wallet id
fn file_stem(wallet: &str) -> String {
    hex::encode(wallet.as_bytes())
}

impl JsonFileBackend {
    /// Create the backend, making its directory if needed
    pub fn new(config: StorageConfig) -> Result<Self, StorageError> {
        fs::create_dir_all(config.data_dir.join(&config.contracts_dir))?;
        Ok(Self {
            config,
            write_lock: Mutex::new(()),
        })
    }

    fn dir(&self) -> PathBuf {
        self.config.data_dir.join(&self.config.contracts_dir)
    }

    /// Path of a wallet's collection file
    fn wallet_path(&self, wallet: &str) -> PathBuf {
        self.dir().join(format!("{}.json", file_stem(wallet)))
    }

    fn backup_path(&self, wallet: &str, index: usize) -> PathBuf {
        self.dir()
            .join(format!("{}.json.backup.{}", file_stem(wallet), index))
    }

    fn read_collection(path: &Path) -> Result<ContractCollection, StorageError> {
        if !path.exists() {
            return Ok(ContractCollection::new());
        }
        let file = fs::File::open(path)?;
        let collection: ContractCollection = serde_json::from_reader(BufReader::new(file))?;
        Ok(collection)
    }

    fn write_collection(&self, wallet: &str, collection: &ContractCollection) -> Result<(), StorageError> {
        let path = self.wallet_path(wallet);

        if self.config.backup_enabled && self.config.max_backups > 0 && path.exists() {
            self.rotate_backups(wallet)?;
            fs::copy(&path, self.backup_path(wallet, 0))?;
        }

        let temp_path = path.with_extension("json.tmp");
        let file = fs::File::create(&temp_path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), collection)?;

        fs::rename(&temp_path, &path)?;
        Ok(())
    }

    fn rotate_backups(&self, wallet: &str) -> Result<(), StorageError> {
        let oldest = self.backup_path(wallet, self.config.max_backups - 1);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for i in (0..self.config.max_backups - 1).rev() {
            let current = self.backup_path(wallet, i);
            if current.exists() {
                fs::rename(&current, self.backup_path(wallet, i + 1))?;
            }
        }

        Ok(())
    }
}

#[async_trait]
impl StorageBackend for JsonFileBackend {
    async fn upsert(
        &self,
        wallet: &str,
        name: &str,
        record: &ContractRecord,
    ) -> Result<(), StorageError> {
        check_key(wallet, name, record)?;

        let _guard = self.write_lock.lock().await;
        let mut collection = Self::read_collection(&self.wallet_path(wallet))?;
        collection.upsert(record.clone());
        self.write_collection(wallet, &collection)?;

        log::debug!("Saved {} for {} ({} records)", name, wallet, collection.len());
        Ok(())
    }

    async fn load_all(&self, wallet: &str) -> Result<ContractCollection, StorageError> {
        Self::read_collection(&self.wallet_path(wallet))
    }

    async fn shutdown(&self) -> Result<(), StorageError> {
        // Wait for an in-flight write to finish
        let _guard = self.write_lock.lock().await;
        log::info!("Contract files closed in {:?}", self.dir());
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "json"
    }
}
