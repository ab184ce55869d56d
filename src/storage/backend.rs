//! Storage backend capability

use crate::contract::{ContractCollection, ContractRecord, RecordError};
use async_trait::async_trait;
use std::io;
use thiserror::Error;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] RecordError),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Where per-wallet contract collections live.
///
/// Backends are created once at startup and shut down once on exit.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Insert or replace `record` under `name` in `wallet`'s collection
    async fn upsert(
        &self,
        wallet: &str,
        name: &str,
        record: &ContractRecord,
    ) -> Result<(), StorageError>;

    /// Every record stored for `wallet`; empty if none
    async fn load_all(&self, wallet: &str) -> Result<ContractCollection, StorageError>;

    /// Release resources
    async fn shutdown(&self) -> Result<(), StorageError> {
        Ok(())
    }

    /// Short backend name for logs
    fn kind(&self) -> &'static str;
}

/// Reject keys that cannot identify a record
pub(crate) fn check_key(wallet: &str, name: &str, record: &ContractRecord) -> Result<(), StorageError> {
    if wallet.is_empty() {
        return Err(StorageError::InvalidData("Wallet id is empty".to_string()));
    }
    if name != record.name {
        return Err(StorageError::InvalidData(format!(
            "Record {} stored under name {}",
            record.name, name
        )));
    }
    Ok(())
}
