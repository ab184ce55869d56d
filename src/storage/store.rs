//! Contract store
//!
//! Thin facade over a storage backend that enforces record invariants
//! before anything is written.

use crate::contract::{ContractCollection, ContractRecord};
use crate::storage::backend::{StorageBackend, StorageError};
use std::sync::Arc;

/// Per-wallet contract persistence used by the session
#[derive(Clone)]
pub struct ContractStore {
    backend: Arc<dyn StorageBackend>,
}

impl ContractStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Upsert `record` under `name` for `wallet`
    pub async fn save(
        &self,
        wallet: &str,
        name: &str,
        record: &ContractRecord,
    ) -> Result<(), StorageError> {
        record.validate()?;
        self.backend.upsert(wallet, name, record).await
    }

    /// All records for `wallet`, in insertion order
    pub async fn load(&self, wallet: &str) -> Result<ContractCollection, StorageError> {
        self.backend.load_all(wallet).await
    }

    /// Shut the backend down
    pub async fn shutdown(&self) -> Result<(), StorageError> {
        log::info!("Shutting down {} storage", self.backend.kind());
        self.backend.shutdown().await
    }

    pub fn backend_kind(&self) -> &'static str {
        self.backend.kind()
    }
}
