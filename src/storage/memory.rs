//! In-process storage backend

use crate::contract::{ContractCollection, ContractRecord};
use crate::storage::backend::{check_key, StorageBackend, StorageError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Keeps every wallet's collection in memory; nothing survives a restart
#[derive(Debug, Default)]
pub struct MemoryBackend {
    wallets: RwLock<HashMap<String, ContractCollection>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of wallets with at least one record
    pub async fn wallet_count(&self) -> usize {
        self.wallets.read().await.len()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn upsert(
        &self,
        wallet: &str,
        name: &str,
        record: &ContractRecord,
    ) -> Result<(), StorageError> {
        check_key(wallet, name, record)?;
        let mut wallets = self.wallets.write().await;
        wallets
            .entry(wallet.to_string())
            .or_default()
            .upsert(record.clone());
        Ok(())
    }

    async fn load_all(&self, wallet: &str) -> Result<ContractCollection, StorageError> {
        let wallets = self.wallets.read().await;
        Ok(wallets.get(wallet).cloned().unwrap_or_default())
    }

    async fn shutdown(&self) -> Result<(), StorageError> {
        let wallets = self.wallets.read().await;
        let records: usize = wallets.values().map(|c| c.len()).sum();
        log::info!(
            "Discarding {} in-memory records across {} wallets",
            records,
            wallets.len()
        );
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
