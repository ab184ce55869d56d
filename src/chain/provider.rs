//! Wallet provider capability
//!
//! A provider is whatever holds the user's accounts (a browser extension in
//! the web front-end). The workbench treats it as optional.

use async_trait::async_trait;
use thiserror::Error;

/// Provider errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("User rejected the request")]
    Rejected,
    #[error("No accounts available")]
    NoAccounts,
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(String),
}

/// Account and network operations of a wallet provider
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Ask the user to expose their accounts
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// Currently selected chain id (decimal)
    async fn chain_id(&self) -> Result<String, ProviderError>;

    /// Ask the wallet to switch to `chain_id`
    async fn switch_chain(&self, chain_id: &str) -> Result<(), ProviderError>;
}

/// Provider that always exposes a single known account
#[derive(Debug, Clone)]
pub struct FixedAccountProvider {
    account: String,
    chain_id: String,
}

impl FixedAccountProvider {
    pub fn new(account: &str, chain_id: &str) -> Self {
        Self {
            account: account.to_string(),
            chain_id: chain_id.to_string(),
        }
    }
}

#[async_trait]
impl WalletProvider for FixedAccountProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        if self.account.is_empty() {
            return Err(ProviderError::NoAccounts);
        }
        Ok(vec![self.account.clone()])
    }

    async fn chain_id(&self) -> Result<String, ProviderError> {
        Ok(self.chain_id.clone())
    }

    async fn switch_chain(&self, chain_id: &str) -> Result<(), ProviderError> {
        if chain_id == self.chain_id {
            Ok(())
        } else {
            Err(ProviderError::UnsupportedChain(chain_id.to_string()))
        }
    }
}
