//! Timer-based chain client
//!
//! Compiles with the stand-in compiler and "deploys" by inventing an address
//! and transaction hash. Each operation waits a fixed delay first.

use crate::chain::client::{ChainClient, ChainError, DeployReceipt};
use crate::chain::network::NetworkDescriptor;
use crate::chain::provider::{ProviderError, WalletProvider};
use crate::contract::{Abi, CompilationResult, Compiler};
use async_trait::async_trait;
use rand::RngCore;
use std::sync::Arc;
use std::time::Duration;

/// Wallet identifier used when no provider answers
pub const PLACEHOLDER_WALLET: &str = "f1dummywalletaddress1234567890";

/// Simulated latency of each stub
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubLatency {
    pub compile: Duration,
    pub deploy: Duration,
    pub connect: Duration,
}

impl StubLatency {
    /// No waiting at all
    pub fn instant() -> Self {
        Self {
            compile: Duration::ZERO,
            deploy: Duration::ZERO,
            connect: Duration::ZERO,
        }
    }
}

impl Default for StubLatency {
    fn default() -> Self {
        Self {
            compile: Duration::from_millis(1000),
            deploy: Duration::from_millis(3000),
            connect: Duration::ZERO,
        }
    }
}

/// Mock chain client
pub struct MockChainClient {
    compiler: Compiler,
    latency: StubLatency,
    network: NetworkDescriptor,
    provider: Option<Arc<dyn WalletProvider>>,
    placeholder_wallet: String,
}

impl MockChainClient {
    /// Create a client with default latency and no wallet provider
    pub fn new(network: NetworkDescriptor) -> Self {
        Self {
            compiler: Compiler::new(),
            latency: StubLatency::default(),
            network,
            provider: None,
            placeholder_wallet: PLACEHOLDER_WALLET.to_string(),
        }
    }

    pub fn with_latency(mut self, latency: StubLatency) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_provider(mut self, provider: Arc<dyn WalletProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_placeholder_wallet(mut self, wallet: &str) -> Self {
        self.placeholder_wallet = wallet.to_string();
        self
    }

    pub fn latency(&self) -> StubLatency {
        self.latency
    }

    async fn delay(duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }

    /// Request an account and move the wallet onto our network
    async fn connect_provider(&self, provider: &dyn WalletProvider) -> Result<String, ProviderError> {
        let account = provider
            .request_accounts()
            .await?
            .into_iter()
            .find(|a| !a.is_empty())
            .ok_or(ProviderError::NoAccounts)?;

        let current = provider.chain_id().await?;
        if current != self.network.chain_id {
            log::info!(
                "Switching wallet from chain {} to {}",
                current,
                self.network.chain_id
            );
            provider.switch_chain(&self.network.chain_id).await?;
        }

        Ok(account)
    }
}

/// `0x` followed by `bytes * 2` random hex digits
fn random_hex(bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    rand::thread_rng().fill_bytes(&mut buf);
    format!("0x{}", hex::encode(buf))
}

fn random_receipt() -> DeployReceipt {
    DeployReceipt {
        contract_address: random_hex(20),
        transaction_hash: random_hex(32),
    }
}

#[async_trait]
impl ChainClient for MockChainClient {
    async fn compile(&self, source: &str) -> Result<CompilationResult, ChainError> {
        Self::delay(self.latency.compile).await;
        Ok(self.compiler.compile(source))
    }

    async fn deploy(
        &self,
        bytecode: &str,
        _abi: &Abi,
        wallet: &str,
    ) -> Result<DeployReceipt, ChainError> {
        if bytecode.is_empty() {
            return Err(ChainError::InvalidBytecode);
        }
        if wallet.is_empty() {
            return Err(ChainError::WalletNotConnected);
        }

        Self::delay(self.latency.deploy).await;

        let receipt = random_receipt();
        log::info!(
            "Mock deployment from {} at {} (tx {})",
            wallet,
            receipt.contract_address,
            receipt.transaction_hash
        );
        Ok(receipt)
    }

    async fn connect(&self) -> String {
        Self::delay(self.latency.connect).await;

        let Some(provider) = &self.provider else {
            log::debug!("No wallet provider, using placeholder wallet");
            return self.placeholder_wallet.clone();
        };

        match self.connect_provider(provider.as_ref()).await {
            Ok(account) => account,
            Err(e) => {
                log::warn!("Wallet provider failed ({}), using placeholder wallet", e);
                self.placeholder_wallet.clone()
            }
        }
    }
}
