//! Chain client capability
//!
//! Everything the session needs from "the chain": compiling, deploying and
//! resolving the user's wallet. The session only talks to this trait, so a
//! real toolchain/RPC client can replace the mock without touching it.

use crate::contract::{Abi, CompilationResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Chain client errors
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Invalid bytecode")]
    InvalidBytecode,
    #[error("Wallet not connected")]
    WalletNotConnected,
    #[error("Deployment failed: {0}")]
    DeploymentFailed(String),
    #[error("Compiler unavailable: {0}")]
    CompilerUnavailable(String),
}

/// Identifiers of a confirmed deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployReceipt {
    pub contract_address: String,
    pub transaction_hash: String,
}

/// Pluggable compile/deploy/connect backend
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Compile contract source
    async fn compile(&self, source: &str) -> Result<CompilationResult, ChainError>;

    /// Deploy compiled bytecode from `wallet`
    async fn deploy(
        &self,
        bytecode: &str,
        abi: &Abi,
        wallet: &str,
    ) -> Result<DeployReceipt, ChainError>;

    /// Resolve the user's wallet identifier. Never fails; falls back to a
    /// placeholder identifier.
    async fn connect(&self) -> String;
}
