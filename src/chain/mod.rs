//! Chain module
//!
//! The compile/deploy/connect capability behind the workbench, plus the
//! static network description it targets.

pub mod client;
pub mod mock;
pub mod network;
pub mod provider;

pub use client::{ChainClient, ChainError, DeployReceipt};
pub use mock::{MockChainClient, StubLatency, PLACEHOLDER_WALLET};
pub use network::NetworkDescriptor;
pub use provider::{FixedAccountProvider, ProviderError, WalletProvider};
