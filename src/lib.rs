//! Replifi: a smart-contract workbench for the Filecoin Calibration testnet
//!
//! This crate provides the state and logic behind the workbench front-end:
//! - A session holding the active page, connected wallet and editor contents
//! - Compilation and deployment through a pluggable chain client
//! - Per-wallet contract history with revisions and pluggable storage
//! - A view router that projects session state onto one of four pages
//! - A REST API with a WebSocket event stream
//!
//! # Example
//!
//! ```rust
//! use replifi::chain::NetworkDescriptor;
//! use replifi::session::{render, Page, SessionState, View};
//!
//! let state = SessionState {
//!     active_page: Page::Deploy,
//!     ..Default::default()
//! };
//! let screen = render(&state, &NetworkDescriptor::calibration());
//! assert!(matches!(screen.view, View::Deploy { can_deploy: false, .. }));
//! ```

pub mod api;
pub mod chain;
pub mod cli;
pub mod config;
pub mod contract;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use api::{create_router, ApiState};
pub use chain::{ChainClient, MockChainClient, NetworkDescriptor, WalletProvider};
pub use config::AppConfig;
pub use contract::{CompilationResult, Compiler, ContractCollection, ContractRecord};
pub use session::{render, Page, Screen, Session, SessionEvent, SessionState, View};
pub use storage::{ContractStore, JsonFileBackend, MemoryBackend, StorageBackend};
