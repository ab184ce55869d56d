//! Session module
//!
//! Session state, the view router, session events and the controller that
//! ties the chain client and the contract store together.
//!
//! # Example
//!
//! ```rust
//! use replifi::chain::{MockChainClient, NetworkDescriptor, StubLatency};
//! use replifi::session::{Page, Session};
//! use replifi::storage::{ContractStore, MemoryBackend};
//! use std::sync::Arc;
//!
//! # tokio_test();
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn tokio_test() {
//! let client = MockChainClient::new(NetworkDescriptor::calibration())
//!     .with_latency(StubLatency::instant());
//! let store = ContractStore::new(Arc::new(MemoryBackend::new()));
//! let session = Session::new(Arc::new(client), store, NetworkDescriptor::calibration());
//!
//! session.set_source("pragma solidity ^0.8.0; contract C {}").await;
//! assert!(session.compile().await.success);
//!
//! session.connect_wallet().await.unwrap();
//! let result = session.deploy("C").await.unwrap();
//! assert!(result.success);
//!
//! session.set_active_page(Page::History).await;
//! # }
//! ```

pub mod events;
pub mod router;
pub mod session;
pub mod state;

pub use events::{EventBroadcaster, SessionEvent};
pub use router::{render, Notice, NoticeKind, Screen, View};
pub use session::{Session, SessionError};
pub use state::{DeployResult, Page, SessionState};
