//! Session events
//!
//! Every state transition is published on a broadcast channel so a front-end
//! can re-render without polling.

use crate::contract::CompilationResult;
use crate::session::state::{DeployResult, Page};
use serde::Serialize;
use tokio::sync::broadcast;

/// Maximum number of events to buffer per subscriber
const BROADCAST_CAPACITY: usize = 100;

/// Events published by a session
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum SessionEvent {
    PageChanged { page: Page },
    WalletConnected { wallet: String },
    WalletDisconnected,
    ContractsLoaded { wallet: String, count: usize },
    CompileStarted,
    CompileFinished { result: CompilationResult },
    DeployStarted { name: String },
    DeployFinished { name: String, result: DeployResult },
    ContractSaved { name: String, revision: u32 },
    ContractRestored { name: String },
    /// Sent to each new subscriber
    Connected { message: String },
}

/// Broadcaster for session events
#[derive(Debug)]
pub struct EventBroadcaster {
    sender: broadcast::Sender<SessionEvent>,
}

impl EventBroadcaster {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self { sender }
    }

    /// Publish an event; dropped when nobody listens
    pub fn broadcast(&self, event: SessionEvent) {
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
