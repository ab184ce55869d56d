//! Session controller
//!
//! Owns the session state and drives the compile -> save -> deploy -> list
//! workflow against a chain client and a contract store.
//!
//! The state lock is never held across an `.await` on the client or the
//! store. A compile or deploy that finishes after the user navigated away
//! still lands in the state.

use crate::chain::{ChainClient, NetworkDescriptor};
use crate::contract::record::source_digest;
use crate::contract::{CompilationResult, ContractRecord, Deployment, RecordError};
use crate::session::events::{EventBroadcaster, SessionEvent};
use crate::session::router::{self, Screen};
use crate::session::state::{DeployResult, Page, SessionState};
use crate::storage::{ContractStore, StorageError};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{broadcast, RwLock};

/// Session errors
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Wallet not connected")]
    WalletNotConnected,
    #[error("Contract not found: {0}")]
    ContractNotFound(String),
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] RecordError),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Cloneable handle to one user session
#[derive(Clone)]
pub struct Session {
    state: Arc<RwLock<SessionState>>,
    client: Arc<dyn ChainClient>,
    store: ContractStore,
    network: NetworkDescriptor,
    events: Arc<EventBroadcaster>,
}

impl Session {
    /// Create a session on the home page with no wallet
    pub fn new(client: Arc<dyn ChainClient>, store: ContractStore, network: NetworkDescriptor) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::new())),
            client,
            store,
            network,
            events: Arc::new(EventBroadcaster::new()),
        }
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Current screen projection
    pub async fn screen(&self) -> Screen {
        let state = self.state.read().await;
        router::render(&state, &self.network)
    }

    pub fn network(&self) -> &NetworkDescriptor {
        &self.network
    }

    pub fn store(&self) -> &ContractStore {
        &self.store
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub fn events(&self) -> Arc<EventBroadcaster> {
        self.events.clone()
    }

    /// Navigate; always allowed
    pub async fn set_active_page(&self, page: Page) {
        self.state.write().await.active_page = page;
        self.events.broadcast(SessionEvent::PageChanged { page });
    }

    /// Replace the editor contents
    pub async fn set_source(&self, source: &str) {
        self.state.write().await.source_text = source.to_string();
    }

    /// Connect a wallet and load its contracts.
    ///
    /// The wallet stays connected even if loading fails.
    pub async fn connect_wallet(&self) -> Result<String, SessionError> {
        let wallet = self.client.connect().await;
        {
            let mut state = self.state.write().await;
            state.wallet_id = Some(wallet.clone());
            state.contracts.clear();
        }
        log::info!("Wallet connected: {}", wallet);
        self.events.broadcast(SessionEvent::WalletConnected {
            wallet: wallet.clone(),
        });

        self.reload_contracts().await?;
        Ok(wallet)
    }

    /// Forget the wallet and its contracts
    pub async fn disconnect_wallet(&self) {
        let previous = {
            let mut state = self.state.write().await;
            state.contracts.clear();
            state.wallet_id.take()
        };
        if let Some(wallet) = previous {
            log::info!("Wallet disconnected: {}", wallet);
            self.events.broadcast(SessionEvent::WalletDisconnected);
        }
    }

    /// Replace the in-memory contracts with the stored collection
    pub async fn reload_contracts(&self) -> Result<usize, SessionError> {
        let wallet = self.current_wallet().await?;
        let collection = self.store.load(&wallet).await?;
        let count = collection.len();

        {
            let mut state = self.state.write().await;
            // A different wallet may have connected while we were loading
            if state.wallet_id.as_deref() != Some(wallet.as_str()) {
                log::debug!("Discarding contracts loaded for {}", wallet);
                return Ok(0);
            }
            state.contracts = collection;
        }

        log::debug!("Loaded {} contracts for {}", count, wallet);
        self.events
            .broadcast(SessionEvent::ContractsLoaded { wallet, count });
        Ok(count)
    }

    /// Compile the editor contents
    pub async fn compile(&self) -> CompilationResult {
        let source = {
            let mut state = self.state.write().await;
            state.is_compiling = true;
            state.compilation_result = None;
            state.source_text.clone()
        };
        self.events.broadcast(SessionEvent::CompileStarted);

        let result = match self.client.compile(&source).await {
            Ok(result) => result,
            Err(e) => {
                log::warn!("Compile failed: {}", e);
                CompilationResult::failure(e.to_string())
            }
        };

        {
            let mut state = self.state.write().await;
            state.compilation_result = Some(result.clone());
            state.is_compiling = false;
        }
        log::info!(
            "Compilation {} ({} errors, {} warnings)",
            if result.success { "succeeded" } else { "failed" },
            result.errors.len(),
            result.warnings.len()
        );
        self.events.broadcast(SessionEvent::CompileFinished {
            result: result.clone(),
        });
        result
    }

    /// Save the editor contents (and last successful compile output) as `name`
    pub async fn save_draft(&self, name: &str) -> Result<ContractRecord, SessionError> {
        let (wallet, record) = {
            let state = self.state.read().await;
            let wallet = state
                .wallet_id
                .clone()
                .ok_or(SessionError::WalletNotConnected)?;
            let draft = ContractRecord::draft(name, &state.source_text, state.compilation_result.as_ref())?;
            let record = match state.contracts.get(&draft.name) {
                Some(previous) => draft.supersede(previous),
                None => draft,
            };
            (wallet, record)
        };

        self.persist(&wallet, record.clone()).await?;
        log::info!("Saved {} {} for {}", record.name, record.version_label(), wallet);
        self.events.broadcast(SessionEvent::ContractSaved {
            name: record.name.clone(),
            revision: record.revision,
        });
        Ok(record)
    }

    /// Deploy the last successful compile output as `name`.
    ///
    /// Without a wallet or a successful compile this answers immediately with
    /// a failed result and touches neither the chain client nor the store.
    pub async fn deploy(&self, name: &str) -> Result<DeployResult, SessionError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(RecordError::EmptyName.into());
        }

        let prepared = {
            let mut state = self.state.write().await;
            match state.deploy_blocker() {
                Some(message) => {
                    let result = DeployResult::rejected(message);
                    state.deploy_result = Some(result.clone());
                    Err(result)
                }
                None => {
                    let target = DeployTarget::capture(&state, &name)?;
                    state.is_deploying = true;
                    state.deploy_result = None;
                    Ok(target)
                }
            }
        };

        let target = match prepared {
            Ok(target) => target,
            Err(rejected) => {
                log::info!("Deploy of {} refused: {:?}", name, rejected.error_message);
                return Ok(rejected);
            }
        };
        self.events
            .broadcast(SessionEvent::DeployStarted { name: name.clone() });

        let abi = target.record.abi.clone().unwrap_or_default();
        let outcome = self
            .client
            .deploy(&target.bytecode, &abi, &target.wallet)
            .await;

        // Persist before publishing the result
        let (result, saved) = match outcome {
            Ok(receipt) => {
                let mut record = target.record;
                let saved = match record.attach_deployment(Deployment {
                    transaction_hash: receipt.transaction_hash.clone(),
                    contract_address: receipt.contract_address.clone(),
                    deployed_at: Utc::now(),
                }) {
                    Ok(()) => self.persist(&target.wallet, record).await,
                    Err(e) => Err(e.into()),
                };
                let result = match &saved {
                    Ok(()) => DeployResult::deployed(&receipt),
                    Err(e) => {
                        log::error!("Deployed {} but could not save it: {}", name, e);
                        DeployResult::unsaved(&receipt, e)
                    }
                };
                (result, saved)
            }
            Err(e) => {
                log::warn!("Deploy of {} failed: {}", name, e);
                (DeployResult::failed(&e), Ok(()))
            }
        };

        {
            let mut state = self.state.write().await;
            state.is_deploying = false;
            state.deploy_result = Some(result.clone());
        }
        self.events.broadcast(SessionEvent::DeployFinished {
            name: name.clone(),
            result: result.clone(),
        });

        saved?;
        Ok(result)
    }

    /// Load a saved contract back into the editor
    pub async fn restore_contract(&self, name: &str) -> Result<ContractRecord, SessionError> {
        let record = {
            let mut state = self.state.write().await;
            let record = state
                .contracts
                .get(name)
                .cloned()
                .ok_or_else(|| SessionError::ContractNotFound(name.to_string()))?;

            state.source_text = record.source_text.clone();
            state.compilation_result = record.compiled_bytecode.as_ref().map(|bytecode| {
                CompilationResult::compiled(bytecode.clone(), record.abi.clone().unwrap_or_default())
            });
            record
        };

        self.events.broadcast(SessionEvent::ContractRestored {
            name: record.name.clone(),
        });
        Ok(record)
    }

    async fn current_wallet(&self) -> Result<String, SessionError> {
        self.state
            .read()
            .await
            .wallet_id
            .clone()
            .ok_or(SessionError::WalletNotConnected)
    }

    /// Write to the store, then mirror into memory if `wallet` is still active
    async fn persist(&self, wallet: &str, record: ContractRecord) -> Result<(), SessionError> {
        self.store.save(wallet, &record.name, &record).await?;

        let mut state = self.state.write().await;
        if state.wallet_id.as_deref() == Some(wallet) {
            state.contracts.upsert(record);
        }
        Ok(())
    }
}

/// What a deploy needs, captured before the lock is released
struct DeployTarget {
    wallet: String,
    bytecode: String,
    record: ContractRecord,
}

impl DeployTarget {
    /// Caller has checked `deploy_blocker()`
    fn capture(state: &SessionState, name: &str) -> Result<Self, RecordError> {
        let compilation = state.compilation_result.as_ref();
        let bytecode = compilation
            .and_then(|c| c.deployable_bytecode())
            .unwrap_or_default()
            .to_string();

        // Attach to the saved record when it holds this exact source and
        // bytecode, otherwise record the current source as a new revision.
        let source_hash = source_digest(&state.source_text);
        let record = match state.contracts.get(name) {
            Some(existing)
                if existing.compiled_bytecode.as_deref() == Some(bytecode.as_str())
                    && existing.source_hash == source_hash =>
            {
                existing.clone()
            }
            existing => {
                let draft = ContractRecord::draft(name, &state.source_text, compilation)?;
                match existing {
                    Some(previous) => draft.supersede(previous),
                    None => draft,
                }
            }
        };

        Ok(Self {
            wallet: state.wallet_id.clone().unwrap_or_default(),
            bytecode,
            record,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{
        ChainError, DeployReceipt, FixedAccountProvider, MockChainClient, StubLatency,
        PLACEHOLDER_WALLET,
    };
    use crate::contract::Abi;
    use crate::session::router::View;
    use crate::contract::ContractCollection;
    use crate::storage::{MemoryBackend, StorageBackend};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    const SOURCE: &str = "pragma solidity ^0.8.0; contract C {}";

    fn mock_client() -> MockChainClient {
        MockChainClient::new(NetworkDescriptor::calibration()).with_latency(StubLatency::instant())
    }

    fn session_with(client: Arc<dyn ChainClient>) -> Session {
        let store = ContractStore::new(Arc::new(MemoryBackend::new()));
        Session::new(client, store, NetworkDescriptor::calibration())
    }

    fn session() -> Session {
        session_with(Arc::new(mock_client()))
    }

    /// Counts deploy calls and fails compile with an error
    #[derive(Default)]
    struct CountingClient {
        deploys: AtomicUsize,
    }

    #[async_trait]
    impl ChainClient for CountingClient {
        async fn compile(&self, _source: &str) -> Result<CompilationResult, ChainError> {
            Err(ChainError::CompilerUnavailable("solc missing".to_string()))
        }

        async fn deploy(&self, _: &str, _: &Abi, _: &str) -> Result<DeployReceipt, ChainError> {
            self.deploys.fetch_add(1, Ordering::SeqCst);
            Err(ChainError::DeploymentFailed("unreachable".to_string()))
        }

        async fn connect(&self) -> String {
            "0xcounting".to_string()
        }
    }

    #[tokio::test]
    async fn test_workflow_scenario() {
        let session = session();

        session.set_source(SOURCE).await;
        assert!(session.compile().await.success);

        session.set_source("contract C {}").await;
        let failed = session.compile().await;
        assert!(!failed.success);
        assert!(!failed.errors.is_empty());

        // Deploy without a wallet is refused and stores nothing
        let refused = session.deploy("HelloWorld").await.unwrap();
        assert!(!refused.success);
        assert!(refused.error_message.is_some());

        let wallet = session.connect_wallet().await.unwrap();
        assert!(!wallet.is_empty());
        assert!(session.store().load(&wallet).await.unwrap().is_empty());

        session.set_source(SOURCE).await;
        session.save_draft("HelloWorld").await.unwrap();

        let loaded = session.store().load(&wallet).await.unwrap();
        assert_eq!(loaded.get("HelloWorld").unwrap().source_text, SOURCE);
    }

    #[tokio::test]
    async fn test_deploy_round_trips_identifiers() {
        let session = session();
        session.set_source(SOURCE).await;
        session.compile().await;
        let wallet = session.connect_wallet().await.unwrap();

        let result = session.deploy("HelloWorld").await.unwrap();
        assert!(result.success);

        let stored = session.store().load(&wallet).await.unwrap();
        let record = stored.get("HelloWorld").unwrap();
        let deployment = record.deployment.as_ref().unwrap();
        assert_eq!(Some(&deployment.contract_address), result.contract_address.as_ref());
        assert_eq!(Some(&deployment.transaction_hash), result.transaction_hash.as_ref());
        assert!(record.has_bytecode());

        // The in-memory view matches the store
        assert_eq!(session.snapshot().await.contracts.get("HelloWorld"), Some(record));
    }

    #[tokio::test]
    async fn test_deploy_attaches_to_saved_draft() {
        let session = session();
        session.set_source(SOURCE).await;
        session.compile().await;
        session.connect_wallet().await.unwrap();

        let saved = session.save_draft("HelloWorld").await.unwrap();
        session.deploy("HelloWorld").await.unwrap();

        let state = session.snapshot().await;
        let record = state.contracts.get("HelloWorld").unwrap();
        assert_eq!(record.revision, saved.revision);
        assert_eq!(record.created_at, saved.created_at);
        assert!(record.is_deployed());
    }

    #[tokio::test]
    async fn test_deploy_after_edit_creates_new_revision() {
        let session = session();
        session.set_source(SOURCE).await;
        session.compile().await;
        session.connect_wallet().await.unwrap();
        let saved = session.save_draft("HelloWorld").await.unwrap();

        let edited = "pragma solidity ^0.8.0; contract C { uint256 x; }";
        session.set_source(edited).await;
        session.compile().await;
        session.deploy("HelloWorld").await.unwrap();

        let state = session.snapshot().await;
        let record = state.contracts.get("HelloWorld").unwrap();
        assert_eq!(record.revision, saved.revision + 1);
        assert_eq!(record.source_text, edited);
        assert_eq!(record.source_hash, source_digest(edited));
        assert!(record.is_deployed());
    }

    /// Accepts loads but refuses every write
    struct ReadOnlyBackend;

    #[async_trait]
    impl StorageBackend for ReadOnlyBackend {
        async fn upsert(&self, _: &str, _: &str, _: &ContractRecord) -> Result<(), StorageError> {
            Err(StorageError::InvalidData("read-only".to_string()))
        }

        async fn load_all(&self, _: &str) -> Result<ContractCollection, StorageError> {
            Ok(ContractCollection::new())
        }

        fn kind(&self) -> &'static str {
            "read-only"
        }
    }

    #[tokio::test]
    async fn test_unsaved_deploy_is_not_reported_as_success() {
        let store = ContractStore::new(Arc::new(ReadOnlyBackend));
        let session = Session::new(Arc::new(mock_client()), store, NetworkDescriptor::calibration());
        let mut rx = session.subscribe();
        session.set_source(SOURCE).await;
        session.compile().await;
        session.connect_wallet().await.unwrap();

        assert!(matches!(
            session.deploy("C").await,
            Err(SessionError::Storage(_))
        ));

        let state = session.snapshot().await;
        assert!(!state.is_deploying);
        assert!(state.contracts.is_empty());
        let result = state.deploy_result.unwrap();
        assert!(!result.success);
        assert!(result.transaction_hash.is_some());
        assert!(result.error_message.unwrap().contains("not saved"));

        // The finished event carries the same result
        loop {
            if let SessionEvent::DeployFinished { result, .. } = rx.recv().await.unwrap() {
                assert!(!result.success);
                break;
            }
        }
    }

    #[tokio::test]
    async fn test_deploy_preconditions_skip_client() {
        let client = Arc::new(CountingClient::default());
        let session = session_with(client.clone());

        // No wallet
        let result = session.deploy("C").await.unwrap();
        assert!(!result.success);

        // Wallet, but the compile failed
        session.connect_wallet().await.unwrap();
        session.set_source(SOURCE).await;
        let compiled = session.compile().await;
        assert!(!compiled.success);
        assert_eq!(compiled.errors.len(), 1);

        let result = session.deploy("C").await.unwrap();
        assert!(!result.success);
        assert_eq!(client.deploys.load(Ordering::SeqCst), 0);
        assert!(session.store().load("0xcounting").await.unwrap().is_empty());
        assert!(!session.snapshot().await.is_deploying);
    }

    #[tokio::test]
    async fn test_failed_chain_deploy_stores_nothing() {
        let client = Arc::new(CountingClient::default());
        let session = session_with(client.clone());
        session.connect_wallet().await.unwrap();

        // Restore-style state: a successful compile from elsewhere
        {
            let mut state = session.state.write().await;
            state.compilation_result = Some(crate::contract::Compiler::new().compile(SOURCE));
        }

        let result = session.deploy("C").await.unwrap();
        assert!(!result.success);
        assert_eq!(client.deploys.load(Ordering::SeqCst), 1);
        assert!(session.store().load("0xcounting").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_navigation_preserves_state() {
        let session = session();
        session.set_source(SOURCE).await;
        session.compile().await;
        session.connect_wallet().await.unwrap();
        session.deploy("C").await.unwrap();
        let before = session.snapshot().await;

        for page in [Page::History, Page::Home, Page::Editor, Page::Deploy, Page::Home] {
            session.set_active_page(page).await;
            assert_eq!(session.screen().await.view.page(), page);
        }

        let after = session.snapshot().await;
        assert_eq!(after.contracts, before.contracts);
        assert_eq!(after.compilation_result, before.compilation_result);
        assert_eq!(after.deploy_result, before.deploy_result);
    }

    #[tokio::test]
    async fn test_save_requires_wallet() {
        let session = session();
        session.set_source(SOURCE).await;
        assert!(matches!(
            session.save_draft("C").await,
            Err(SessionError::WalletNotConnected)
        ));
    }

    #[tokio::test]
    async fn test_resave_creates_new_revision() {
        let session = session();
        session.connect_wallet().await.unwrap();
        session.set_source(SOURCE).await;

        let first = session.save_draft("C").await.unwrap();
        session.set_source("pragma solidity ^0.8.1; contract C {}").await;
        let second = session.save_draft("C").await.unwrap();

        assert_eq!(first.revision, 1);
        assert_eq!(second.revision, 2);
        assert_eq!(second.created_at, first.created_at);
        assert_ne!(second.source_hash, first.source_hash);
        assert_eq!(session.snapshot().await.contracts.len(), 1);
    }

    #[tokio::test]
    async fn test_wallet_change_replaces_contracts() {
        let store = ContractStore::new(Arc::new(MemoryBackend::new()));
        let first = Session::new(
            Arc::new(mock_client()),
            store.clone(),
            NetworkDescriptor::calibration(),
        );
        first.connect_wallet().await.unwrap();
        first.set_source(SOURCE).await;
        first.save_draft("Placeholder").await.unwrap();

        // Same store, a provider-backed wallet
        let client = mock_client().with_provider(Arc::new(FixedAccountProvider::new("0xreal", "314159")));
        let second = Session::new(Arc::new(client), store, NetworkDescriptor::calibration());
        assert_eq!(second.connect_wallet().await.unwrap(), "0xreal");
        assert!(second.snapshot().await.contracts.is_empty());

        first.disconnect_wallet().await;
        let state = first.snapshot().await;
        assert!(state.wallet_id.is_none());
        assert!(state.contracts.is_empty());

        // Reconnecting reloads from the store
        assert_eq!(first.connect_wallet().await.unwrap(), PLACEHOLDER_WALLET);
        assert!(first.snapshot().await.contracts.contains("Placeholder"));
    }

    #[tokio::test]
    async fn test_restore_contract() {
        let session = session();
        session.connect_wallet().await.unwrap();
        session.set_source(SOURCE).await;
        session.compile().await;
        session.save_draft("Compiled").await.unwrap();

        session.set_source("unsaved").await;
        {
            session.state.write().await.compilation_result = None;
        }
        session.save_draft("Uncompiled").await.unwrap();

        session.restore_contract("Compiled").await.unwrap();
        let state = session.snapshot().await;
        assert_eq!(state.source_text, SOURCE);
        assert!(state.has_successful_compile());

        session.restore_contract("Uncompiled").await.unwrap();
        let state = session.snapshot().await;
        assert_eq!(state.source_text, "unsaved");
        assert!(state.compilation_result.is_none());

        assert!(matches!(
            session.restore_contract("Missing").await,
            Err(SessionError::ContractNotFound(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_compile_completion_lands_after_navigation() {
        let client = MockChainClient::new(NetworkDescriptor::calibration());
        let session = session_with(Arc::new(client));
        session.set_source(SOURCE).await;

        let background = session.clone();
        let pending = tokio::spawn(async move { background.compile().await });

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(session.snapshot().await.is_compiling);
        assert!(session.snapshot().await.compilation_result.is_none());

        session.set_active_page(Page::History).await;
        pending.await.unwrap();

        let state = session.snapshot().await;
        assert_eq!(state.active_page, Page::History);
        assert!(!state.is_compiling);
        assert!(state.has_successful_compile());
    }

    #[tokio::test(start_paused = true)]
    async fn test_deploy_completion_lands_after_navigation() {
        let client = MockChainClient::new(NetworkDescriptor::calibration());
        let session = session_with(Arc::new(client));
        session.set_source(SOURCE).await;
        session.compile().await;
        let wallet = session.connect_wallet().await.unwrap();
        session.set_active_page(Page::Deploy).await;

        let background = session.clone();
        let pending = tokio::spawn(async move { background.deploy("C").await });

        tokio::time::sleep(Duration::from_millis(10)).await;
        let state = session.snapshot().await;
        assert!(state.is_deploying);
        assert!(state.deploy_result.is_none());

        session.set_active_page(Page::History).await;
        let result = pending.await.unwrap().unwrap();
        assert!(result.success);

        let state = session.snapshot().await;
        assert_eq!(state.active_page, Page::History);
        assert!(!state.is_deploying);
        assert_eq!(state.deploy_result, Some(result));
        assert!(session.store().load(&wallet).await.unwrap().get("C").unwrap().is_deployed());
    }

    #[tokio::test]
    async fn test_events_follow_workflow() {
        let session = session();
        let mut rx = session.subscribe();

        session.set_active_page(Page::Editor).await;
        session.set_source(SOURCE).await;
        session.compile().await;

        assert_eq!(
            rx.recv().await.unwrap(),
            SessionEvent::PageChanged { page: Page::Editor }
        );
        assert_eq!(rx.recv().await.unwrap(), SessionEvent::CompileStarted);
        assert!(matches!(
            rx.recv().await.unwrap(),
            SessionEvent::CompileFinished { result } if result.success
        ));
    }

    #[tokio::test]
    async fn test_screen_reflects_deploy() {
        let session = session();
        session.set_source(SOURCE).await;
        session.compile().await;
        session.connect_wallet().await.unwrap();
        session.deploy("C").await.unwrap();
        session.set_active_page(Page::Deploy).await;

        match session.screen().await.view {
            View::Deploy {
                result,
                explorer_tx_url,
                ..
            } => {
                let hash = result.unwrap().transaction_hash.unwrap();
                assert!(explorer_tx_url.unwrap().ends_with(&hash));
            }
            other => panic!("unexpected view {:?}", other),
        }
    }
}
