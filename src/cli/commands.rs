//! CLI commands for the workbench
//!
//! Each command builds a fresh session over the configured store, so the
//! CLI and the API server share saved contracts through the data directory.

use crate::api::{create_router, ApiState};
use crate::chain::{FixedAccountProvider, MockChainClient, NetworkDescriptor};
use crate::config::{AppConfig, StorageKind};
use crate::contract::{CompilationResult, ContractCollection};
use crate::session::{DeployResult, Session};
use crate::storage::{ContractStore, JsonFileBackend, MemoryBackend, StorageBackend};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Application context
pub struct AppContext {
    pub config: AppConfig,
    pub store: ContractStore,
}

impl AppContext {
    /// Open the configured storage backend
    pub fn new(config: AppConfig) -> CliResult<Self> {
        let backend: Arc<dyn StorageBackend> = match config.storage {
            StorageKind::Memory => Arc::new(MemoryBackend::new()),
            StorageKind::Json => Arc::new(JsonFileBackend::new(config.storage_config())?),
        };
        log::info!("Using {} storage in {:?}", backend.kind(), config.data_dir);

        Ok(Self {
            store: ContractStore::new(backend),
            config,
        })
    }

    /// Chain client as configured
    pub fn chain_client(&self) -> MockChainClient {
        let mut client = MockChainClient::new(self.config.network.clone())
            .with_latency(self.config.stub_latency())
            .with_placeholder_wallet(&self.config.placeholder_wallet);

        if let Some(account) = &self.config.wallet_address {
            client = client.with_provider(Arc::new(FixedAccountProvider::new(
                account,
                &self.config.network.chain_id,
            )));
        }
        client
    }

    /// A new session over the shared store
    pub fn session(&self) -> Session {
        Session::new(
            Arc::new(self.chain_client()),
            self.store.clone(),
            self.config.network.clone(),
        )
    }

    /// Shut the store down
    pub async fn shutdown(&self) -> CliResult<()> {
        self.store.shutdown().await?;
        Ok(())
    }
}

fn print_compilation(result: &CompilationResult) {
    if result.success {
        println!("✅ Compilation successful!");
        if let Some(bytecode) = &result.bytecode {
            let shown: String = bytecode.chars().take(66).collect();
            println!("   ├─ Bytecode: {}... ({} chars)", shown, bytecode.len());
        }
        if let Some(abi) = &result.abi {
            println!("   └─ ABI entries: {}", abi.len());
            for entry in abi {
                println!("      • {}", entry.signature());
            }
        }
    } else {
        println!("❌ Compilation failed");
        for error in &result.errors {
            println!("   ✗ {}", error);
        }
    }
    for warning in &result.warnings {
        println!("   ⚠️  {}", warning);
    }
}

fn print_deploy(result: &DeployResult, network: &NetworkDescriptor) {
    if !result.success {
        println!(
            "❌ Deployment failed: {}",
            result.error_message.as_deref().unwrap_or("unknown error")
        );
        return;
    }

    println!("🚀 Deployment successful!");
    if let Some(hash) = &result.transaction_hash {
        println!("   ├─ Transaction: {}", hash);
        println!("   ├─ Explorer: {}", network.tx_url(hash));
    }
    if let Some(address) = &result.contract_address {
        println!("   └─ Address: {}", address);
    }
}

fn print_history(wallet: &str, contracts: &ContractCollection, network: &NetworkDescriptor) {
    if contracts.is_empty() {
        println!("📭 No contracts found for {}.", wallet);
        return;
    }

    println!(
        "📜 Contracts for {} ({} saved, {} deployed):",
        wallet,
        contracts.len(),
        contracts.deployed_count()
    );
    for record in contracts.iter() {
        let deployed = match &record.deployment {
            Some(d) => format!(
                "deployed {} at {} ({})",
                d.deployed_at.format("%Y-%m-%d %H:%M:%S"),
                d.contract_address,
                network.address_url(&d.contract_address)
            ),
            None => "not deployed".to_string(),
        };
        println!(
            "   {} {} | saved {} | {}",
            record.name,
            record.version_label(),
            record.created_at.format("%Y-%m-%d %H:%M:%S"),
            deployed
        );
    }
}

/// Compile a source file
pub async fn cmd_compile(ctx: &AppContext, file: &Path) -> CliResult<()> {
    let source = fs::read_to_string(file)?;
    println!("🔨 Compiling {:?}...", file);

    let session = ctx.session();
    session.set_source(&source).await;
    let result = session.compile().await;
    print_compilation(&result);
    Ok(())
}

/// Compile a source file and save it as a draft
pub async fn cmd_save(ctx: &AppContext, file: &Path, name: &str) -> CliResult<()> {
    let source = fs::read_to_string(file)?;
    let session = ctx.session();

    let wallet = session.connect_wallet().await?;
    println!("🔐 Wallet: {}", wallet);

    session.set_source(&source).await;
    let result = session.compile().await;
    print_compilation(&result);

    let record = session.save_draft(name).await?;
    println!("💾 Saved {} {}", record.name, record.version_label());
    println!("   └─ Source hash: {}", record.source_hash);
    Ok(())
}

/// Compile and deploy a source file
pub async fn cmd_deploy(ctx: &AppContext, file: &Path, name: &str) -> CliResult<()> {
    let source = fs::read_to_string(file)?;
    let session = ctx.session();

    let wallet = session.connect_wallet().await?;
    println!("🔐 Wallet: {}", wallet);

    session.set_source(&source).await;
    let compiled = session.compile().await;
    print_compilation(&compiled);

    println!("📤 Deploying {} to {}...", name, session.network().name);
    let result = session.deploy(name).await?;
    print_deploy(&result, session.network());
    Ok(())
}

/// List saved contracts for a wallet (the connected one by default)
pub async fn cmd_history(ctx: &AppContext, wallet: Option<&str>) -> CliResult<()> {
    let (wallet, contracts) = match wallet {
        Some(wallet) => (wallet.to_string(), ctx.store.load(wallet).await?),
        None => {
            let session = ctx.session();
            let wallet = session.connect_wallet().await?;
            (wallet, session.snapshot().await.contracts)
        }
    };

    print_history(&wallet, &contracts, &ctx.config.network);
    Ok(())
}

/// Show the target network
pub fn cmd_network(config: &AppConfig) -> CliResult<()> {
    let network = &config.network;
    println!("🌐 {}", network.name);
    println!("   ├─ RPC URL: {}", network.rpc_url);
    println!("   ├─ Chain ID: {}", network.chain_id);
    println!("   ├─ Currency: {}", network.currency);
    println!("   └─ Explorer: {}", network.explorer_url);
    Ok(())
}

/// Run the REST API until Ctrl+C
pub async fn cmd_serve(ctx: &AppContext, port: u16) -> CliResult<()> {
    let state = ApiState {
        session: ctx.session(),
    };
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    println!("🚀 REST API server starting on http://localhost:{}", port);
    println!();
    println!("📖 Available endpoints:");
    println!("   GET  /health                          - Health check");
    println!("   GET  /ws                              - Session events");
    println!("   GET  /api/session                     - Session state");
    println!("   GET  /api/view                        - Active view");
    println!("   POST /api/page                        - Navigate");
    println!("   GET  /api/network                     - Network details");
    println!("   POST /api/wallet/connect              - Connect wallet");
    println!("   POST /api/wallet/disconnect           - Disconnect wallet");
    println!("   PUT  /api/source                      - Set editor source");
    println!("   POST /api/compile                     - Compile");
    println!("   POST /api/deploy                      - Deploy");
    println!("   GET  /api/contracts                   - List contracts");
    println!("   POST /api/contracts                   - Save draft");
    println!("   POST /api/contracts/{{name}}/restore    - Restore into editor");
    println!();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            println!("\n📴 Shutting down API server...");
        })
        .await?;

    ctx.shutdown().await?;
    println!("✅ Storage closed");
    Ok(())
}
