//! Replifi CLI Application
//!
//! A command-line interface for compiling, saving and deploying contracts,
//! and for running the workbench API server.

use clap::{Parser, Subcommand};
use replifi::cli::{self, AppContext};
use replifi::config::AppConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "replifi")]
#[command(version = "1.0.0")]
#[command(about = "Smart-contract workbench for the Filecoin Calibration testnet", long_about = None)]
struct Cli {
    /// Data directory for saved contracts (overrides the config file)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the REST API server
    Serve {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Compile a contract source file
    Compile {
        /// Contract source file (.sol)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Compile a source file and save it as a draft
    Save {
        /// Contract source file (.sol)
        #[arg(short, long)]
        file: PathBuf,

        /// Contract name
        #[arg(short, long, default_value = "HelloWorld")]
        name: String,

        /// Wallet address to connect as
        #[arg(short, long)]
        wallet: Option<String>,
    },

    /// Compile and deploy a source file
    Deploy {
        /// Contract source file (.sol)
        #[arg(short, long)]
        file: PathBuf,

        /// Contract name
        #[arg(short, long, default_value = "HelloWorld")]
        name: String,

        /// Wallet address to connect as
        #[arg(short, long)]
        wallet: Option<String>,
    },

    /// List saved contracts
    History {
        /// Wallet to list (defaults to the connected wallet)
        #[arg(short, long)]
        wallet: Option<String>,
    },

    /// Show the target network
    Network,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async move {
        match cli.command {
            // Needs no storage
            Commands::Network => {
                cli::cmd_network(&config)?;
            }

            Commands::Serve { port } => {
                let port = port.unwrap_or(config.api_port);
                let ctx = AppContext::new(config)?;
                cli::cmd_serve(&ctx, port).await?;
            }

            Commands::Compile { file } => {
                let ctx = AppContext::new(config)?;
                cli::cmd_compile(&ctx, &file).await?;
            }

            Commands::Save { file, name, wallet } => {
                config.wallet_address = wallet.or(config.wallet_address);
                let ctx = AppContext::new(config)?;
                cli::cmd_save(&ctx, &file, &name).await?;
            }

            Commands::Deploy { file, name, wallet } => {
                config.wallet_address = wallet.or(config.wallet_address);
                let ctx = AppContext::new(config)?;
                cli::cmd_deploy(&ctx, &file, &name).await?;
            }

            Commands::History { wallet } => {
                let ctx = AppContext::new(config)?;
                cli::cmd_history(&ctx, wallet.as_deref()).await?;
            }
        }

        Ok::<(), Box<dyn std::error::Error>>(())
    })?;

    Ok(())
}
