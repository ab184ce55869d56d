//! Session state
//!
//! The single source of truth every view is projected from.

use crate::chain::{ChainError, DeployReceipt};
use crate::contract::{CompilationResult, ContractCollection};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message shown when deploying without a wallet
pub const CONNECT_WALLET_MESSAGE: &str = "Please connect your wallet first";

/// Message shown when deploying without a successful compile
pub const COMPILE_FIRST_MESSAGE: &str = "Please compile your contract successfully before deploying";

/// The four pages of the workbench
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Editor,
    Deploy,
    History,
}

impl Page {
    /// Navbar order
    pub const ALL: [Page; 4] = [Page::Home, Page::Editor, Page::Deploy, Page::History];

    /// Route id
    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Editor => "editor",
            Page::Deploy => "deploy",
            Page::History => "history",
        }
    }

    /// Navbar label
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Editor => "Write & Compile",
            Page::Deploy => "Deploy",
            Page::History => "History",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = String;

    /// Accepts route ids and navbar labels, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Page::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(wanted) || p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown page: {}", s))
    }
}

/// Outcome of a deploy request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl DeployResult {
    /// A deploy refused before reaching the chain client
    pub fn rejected(message: &str) -> Self {
        Self {
            success: false,
            contract_address: None,
            transaction_hash: None,
            error_message: Some(message.to_string()),
        }
    }

    pub fn failed(error: &ChainError) -> Self {
        Self {
            success: false,
            contract_address: None,
            transaction_hash: None,
            error_message: Some(error.to_string()),
        }
    }

    pub fn deployed(receipt: &DeployReceipt) -> Self {
        Self {
            success: true,
            contract_address: Some(receipt.contract_address.clone()),
            transaction_hash: Some(receipt.transaction_hash.clone()),
            error_message: None,
        }
    }

    /// Deployed on chain, but the record could not be saved
    pub fn unsaved(receipt: &DeployReceipt, error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            error_message: Some(format!("Deployed but not saved: {}", error)),
            ..Self::deployed(receipt)
        }
    }
}

/// Everything the views need
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub active_page: Page,
    pub wallet_id: Option<String>,
    /// Editor contents
    pub source_text: String,
    pub compilation_result: Option<CompilationResult>,
    pub is_compiling: bool,
    pub is_deploying: bool,
    pub deploy_result: Option<DeployResult>,
    pub contracts: ContractCollection,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wallet_connected(&self) -> bool {
        self.wallet_id.is_some()
    }

    /// Whether the last compile produced deployable bytecode
    pub fn has_successful_compile(&self) -> bool {
        self.compilation_result
            .as_ref()
            .and_then(|r| r.deployable_bytecode())
            .is_some()
    }

    /// Why a deploy would be refused right now, if it would
    pub fn deploy_blocker(&self) -> Option<&'static str> {
        if !self.wallet_connected() {
            Some(CONNECT_WALLET_MESSAGE)
        } else if !self.has_successful_compile() {
            Some(COMPILE_FIRST_MESSAGE)
        } else {
            None
        }
    }
}
