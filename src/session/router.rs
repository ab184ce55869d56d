//! View selection
//!
//! Maps session state to exactly one of the four page projections. Pure:
//! nothing here mutates state or performs I/O.

use crate::chain::NetworkDescriptor;
use crate::contract::CompilationResult;
use crate::session::state::{DeployResult, Page, SessionState, COMPILE_FIRST_MESSAGE, CONNECT_WALLET_MESSAGE};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Why a page shows a notice instead of its normal content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    ConnectWallet,
    CompileFirst,
    NoContracts,
}

/// Inline notice rendered in place of a guard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: &'static str,
}

impl Notice {
    fn new(kind: NoticeKind) -> Self {
        let message = match kind {
            NoticeKind::ConnectWallet => CONNECT_WALLET_MESSAGE,
            NoticeKind::CompileFirst => COMPILE_FIRST_MESSAGE,
            NoticeKind::NoContracts => {
                "No contracts found. Deploy your first contract to see it here."
            }
        };
        Self { kind, message }
    }
}

/// Home page feature card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Write & Compile Smart Contracts",
        description: "Built-in Solidity editor with real-time compilation and error detection",
    },
    Feature {
        title: "Deploy to Filecoin Calibration Testnet",
        description: "One-click deployment to Filecoin testnet with automatic transaction tracking",
    },
    Feature {
        title: "Track Contract History & Versions",
        description: "Complete version control system for your smart contracts with diff tracking",
    },
    Feature {
        title: "Wallet-based Authentication",
        description: "Secure, decentralized authentication using your Filecoin wallet",
    },
];

/// One row of the history table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub name: String,
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub deployed_at: Option<DateTime<Utc>>,
    pub contract_address: Option<String>,
    pub explorer_url: Option<String>,
}

/// Page content
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum View {
    Home {
        features: Vec<Feature>,
    },
    Editor {
        source: String,
        compilation: Option<CompilationResult>,
        is_compiling: bool,
    },
    Deploy {
        network: NetworkDescriptor,
        notice: Option<Notice>,
        can_deploy: bool,
        is_deploying: bool,
        result: Option<DeployResult>,
        explorer_tx_url: Option<String>,
    },
    History {
        notice: Option<Notice>,
        entries: Vec<HistoryEntry>,
    },
}

impl View {
    pub fn page(&self) -> Page {
        match self {
            View::Home { .. } => Page::Home,
            View::Editor { .. } => Page::Editor,
            View::Deploy { .. } => Page::Deploy,
            View::History { .. } => Page::History,
        }
    }
}

/// Navigation bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navbar {
    pub active: Page,
    pub wallet_label: String,
}

/// What the front-end draws
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screen {
    pub navbar: Navbar,
    pub view: View,
}

/// Shorten `0x1234567890abcdef` to `0x1234...cdef`
pub fn short_wallet(wallet: &str) -> String {
    let chars: Vec<char> = wallet.chars().collect();
    if chars.len() <= 10 {
        return wallet.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Project `state` onto the active page
pub fn render(state: &SessionState, network: &NetworkDescriptor) -> Screen {
    let navbar = Navbar {
        active: state.active_page,
        wallet_label: state
            .wallet_id
            .as_deref()
            .map(short_wallet)
            .unwrap_or_else(|| "Connect Wallet".to_string()),
    };

    let view = match state.active_page {
        Page::Home => View::Home {
            features: FEATURES.to_vec(),
        },
        Page::Editor => View::Editor {
            source: state.source_text.clone(),
            compilation: state.compilation_result.clone(),
            is_compiling: state.is_compiling,
        },
        Page::Deploy => deploy_view(state, network),
        Page::History => history_view(state, network),
    };

    Screen { navbar, view }
}

fn deploy_view(state: &SessionState, network: &NetworkDescriptor) -> View {
    let notice = if !state.wallet_connected() {
        Some(Notice::new(NoticeKind::ConnectWallet))
    } else if !state.has_successful_compile() {
        Some(Notice::new(NoticeKind::CompileFirst))
    } else {
        None
    };

    let explorer_tx_url = state
        .deploy_result
        .as_ref()
        .filter(|r| r.success)
        .and_then(|r| r.transaction_hash.as_deref())
        .map(|hash| network.tx_url(hash));

    View::Deploy {
        network: network.clone(),
        can_deploy: notice.is_none() && !state.is_deploying,
        notice,
        is_deploying: state.is_deploying,
        result: state.deploy_result.clone(),
        explorer_tx_url,
    }
}

fn history_view(state: &SessionState, network: &NetworkDescriptor) -> View {
    if !state.wallet_connected() {
        return View::History {
            notice: Some(Notice::new(NoticeKind::ConnectWallet)),
            entries: Vec::new(),
        };
    }

    let entries: Vec<HistoryEntry> = state
        .contracts
        .iter()
        .map(|record| {
            let deployment = record.deployment.as_ref();
            HistoryEntry {
                name: record.name.clone(),
                version: record.version_label(),
                created_at: record.created_at,
                deployed_at: deployment.map(|d| d.deployed_at),
                contract_address: deployment.map(|d| d.contract_address.clone()),
                explorer_url: deployment.map(|d| network.address_url(&d.contract_address)),
            }
        })
        .collect();

    View::History {
        notice: entries
            .is_empty()
            .then(|| Notice::new(NoticeKind::NoContracts)),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{Compiler, ContractRecord, Deployment};

    const SOURCE: &str = "pragma solidity ^0.8.0; contract C {}";

    fn network() -> NetworkDescriptor {
        NetworkDescriptor::calibration()
    }

    #[test]
    fn test_every_page_selects_its_view() {
        let mut state = SessionState::new();
        for page in Page::ALL {
            state.active_page = page;
            let screen = render(&state, &network());
            assert_eq!(screen.view.page(), page);
            assert_eq!(screen.navbar.active, page);
        }
    }

    #[test]
    fn test_navbar_wallet_label() {
        let mut state = SessionState::new();
        assert_eq!(render(&state, &network()).navbar.wallet_label, "Connect Wallet");

        state.wallet_id = Some("0x1234567890abcdef".to_string());
        assert_eq!(render(&state, &network()).navbar.wallet_label, "0x1234...cdef");
    }

    #[test]
    fn test_short_wallet_keeps_short_ids() {
        assert_eq!(short_wallet("0xabc"), "0xabc");
    }

    #[test]
    fn test_deploy_notices() {
        let mut state = SessionState {
            active_page: Page::Deploy,
            ..Default::default()
        };

        match render(&state, &network()).view {
            View::Deploy { notice, can_deploy, .. } => {
                assert_eq!(notice.unwrap().kind, NoticeKind::ConnectWallet);
                assert!(!can_deploy);
            }
            other => panic!("unexpected view {:?}", other),
        }

        state.wallet_id = Some("0xw".to_string());
        match render(&state, &network()).view {
            View::Deploy { notice, .. } => {
                assert_eq!(notice.unwrap().kind, NoticeKind::CompileFirst)
            }
            other => panic!("unexpected view {:?}", other),
        }

        state.compilation_result = Some(Compiler::new().compile(SOURCE));
        state.deploy_result = Some(DeployResult {
            success: true,
            contract_address: Some("0xc".to_string()),
            transaction_hash: Some("0xt".to_string()),
            error_message: None,
        });
        match render(&state, &network()).view {
            View::Deploy {
                notice,
                can_deploy,
                explorer_tx_url,
                ..
            } => {
                assert!(notice.is_none());
                assert!(can_deploy);
                assert_eq!(
                    explorer_tx_url.as_deref(),
                    Some("https://calibration.filscan.io/tx/0xt")
                );
            }
            other => panic!("unexpected view {:?}", other),
        }

        state.is_deploying = true;
        match render(&state, &network()).view {
            View::Deploy { can_deploy, .. } => assert!(!can_deploy),
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_history_entries() {
        let mut state = SessionState {
            active_page: Page::History,
            wallet_id: Some("0xw".to_string()),
            ..Default::default()
        };

        match render(&state, &network()).view {
            View::History { notice, entries } => {
                assert_eq!(notice.unwrap().kind, NoticeKind::NoContracts);
                assert!(entries.is_empty());
            }
            other => panic!("unexpected view {:?}", other),
        }

        let compiled = Compiler::new().compile(SOURCE);
        let mut deployed = ContractRecord::draft("Deployed", SOURCE, Some(&compiled)).unwrap();
        deployed
            .attach_deployment(Deployment {
                transaction_hash: "0xt".to_string(),
                contract_address: "0xc".to_string(),
                deployed_at: Utc::now(),
            })
            .unwrap();
        state.contracts.upsert(ContractRecord::draft("Draft", SOURCE, None).unwrap());
        state.contracts.upsert(deployed);

        match render(&state, &network()).view {
            View::History { notice, entries } => {
                assert!(notice.is_none());
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0].name, "Draft");
                assert_eq!(entries[0].version, "v1.0");
                assert!(entries[0].contract_address.is_none());
                assert_eq!(
                    entries[1].explorer_url.as_deref(),
                    Some("https://calibration.filscan.io/address/0xc")
                );
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_history_without_wallet() {
        let state = SessionState {
            active_page: Page::History,
            ..Default::default()
        };
        match render(&state, &network()).view {
            View::History { notice, .. } => {
                assert_eq!(notice.unwrap().kind, NoticeKind::ConnectWallet)
            }
            other => panic!("unexpected view {:?}", other),
        }
    }
}
