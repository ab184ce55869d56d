//! Network descriptor shown on the deploy page

use serde::{Deserialize, Serialize};

/// Static description of the target network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDescriptor {
    pub name: String,
    pub rpc_url: String,
    pub chain_id: String,
    pub currency: String,
    pub explorer_url: String,
}

impl NetworkDescriptor {
    /// Filecoin Calibration testnet
    pub fn calibration() -> Self {
        Self {
            name: "Filecoin Calibration Testnet".to_string(),
            rpc_url: "https://api.calibration.node.glif.io/rpc/v1".to_string(),
            chain_id: "314159".to_string(),
            currency: "tFIL".to_string(),
            explorer_url: "https://calibration.filscan.io".to_string(),
        }
    }

    /// Explorer link for a transaction
    pub fn tx_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url.trim_end_matches('/'), tx_hash)
    }

    /// Explorer link for an address
    pub fn address_url(&self, address: &str) -> String {
        format!(
            "{}/address/{}",
            self.explorer_url.trim_end_matches('/'),
            address
        )
    }
}

impl Default for NetworkDescriptor {
    fn default() -> Self {
        Self::calibration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explorer_links() {
        let network = NetworkDescriptor::calibration();
        assert_eq!(
            network.tx_url("0xabc"),
            "https://calibration.filscan.io/tx/0xabc"
        );

        let mut trailing = network.clone();
        trailing.explorer_url.push('/');
        assert_eq!(
            trailing.address_url("0xdef"),
            "https://calibration.filscan.io/address/0xdef"
        );
    }
}
