//! Contract ABI descriptors
//!
//! The workbench never interprets an ABI; it stores and displays it.
//! Field names follow the Solidity JSON ABI so a real compiler's output
//! deserializes into the same types.

use serde::{Deserialize, Serialize};

/// A single typed parameter of an ABI entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiParam {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl AbiParam {
    pub fn new(name: &str, kind: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
        }
    }
}

/// One descriptor in a contract's callable surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiEntry {
    /// `function`, `constructor`, `event`, ...
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    #[serde(default)]
    pub outputs: Vec<AbiParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<String>,
}

impl AbiEntry {
    /// Constructor entry
    pub fn constructor(inputs: Vec<AbiParam>) -> Self {
        Self {
            kind: "constructor".to_string(),
            name: None,
            inputs,
            outputs: Vec::new(),
            state_mutability: Some("nonpayable".to_string()),
        }
    }

    /// Function entry
    pub fn function(
        name: &str,
        inputs: Vec<AbiParam>,
        outputs: Vec<AbiParam>,
        state_mutability: &str,
    ) -> Self {
        Self {
            kind: "function".to_string(),
            name: Some(name.to_string()),
            inputs,
            outputs,
            state_mutability: Some(state_mutability.to_string()),
        }
    }

    /// Human-readable signature, e.g. `setName(string)`
    pub fn signature(&self) -> String {
        let args: Vec<&str> = self.inputs.iter().map(|p| p.kind.as_str()).collect();
        format!(
            "{}({})",
            self.name.as_deref().unwrap_or(&self.kind),
            args.join(",")
        )
    }
}

/// Ordered ABI of a contract
pub type Abi = Vec<AbiEntry>;
