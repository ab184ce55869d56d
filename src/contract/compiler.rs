//! Stand-in Solidity compiler
//!
//! Accepts any source that mentions both a `pragma solidity` directive and a
//! `contract` declaration and answers with canned bytecode and ABI. Nothing
//! is parsed.

use crate::contract::abi::{Abi, AbiEntry, AbiParam};
use serde::{Deserialize, Serialize};

/// Directive every accepted source must contain
pub const PRAGMA_TOKEN: &str = "pragma solidity";

/// Declaration keyword every accepted source must contain
pub const CONTRACT_TOKEN: &str = "contract";

/// Error reported for sources missing either token
pub const MISSING_TOKENS_ERROR: &str =
    "Invalid Solidity source: expected a 'pragma solidity' directive and a 'contract' declaration";

/// Warning reported when the SPDX header is absent
pub const SPDX_WARNING: &str =
    "SPDX license identifier not provided in source file. Consider adding \"// SPDX-License-Identifier: <SPDX-License>\"";

/// Bytecode returned for every accepted source
pub const CANNED_BYTECODE: &str = "0x608060405234801561001057600080fd5b506040516104e33803806104e38339810160408190526100309161007d565b600061003c82826101c9565b5050610288565b634e487b7160e01b600052604160045260246000fd5b600082601f83011261006a57600080fd5b81516001600160401b038111156100835761008361004356";

/// Outcome of a compile request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilationResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytecode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi: Option<Abi>,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl CompilationResult {
    /// A failed compilation with a single error
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            bytecode: None,
            abi: None,
            errors: vec![error.into()],
            warnings: Vec::new(),
        }
    }

    /// A successful compilation with no diagnostics
    pub fn compiled(bytecode: String, abi: Abi) -> Self {
        Self {
            success: true,
            bytecode: Some(bytecode),
            abi: Some(abi),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Bytecode of a successful compilation, if non-empty
    pub fn deployable_bytecode(&self) -> Option<&str> {
        match (&self.success, &self.bytecode) {
            (true, Some(code)) if !code.is_empty() => Some(code.as_str()),
            _ => None,
        }
    }
}

/// The stand-in compiler
#[derive(Debug, Clone, Default)]
pub struct Compiler;

impl Compiler {
    /// Create a new compiler
    pub fn new() -> Self {
        Self
    }

    /// "Compile" source text
    pub fn compile(&self, source: &str) -> CompilationResult {
        if !source.contains(PRAGMA_TOKEN) || !source.contains(CONTRACT_TOKEN) {
            log::debug!("Rejected source of {} bytes", source.len());
            return CompilationResult::failure(MISSING_TOKENS_ERROR);
        }

        let mut result = CompilationResult::compiled(CANNED_BYTECODE.to_string(), canned_abi());
        if !source.contains("SPDX-License-Identifier") {
            result.warnings.push(SPDX_WARNING.to_string());
        }
        result
    }
}

/// ABI matching the editor's starter template
pub fn canned_abi() -> Abi {
    vec![
        AbiEntry::constructor(vec![AbiParam::new("_name", "string")]),
        AbiEntry::function("name", vec![], vec![AbiParam::new("", "string")], "view"),
        AbiEntry::function(
            "setName",
            vec![AbiParam::new("_name", "string")],
            vec![],
            "nonpayable",
        ),
    ]
}
