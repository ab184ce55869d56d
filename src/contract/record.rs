//! Versioned contract records
//!
//! A record is the unit the history view lists: the source a user saved,
//! what the compiler produced for it, and where it was deployed, if anywhere.

use crate::contract::abi::Abi;
use crate::contract::compiler::CompilationResult;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Record errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("Contract {0} has a deployment but no compiled bytecode")]
    DeploymentWithoutBytecode(String),
    #[error("Contract name must not be empty")]
    EmptyName,
}

/// Where and when a record was deployed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub transaction_hash: String,
    pub contract_address: String,
    pub deployed_at: DateTime<Utc>,
}

/// A saved contract, keyed by name within a wallet's collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    pub name: String,
    pub source_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiled_bytecode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi: Option<Abi>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<Deployment>,
    /// Save counter, starting at 1
    #[serde(default = "first_revision")]
    pub revision: u32,
    /// SHA-256 of `source_text`, hex encoded
    #[serde(default)]
    pub source_hash: String,
}

fn first_revision() -> u32 {
    1
}

/// Hex SHA-256 digest of a contract source
pub fn source_digest(source: &str) -> String {
    hex::encode(Sha256::digest(source.as_bytes()))
}

impl ContractRecord {
    /// Build a record from editor source and an optional compile output.
    ///
    /// Only a successful compilation contributes bytecode and ABI.
    pub fn draft(
        name: &str,
        source: &str,
        compilation: Option<&CompilationResult>,
    ) -> Result<Self, RecordError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RecordError::EmptyName);
        }

        let (compiled_bytecode, abi) = match compilation {
            Some(result) if result.deployable_bytecode().is_some() => {
                (result.bytecode.clone(), result.abi.clone())
            }
            _ => (None, None),
        };

        Ok(Self {
            name: name.to_string(),
            source_text: source.to_string(),
            compiled_bytecode,
            abi,
            created_at: Utc::now(),
            deployment: None,
            revision: first_revision(),
            source_hash: source_digest(source),
        })
    }

    /// Turn this fresh draft into the next revision of `previous`.
    ///
    /// Keeps the original creation time. The new revision is undeployed.
    pub fn supersede(mut self, previous: &ContractRecord) -> Self {
        self.created_at = previous.created_at;
        self.revision = previous.revision.saturating_add(1);
        self
    }

    /// Attach a deployment; the record must carry bytecode
    pub fn attach_deployment(&mut self, deployment: Deployment) -> Result<(), RecordError> {
        if !self.has_bytecode() {
            return Err(RecordError::DeploymentWithoutBytecode(self.name.clone()));
        }
        self.deployment = Some(deployment);
        Ok(())
    }

    /// Check the record's invariants
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.name.is_empty() {
            return Err(RecordError::EmptyName);
        }
        if self.deployment.is_some() && !self.has_bytecode() {
            return Err(RecordError::DeploymentWithoutBytecode(self.name.clone()));
        }
        Ok(())
    }

    pub fn has_bytecode(&self) -> bool {
        self.compiled_bytecode
            .as_deref()
            .map(|code| !code.is_empty())
            .unwrap_or(false)
    }

    pub fn is_deployed(&self) -> bool {
        self.deployment.is_some()
    }

    /// Display version, e.g. `v2.0`
    pub fn version_label(&self) -> String {
        format!("v{}.0", self.revision)
    }
}

/// A wallet's contracts, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractCollection {
    records: IndexMap<String, ContractRecord>,
}

impl ContractCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by name. Replacing keeps the original position.
    pub fn upsert(&mut self, record: ContractRecord) -> Option<ContractRecord> {
        self.records.insert(record.name.clone(), record)
    }

    pub fn get(&self, name: &str) -> Option<&ContractRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn names(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContractRecord> {
        self.records.values()
    }

    pub fn deployed_count(&self) -> usize {
        self.iter().filter(|r| r.is_deployed()).count()
    }
}

impl FromIterator<ContractRecord> for ContractCollection {
    fn from_iter<I: IntoIterator<Item = ContractRecord>>(iter: I) -> Self {
        let mut collection = Self::new();
        for record in iter {
            collection.upsert(record);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::compiler::Compiler;

    const SOURCE: &str = "pragma solidity ^0.8.0; contract C {}";

    fn deployment() -> Deployment {
        Deployment {
            transaction_hash: "0xabc".to_string(),
            contract_address: "0xdef".to_string(),
            deployed_at: Utc::now(),
        }
    }

    #[test]
    fn test_draft_takes_successful_output_only() {
        let ok = Compiler::new().compile(SOURCE);
        let record = ContractRecord::draft("C", SOURCE, Some(&ok)).unwrap();
        assert!(record.has_bytecode());
        assert!(record.abi.is_some());
        assert_eq!(record.revision, 1);
        assert_eq!(record.source_hash, source_digest(SOURCE));

        let failed = Compiler::new().compile("contract C {}");
        let record = ContractRecord::draft("C", "contract C {}", Some(&failed)).unwrap();
        assert!(!record.has_bytecode());
        assert!(record.abi.is_none());
    }

    #[test]
    fn test_draft_rejects_blank_name() {
        assert_eq!(
            ContractRecord::draft("  ", SOURCE, None),
            Err(RecordError::EmptyName)
        );
    }

    #[test]
    fn test_deployment_requires_bytecode() {
        let mut record = ContractRecord::draft("C", SOURCE, None).unwrap();
        assert!(matches!(
            record.attach_deployment(deployment()),
            Err(RecordError::DeploymentWithoutBytecode(_))
        ));
        assert!(!record.is_deployed());

        let ok = Compiler::new().compile(SOURCE);
        let mut record = ContractRecord::draft("C", SOURCE, Some(&ok)).unwrap();
        record.attach_deployment(deployment()).unwrap();
        assert!(record.is_deployed());
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_supersede_bumps_revision() {
        let ok = Compiler::new().compile(SOURCE);
        let mut first = ContractRecord::draft("C", SOURCE, Some(&ok)).unwrap();
        first.attach_deployment(deployment()).unwrap();

        let second = ContractRecord::draft("C", "changed", None)
            .unwrap()
            .supersede(&first);
        assert_eq!(second.revision, 2);
        assert_eq!(second.created_at, first.created_at);
        assert!(!second.is_deployed());
        assert_eq!(second.version_label(), "v2.0");
    }

    #[test]
    fn test_collection_keeps_insertion_order() {
        let mut collection = ContractCollection::new();
        for name in ["b", "a", "c"] {
            collection.upsert(ContractRecord::draft(name, SOURCE, None).unwrap());
        }
        collection.upsert(ContractRecord::draft("a", "updated", None).unwrap());

        assert_eq!(collection.names(), vec!["b", "a", "c"]);
        assert_eq!(collection.get("a").unwrap().source_text, "updated");
    }

    #[test]
    fn test_collection_json_is_keyed_by_name() {
        let collection: ContractCollection =
            vec![ContractRecord::draft("HelloWorld", SOURCE, None).unwrap()]
                .into_iter()
                .collect();

        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(json["HelloWorld"]["sourceText"], SOURCE);

        let back: ContractCollection = serde_json::from_value(json).unwrap();
        assert_eq!(back, collection);
    }
}
