//! Contract module
//!
//! Contract-side data of the workbench.
//!
//! # Overview
//!
//! This module implements:
//! - ABI descriptor types
//! - A stand-in compiler that returns canned bytecode
//! - Versioned contract records and per-wallet collections
//!
//! # Example
//!
//! ```rust
//! use replifi::contract::{Compiler, ContractRecord};
//!
//! let source = "pragma solidity ^0.8.0; contract C {}";
//! let result = Compiler::new().compile(source);
//! assert!(result.success);
//!
//! let record = ContractRecord::draft("C", source, Some(&result)).unwrap();
//! assert!(record.has_bytecode());
//! ```

pub mod abi;
pub mod compiler;
pub mod record;

pub use abi::{Abi, AbiEntry, AbiParam};
pub use compiler::{CompilationResult, Compiler};
pub use record::{ContractCollection, ContractRecord, Deployment, RecordError};
