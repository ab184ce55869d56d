//! Storage module for contract persistence

pub mod backend;
pub mod memory;
pub mod persistence;
pub mod store;

pub use backend::{StorageBackend, StorageError};
pub use memory::MemoryBackend;
pub use persistence::{JsonFileBackend, StorageConfig};
pub use store::ContractStore;
