//! Persistence adapters. Implement KeyValueStorePort.

pub mod memory;
pub mod state_json;

pub use memory::MemoryStore;
pub use state_json::JsonFileStore;
