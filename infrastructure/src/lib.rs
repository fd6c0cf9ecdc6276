//! Infrastructure layer for forum-board
//!
//! This crate contains adapters that implement the ports defined in the
//! domain and application layers: the in-memory forum store, configuration
//! file loading and the JSONL activity log.

pub mod config;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileReplConfig, FileSimulationConfig,
};
pub use logging::JsonlActivityLogger;
pub use store::{InMemoryForumStore, StoreError, StoreStats};
