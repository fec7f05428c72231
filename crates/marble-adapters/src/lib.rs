//! Infrastructure adapters for Marble.
//!
//! This crate implements the ports defined in `marble-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod config;
pub mod filesystem;

// Re-export commonly used adapters
pub use config::{CONFIG_FILE_NAME, JsonConfigLoader};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
