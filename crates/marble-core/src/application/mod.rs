//! Application layer for Marble.
//!
//! This layer contains:
//! - **Services**: argument parsing, preflight, generator dispatch, and the
//!   `MarbleApp` orchestrator
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Which flags and
//! frameworks exist is decided in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ArgumentParser, ExpressGenerator, Generator, GeneratorDispatcher, MarbleApp, Preflight,
    RunOutcome, SENTINEL_CONTENT, SENTINEL_FILE, ScaffoldOutcome, UnimplementedGenerator,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ConfigSource, Filesystem};

pub use error::ApplicationError;
