//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `marble-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory/file creation and existence checks
//!   - `ConfigSource`: user configuration
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (the CLI calls `MarbleApp` directly)

pub mod output;

pub use output::{ConfigSource, Filesystem};

#[cfg(test)]
pub use output::MockFilesystem;
