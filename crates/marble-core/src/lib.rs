//! Marble Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Marble
//! project scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           marble-cli (CLI)              │
//! │   (clap front-end, logging, exit code)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (MarbleApp, ArgumentParser, Dispatch)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       (Filesystem, ConfigSource)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    marble-adapters (Infrastructure)     │
//! │ (LocalFilesystem, JsonConfigLoader, ..) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use marble_core::prelude::*;
//!
//! # fn demo(filesystem: Box<dyn Filesystem>) -> MarbleResult<()> {
//! let app = MarbleApp::builtin(filesystem);
//! app.preflight(&Platform::current())?;
//!
//! let config = ProjectConfig::new("/tmp/proj");
//! app.run(&["express", "my-app", "--use-nodemon"], &config)?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ArgumentParser, ConfigSource, Filesystem, Generator, GeneratorDispatcher, MarbleApp,
        RunOutcome, ScaffoldOutcome,
    };
    pub use crate::domain::{
        Arity, FlagRegistry, FlagSet, FlagSpec, FrameworkKind, FrameworkRegistry, Platform,
        ProjectConfig, Properties,
    };
    pub use crate::error::{MarbleError, MarbleResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
