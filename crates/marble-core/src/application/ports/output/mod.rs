//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `marble-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::ProjectConfig;
use crate::error::MarbleResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `marble_adapters::filesystem::LocalFilesystem` (production)
/// - `marble_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a single directory.
    ///
    /// Must fail with `ApplicationError::ProjectAlreadyExists` if `path` is
    /// already present, so callers can rely on exclusive creation instead of
    /// a separate existence check.
    fn create_dir(&self, path: &Path) -> MarbleResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> MarbleResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> MarbleResult<()>;
}

/// Port for reading the user's configuration.
///
/// Implemented by:
/// - `marble_adapters::config::JsonConfigLoader`
pub trait ConfigSource {
    /// Load the config, with `$HOME` already expanded.
    fn load(&self) -> MarbleResult<ProjectConfig>;
}
