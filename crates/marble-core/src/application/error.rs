//! Application layer errors.
//!
//! These errors come from running the use cases against the outside world
//! (filesystem, installed binaries, generator wiring). Rule violations that
//! need no I/O to detect are `DomainError`s from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while checking the environment or scaffolding.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A required external binary is not installed where expected.
    #[error("Dependency not met: {name} (expected at {path})")]
    DependencyMissing { name: String, path: PathBuf },

    /// The target project directory is already on disk.
    #[error("Project directory already exists: {path}")]
    ProjectAlreadyExists { path: PathBuf },

    /// The configured parent directory does not exist.
    #[error("Unable to find projects directory: {path}")]
    ProjectsDirectoryMissing { path: PathBuf },

    /// Creating the project directory or one of its files failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The framework is recognized but has no generator yet.
    #[error("Generator for '{framework}' is not implemented yet")]
    NotImplemented { framework: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DependencyMissing { name, path } => vec![
                format!("Install {name} so that {} exists", path.display()),
                "On Debian/Ubuntu: sudo apt install jq yarnpkg".into(),
            ],
            Self::ProjectAlreadyExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                format!("Remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::ProjectsDirectoryMissing { path } => vec![
                format!("Create it first: mkdir -p {}", path.display()),
                "Or point properties.projects_directory at an existing directory".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::NotImplemented { .. } => vec![
                "Only the express generator is available today".into(),
                "Example: marble express my-app".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DependencyMissing { .. } => ErrorCategory::Environment,
            Self::ProjectAlreadyExists { .. } => ErrorCategory::Validation,
            Self::ProjectsDirectoryMissing { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::NotImplemented { .. } => ErrorCategory::NotImplemented,
        }
    }
}
