//! Unified error handling for Marble Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors together with config loading failures, each carrying a category and
//! user-actionable suggestions.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Marble Core operations.
///
/// Every failure a run can hit maps to exactly one variant here (possibly
/// nested); none of them are retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarbleError {
    /// Errors from the domain layer (invalid input).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (environment and filesystem).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// The config file does not exist.
    #[error("Config file not found at: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// The config file exists but cannot be used.
    #[error("Project configuration unreadable: {reason}")]
    ConfigMalformed { reason: String },
}

impl MarbleError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::ConfigNotFound { path } => vec![
                format!("Create {} with:", path.display()),
                r#"  { "properties": { "projects_directory": "$HOME/projects" } }"#.into(),
            ],
            Self::ConfigMalformed { .. } => vec![
                "The config must be a JSON object of the form:".into(),
                r#"  { "properties": { "projects_directory": "<path>" } }"#.into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Environment => ErrorCategory::Environment,
            },
            Self::Application(e) => e.category(),
            Self::ConfigNotFound { .. } | Self::ConfigMalformed { .. } => {
                ErrorCategory::Configuration
            }
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Environment,
    NotImplemented,
    Internal,
}

/// Convenient result type alias.
pub type MarbleResult<T> = Result<T, MarbleError>;
