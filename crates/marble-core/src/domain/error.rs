// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Framework not supported: {name} (supported: {})", .supported.join(", "))]
    UnsupportedFramework {
        name: String,
        /// Populated from the framework registry the caller validated against.
        supported: Vec<&'static str>,
    },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    // ========================================================================
    // Environment Errors
    // ========================================================================
    #[error("Unsupported platform '{platform}': only linux is supported")]
    UnsupportedPlatform { platform: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsupportedFramework { supported, .. } => {
                let mut suggestions = vec!["Supported frameworks:".to_string()];
                for framework in supported {
                    suggestions.push(format!("  - {framework}"));
                }
                suggestions.push("Usage: marble [framework] [project name] [...flags]".into());
                suggestions
            }
            Self::InvalidProjectName { reason, .. } => vec![
                format!("Project name rejected: {reason}"),
                "Pass the project name as the second argument, before any flags".into(),
                "Example: marble express my-app --use-nodemon".into(),
            ],
            Self::UnsupportedPlatform { .. } => {
                vec!["Support for macOS and Windows is coming soon".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedFramework { .. } | Self::InvalidProjectName { .. } => {
                ErrorCategory::Validation
            }
            Self::UnsupportedPlatform { .. } => ErrorCategory::Environment,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Environment,
}
