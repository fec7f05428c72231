//! CLI error type and its rendering.
//!
//! Every failure funnels through [`CliError`] to the single exit point in
//! `main`, where it is logged, printed with suggestions and turned into the
//! process exit code.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use marble_core::error::{ErrorCategory as CoreCategory, MarbleError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `marble-core` or an adapter.
    #[error(transparent)]
    Core(#[from] MarbleError),

    /// The config file location could not be worked out.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Writing to the terminal failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialise logging: {message}")]
    Logging { message: String },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => core.suggestions(),
            Self::ConfigError { .. } => vec![
                "Set HOME, or pass the config file explicitly:".into(),
                "  marble --config <FILE> <framework> <project name>".into(),
            ],
            Self::IoError { .. } => vec!["Check that stdout and stderr are writable".into()],
            Self::Logging { .. } => vec!["Check the RUST_LOG filter syntax".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::NotImplemented => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Environment => ErrorCategory::Environment,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } | Self::Logging { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS. Every failure exits with 1.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(),
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`].
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("\nError: {self}\n");

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Environment => tracing::error!("Environment not ready: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments: unknown framework, invalid name, existing project.
    UserError,
    NotFound,
    Configuration,
    /// Unsupported platform or a missing system dependency.
    Environment,
    Internal,
}
