//! Core domain layer for Marble.
//!
//! Pure data and rules: which frameworks and flags exist, what a valid
//! project name is, what the user config looks like. No I/O happens here;
//! filesystem access goes through ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: no filesystem, process or environment access
//! - **No ambient state**: registries are values, built once and passed in
//! - **Immutable entities**: everything is `Clone + PartialEq`

pub mod capabilities;
pub mod dependencies;
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use capabilities::{
    Arity, EXPRESS_FLAGS, FlagRegistry, FlagSpec, FrameworkRegistry, GLOBAL_FLAGS,
};
pub use dependencies::{DependencyRegistry, DependencySpec};
pub use entities::{
    config::{ConfigProperties, HOME_TOKEN, ProjectConfig, expand_home},
    flag_set::FlagSet,
    properties::{Properties, validate_project_name},
};
pub use error::{DomainError, ErrorCategory};
pub use value_objects::{FrameworkKind, Platform};
