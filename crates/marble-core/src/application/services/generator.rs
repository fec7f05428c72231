//! The generator capability and its placeholder implementation.

use std::path::PathBuf;

use tracing::warn;

use crate::{
    application::ApplicationError,
    domain::{FlagSet, FrameworkKind, ProjectConfig, Properties},
    error::MarbleResult,
};

/// What a successful scaffold run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// `--ping` was given; nothing touched the filesystem.
    Pinged,
    /// The project directory was created and populated.
    Created {
        path: PathBuf,
        /// Files written inside `path`, as full paths.
        files: Vec<PathBuf>,
    },
}

/// Scaffolds a project for one framework.
pub trait Generator {
    /// The framework this generator serves.
    fn framework(&self) -> FrameworkKind;

    /// Materialize the project described by `properties`.
    fn scaffold(
        &self,
        properties: &Properties,
        flags: &FlagSet,
        config: &ProjectConfig,
    ) -> MarbleResult<ScaffoldOutcome>;
}

/// Stands in for frameworks that are registered but have no generator.
///
/// Always fails with `NotImplemented`, so selecting one of these frameworks
/// can never look like a successful run.
#[derive(Debug, Clone, Copy)]
pub struct UnimplementedGenerator {
    framework: FrameworkKind,
}

impl UnimplementedGenerator {
    pub fn new(framework: FrameworkKind) -> Self {
        Self { framework }
    }
}

impl Generator for UnimplementedGenerator {
    fn framework(&self) -> FrameworkKind {
        self.framework
    }

    fn scaffold(
        &self,
        _properties: &Properties,
        _flags: &FlagSet,
        _config: &ProjectConfig,
    ) -> MarbleResult<ScaffoldOutcome> {
        warn!(framework = %self.framework, "No generator wired for framework");
        Err(ApplicationError::NotImplemented {
            framework: self.framework.to_string(),
        }
        .into())
    }
}
