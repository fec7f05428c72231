//! Marble App - main application orchestrator.
//!
//! This service coordinates one run:
//! 1. Check platform and required binaries
//! 2. Resolve the framework and project name positionals
//! 3. Parse the flags
//! 4. Dispatch to the framework's generator
//!
//! Nothing here terminates the process; every outcome is returned to the
//! caller, which alone decides the exit code.

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::Filesystem,
        services::{
            dispatcher::GeneratorDispatcher, generator::ScaffoldOutcome, parser::ArgumentParser,
            preflight::Preflight,
        },
    },
    domain::{
        DependencyRegistry, FlagRegistry, FlagSet, FrameworkKind, FrameworkRegistry, Platform,
        ProjectConfig, Properties,
    },
    error::MarbleResult,
};

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Fewer than two positionals were given; only global flags were parsed.
    FlagsOnly(FlagSet),
    /// A generator ran to completion.
    Scaffolded {
        framework: FrameworkKind,
        flags: FlagSet,
        outcome: ScaffoldOutcome,
    },
}

/// Main application service.
///
/// Holds the immutable registries and the dispatcher for the whole run.
pub struct MarbleApp {
    flags: FlagRegistry,
    frameworks: FrameworkRegistry,
    dependencies: DependencyRegistry,
    dispatcher: GeneratorDispatcher,
}

impl MarbleApp {
    /// Create a new app with explicit registries and a filesystem adapter.
    pub fn new(
        flags: FlagRegistry,
        frameworks: FrameworkRegistry,
        dependencies: DependencyRegistry,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            flags,
            frameworks,
            dependencies,
            dispatcher: GeneratorDispatcher::new(filesystem),
        }
    }

    /// The app with Marble's built-in registries.
    pub fn builtin(filesystem: Box<dyn Filesystem>) -> Self {
        Self::new(
            FlagRegistry::builtin(),
            FrameworkRegistry::builtin(),
            DependencyRegistry::builtin(),
            filesystem,
        )
    }

    /// Check that `platform` is supported and every dependency is installed.
    pub fn preflight(&self, platform: &Platform) -> MarbleResult<()> {
        Preflight::new(&self.dependencies, self.dispatcher.filesystem()).check(platform)
    }

    /// Run against the argv tail (program name already stripped).
    #[instrument(skip_all, fields(tokens = tokens.len()))]
    pub fn run<S: AsRef<str>>(
        &self,
        tokens: &[S],
        config: &ProjectConfig,
    ) -> MarbleResult<RunOutcome> {
        let parser = ArgumentParser::new(&self.flags);

        let [framework_arg, name_arg, ..] = tokens else {
            debug!("Fewer than two positionals, parsing global flags only");
            return Ok(RunOutcome::FlagsOnly(parser.parse(tokens, None)));
        };

        let framework = self.frameworks.resolve(framework_arg.as_ref())?;
        let properties = Properties::parse(name_arg.as_ref())?;
        let flags = parser.parse(tokens, Some(framework));
        info!(
            framework = %framework,
            project = %properties.name,
            flags = flags.len(),
            "Arguments resolved"
        );

        let outcome = self
            .dispatcher
            .dispatch(framework, config, &properties, &flags)?;
        Ok(RunOutcome::Scaffolded {
            framework,
            flags,
            outcome,
        })
    }

    pub fn flag_registry(&self) -> &FlagRegistry {
        &self.flags
    }

    pub fn framework_registry(&self) -> &FrameworkRegistry {
        &self.frameworks
    }
}
