//! Generator Dispatcher - maps a framework to its generator.

use tracing::{info, instrument};

use crate::{
    application::{
        ports::Filesystem,
        services::{
            express::ExpressGenerator,
            generator::{Generator, ScaffoldOutcome, UnimplementedGenerator},
        },
    },
    domain::{FlagSet, FrameworkKind, ProjectConfig, Properties},
    error::MarbleResult,
};

/// Owns the filesystem adapter and hands it to the selected generator.
pub struct GeneratorDispatcher {
    filesystem: Box<dyn Filesystem>,
}

impl GeneratorDispatcher {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// The generator for `framework`.
    ///
    /// Every `FrameworkKind` has an arm; kinds without a real generator get
    /// one that fails with `NotImplemented`.
    pub fn generator_for(&self, framework: FrameworkKind) -> Box<dyn Generator + '_> {
        match framework {
            FrameworkKind::Express => Box::new(ExpressGenerator::new(self.filesystem.as_ref())),
            FrameworkKind::React | FrameworkKind::Vue => {
                Box::new(UnimplementedGenerator::new(framework))
            }
        }
    }

    /// Run the generator for `framework`.
    #[instrument(skip_all, fields(framework = %framework, project = %properties.name))]
    pub fn dispatch(
        &self,
        framework: FrameworkKind,
        config: &ProjectConfig,
        properties: &Properties,
        flags: &FlagSet,
    ) -> MarbleResult<ScaffoldOutcome> {
        info!("Dispatching to generator");
        self.generator_for(framework)
            .scaffold(properties, flags, config)
    }

    /// The filesystem adapter generators write through.
    pub fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::{ApplicationError, ports::MockFilesystem},
        error::MarbleError,
    };

    #[test]
    fn each_kind_gets_its_own_generator() {
        let dispatcher = GeneratorDispatcher::new(Box::new(MockFilesystem::new()));
        for kind in FrameworkKind::ALL {
            assert_eq!(dispatcher.generator_for(kind).framework(), kind);
        }
    }

    #[test]
    fn vue_is_not_implemented_and_never_touches_disk() {
        let dispatcher = GeneratorDispatcher::new(Box::new(MockFilesystem::new()));
        let err = dispatcher
            .dispatch(
                FrameworkKind::Vue,
                &ProjectConfig::new("/tmp/proj"),
                &Properties::new("myapp"),
                &FlagSet::new(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            MarbleError::Application(ApplicationError::NotImplemented { ref framework })
                if framework == "vue"
        ));
    }

    #[test]
    fn express_runs_express_generator() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        let dispatcher = GeneratorDispatcher::new(Box::new(fs));
        let err = dispatcher
            .dispatch(
                FrameworkKind::Express,
                &ProjectConfig::new("/tmp/proj"),
                &Properties::new("myapp"),
                &FlagSet::new(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            MarbleError::Application(ApplicationError::ProjectAlreadyExists { .. })
        ));
    }
}
