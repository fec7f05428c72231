//! Express generator.
//!
//! Runs through these stages, stopping at the first failure:
//!
//! 1. `--ping` short-circuit (no filesystem access)
//! 2. validate the project name and the configured projects directory
//! 3. compute `<projects_directory>/<name>`; refuse if it exists or if the
//!    projects directory is missing
//! 4. create the project directory exclusively
//! 5. write the sentinel file, removing the directory again if that fails

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
        services::generator::{Generator, ScaffoldOutcome},
    },
    domain::{DomainError, FlagSet, FrameworkKind, ProjectConfig, Properties},
    error::{MarbleError, MarbleResult},
};

/// Placeholder file proving the project directory was populated.
pub const SENTINEL_FILE: &str = "hello_world.txt";

/// Content of [`SENTINEL_FILE`].
pub const SENTINEL_CONTENT: &str = "Hello world!\n";

/// Generator for Express projects.
pub struct ExpressGenerator<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ExpressGenerator<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    fn log_options(flags: &FlagSet) {
        debug!(
            use_nodemon = flags.contains("--use-nodemon"),
            use_express_session = flags.contains("--use-express-session"),
            "Express options"
        );
        if let Some(packages) = flags.values("--install-packages") {
            debug!(?packages, "Packages requested (installation not supported)");
        }
    }

    /// Best-effort removal of a half-populated project.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}

impl Generator for ExpressGenerator<'_> {
    fn framework(&self) -> FrameworkKind {
        FrameworkKind::Express
    }

    #[instrument(skip_all, fields(project = %properties.name))]
    fn scaffold(
        &self,
        properties: &Properties,
        flags: &FlagSet,
        config: &ProjectConfig,
    ) -> MarbleResult<ScaffoldOutcome> {
        if flags.contains("--ping") {
            info!("Ping flag set, exiting before project directory creation");
            return Ok(ScaffoldOutcome::Pinged);
        }

        if properties.name.is_empty() {
            return Err(DomainError::InvalidProjectName {
                name: String::new(),
                reason: "project name is empty".into(),
            }
            .into());
        }
        if config.properties.projects_directory.is_empty() {
            return Err(MarbleError::ConfigMalformed {
                reason: "properties.projects_directory is empty".into(),
            });
        }
        Self::log_options(flags);

        let projects_dir = config.projects_directory();
        let project_path = config.project_path(&properties.name);
        debug!(path = %project_path.display(), "Project path computed");

        if self.filesystem.exists(&project_path) {
            return Err(ApplicationError::ProjectAlreadyExists { path: project_path }.into());
        }
        if !self.filesystem.is_dir(projects_dir) {
            return Err(ApplicationError::ProjectsDirectoryMissing {
                path: projects_dir.to_path_buf(),
            }
            .into());
        }

        // Exclusive: a directory created by someone else since the check
        // above surfaces as ProjectAlreadyExists rather than being reused.
        self.filesystem.create_dir(&project_path)?;

        let sentinel = project_path.join(SENTINEL_FILE);
        if let Err(e) = self.filesystem.write_file(&sentinel, SENTINEL_CONTENT) {
            warn!("Populating project failed, attempting rollback");
            self.rollback(&project_path);
            return Err(e);
        }

        info!(path = %project_path.display(), "Express project created");
        Ok(ScaffoldOutcome::Created {
            path: project_path,
            files: vec![sentinel],
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
