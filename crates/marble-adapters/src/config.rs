//! JSON config file adapter.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use marble_core::{
    application::ports::ConfigSource,
    domain::ProjectConfig,
    error::{MarbleError, MarbleResult},
};

/// File name of the per-user config, under `$HOME/.config`.
pub const CONFIG_FILE_NAME: &str = "marble.config.json";

/// Reads `{ "properties": { "projects_directory": ... } }` from disk.
#[derive(Debug, Clone)]
pub struct JsonConfigLoader {
    path: PathBuf,
    home: PathBuf,
}

impl JsonConfigLoader {
    /// Loader for `path`; a leading `$HOME` in the config expands to `home`.
    pub fn new(path: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            home: home.into(),
        }
    }

    /// Loader for the default location, `<home>/.config/marble.config.json`.
    pub fn for_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self::new(Self::default_path(&home), home)
    }

    pub fn default_path(home: &Path) -> PathBuf {
        home.join(".config").join(CONFIG_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn malformed(&self, detail: impl std::fmt::Display) -> MarbleError {
        MarbleError::ConfigMalformed {
            reason: format!("{}: {detail}", self.path.display()),
        }
    }
}

impl ConfigSource for JsonConfigLoader {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> MarbleResult<ProjectConfig> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => MarbleError::ConfigNotFound {
                path: self.path.clone(),
            },
            _ => self.malformed(e),
        })?;

        let config: ProjectConfig = serde_json::from_str(&raw).map_err(|e| self.malformed(e))?;
        debug!(
            projects_directory = %config.properties.projects_directory,
            "Config parsed"
        );

        if !config.needs_home_expansion() {
            return Ok(config);
        }

        let config = config.with_home(&self.home);
        debug!(
            projects_directory = %config.properties.projects_directory,
            "Expanded $HOME"
        );
        Ok(config)
    }
}
