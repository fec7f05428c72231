//! Locating and loading the per-user config file.
//!
//! # Resolution order (highest priority first)
//!
//! 1. `--config <FILE>` or `MARBLE_CONFIG`
//! 2. `$HOME/.config/marble.config.json`
//!
//! `$HOME` inside the file always expands to the user's home directory, even
//! when the file itself was given explicitly.

use std::path::Path;

use tracing::debug;

use marble_adapters::JsonConfigLoader;
use marble_core::{application::ConfigSource, domain::ProjectConfig};

use crate::error::{CliError, CliResult};

/// Where the config file lives and what `$HOME` expands to.
#[derive(Debug, Clone)]
pub struct ConfigLocation {
    loader: JsonConfigLoader,
}

impl ConfigLocation {
    /// Resolve against the real home directory.
    pub fn resolve(override_path: Option<&Path>) -> CliResult<Self> {
        let home = dirs::home_dir().ok_or_else(|| CliError::ConfigError {
            message: "could not determine the home directory".into(),
        })?;
        Ok(Self::resolve_in(&home, override_path))
    }

    /// Resolve against an explicit home directory.
    pub fn resolve_in(home: &Path, override_path: Option<&Path>) -> Self {
        let loader = match override_path {
            Some(path) => JsonConfigLoader::new(path, home),
            None => JsonConfigLoader::for_home(home),
        };
        Self { loader }
    }

    pub fn path(&self) -> &Path {
        self.loader.path()
    }

    pub fn load(&self) -> CliResult<ProjectConfig> {
        debug!(path = %self.path().display(), "Loading config");
        Ok(self.loader.load()?)
    }
}
