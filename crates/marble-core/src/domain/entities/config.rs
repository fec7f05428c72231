use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Literal token that stands for the user's home directory.
pub const HOME_TOKEN: &str = "$HOME";

/// User configuration, loaded once per run and immutable afterwards.
///
/// Mirrors the on-disk JSON shape:
///
/// ```json
/// { "properties": { "projects_directory": "$HOME/projects" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub properties: ConfigProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigProperties {
    /// Parent directory of every generated project.
    pub projects_directory: String,
}

impl ProjectConfig {
    pub fn new(projects_directory: impl Into<String>) -> Self {
        Self {
            properties: ConfigProperties {
                projects_directory: projects_directory.into(),
            },
        }
    }

    /// Replace a leading `$HOME` in `projects_directory` with `home`.
    pub fn with_home(mut self, home: &Path) -> Self {
        self.properties.projects_directory =
            expand_home(&self.properties.projects_directory, home);
        self
    }

    /// Whether the stored directory still begins with the `$HOME` token.
    pub fn needs_home_expansion(&self) -> bool {
        self.properties.projects_directory.starts_with(HOME_TOKEN)
    }

    pub fn projects_directory(&self) -> &Path {
        Path::new(&self.properties.projects_directory)
    }

    /// Where a project called `name` would be created.
    ///
    /// Always `<projects_directory>/<name>`: an absolute `name` is appended
    /// to the directory, never substituted for it.
    pub fn project_path(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("{}/{name}", self.properties.projects_directory))
    }
}

/// Substitute a leading `$HOME` token. Only the prefix is replaced.
pub fn expand_home(value: &str, home: &Path) -> String {
    match value.strip_prefix(HOME_TOKEN) {
        Some(rest) => format!("{}{rest}", home.display()),
        None => value.to_string(),
    }
}
