//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use marble_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{MarbleError, MarbleResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can keep one handle while the
/// app owns another.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Create a filesystem where `path` and all its ancestors exist.
    pub fn with_dir(path: impl AsRef<Path>) -> Self {
        let fs = Self::new();
        fs.add_dir_all(path.as_ref());
        fs
    }

    /// Add a directory and all ancestors (testing helper).
    pub fn add_dir_all(&self, path: &Path) {
        if let Ok(mut inner) = self.inner.write() {
            let mut current = PathBuf::new();
            for component in path.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
    }

    /// Add a file, creating its parent directories (testing helper).
    pub fn add_file(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            self.add_dir_all(parent);
        }
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path.to_path_buf(), content.to_string());
        }
    }

    /// Make writes into directory `path` fail (testing helper).
    pub fn set_read_only(&self, path: &Path) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.to_path_buf());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn lock_error(path: &Path) -> MarbleError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: "in-memory filesystem lock poisoned".into(),
        }
        .into()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir(&self, path: &Path) -> MarbleResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error(path))?;

        if inner.directories.contains(path) || inner.files.contains_key(path) {
            return Err(ApplicationError::ProjectAlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
            if inner.read_only.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Permission denied".into(),
                }
                .into());
            }
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> MarbleResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error(path))?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
            if inner.read_only.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Permission denied".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> MarbleResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error(path))?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        inner.read_only.retain(|p| !p.starts_with(path));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_needs_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.create_dir(Path::new("/tmp/proj/app")).is_err());

        fs.add_dir_all(Path::new("/tmp/proj"));
        assert!(fs.create_dir(Path::new("/tmp/proj/app")).is_ok());
        assert!(fs.is_dir(Path::new("/tmp/proj/app")));
    }

    #[test]
    fn create_dir_twice_is_already_exists() {
        let fs = MemoryFilesystem::with_dir("/tmp/proj");
        fs.create_dir(Path::new("/tmp/proj/app")).unwrap();
        assert!(matches!(
            fs.create_dir(Path::new("/tmp/proj/app")),
            Err(MarbleError::Application(
                ApplicationError::ProjectAlreadyExists { .. }
            ))
        ));
    }

    #[test]
    fn clones_share_storage() {
        let fs = MemoryFilesystem::with_dir("/tmp");
        let handle = fs.clone();
        fs.write_file(Path::new("/tmp/a.txt"), "x").unwrap();
        assert_eq!(handle.read_file(Path::new("/tmp/a.txt")).as_deref(), Some("x"));
    }

    #[test]
    fn remove_dir_all_drops_children() {
        let fs = MemoryFilesystem::with_dir("/tmp/proj/app");
        fs.add_file(Path::new("/tmp/proj/app/a.txt"), "x");
        fs.remove_dir_all(Path::new("/tmp/proj/app")).unwrap();
        assert!(!fs.exists(Path::new("/tmp/proj/app")));
        assert!(fs.list_files().is_empty());
        assert!(fs.exists(Path::new("/tmp/proj")));
    }

    #[test]
    fn read_only_directory_rejects_writes() {
        let fs = MemoryFilesystem::with_dir("/tmp/proj/app");
        fs.set_read_only(Path::new("/tmp/proj/app"));
        assert!(fs.write_file(Path::new("/tmp/proj/app/a.txt"), "x").is_err());
    }
}
