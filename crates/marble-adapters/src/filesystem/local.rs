//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use marble_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{MarbleError, MarbleResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir(&self, path: &Path) -> MarbleResult<()> {
        // `create_dir` (not `_all`) fails on an existing path, which is what
        // makes the creation exclusive.
        std::fs::create_dir(path).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => ApplicationError::ProjectAlreadyExists {
                path: path.to_path_buf(),
            }
            .into(),
            _ => map_io_error(path, e, "create project directory"),
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> MarbleResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn remove_dir_all(&self, path: &Path) -> MarbleResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> MarbleError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
