//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use lapis_core::{application::ports::Filesystem, error::LapisResult};
use tracing::trace;

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
    fn create_dir_all(&self, path: &Path) -> LapisResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> LapisResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> lapis_core::error::LapisError {
    use lapis_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lapis_core::{application::ApplicationError, error::LapisError};

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("src/apis/orders");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();
        assert!(fs.exists(&dir));
    }

    #[test]
    fn write_file_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("config.json");
        let fs = LocalFilesystem::new();

        fs.write_file(&file, "old").unwrap();
        fs.write_file(&file, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "new");
    }

    #[test]
    fn write_into_missing_dir_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("missing/index.ts");
        let err = LocalFilesystem::new().write_file(&file, "x").unwrap_err();

        match err {
            LapisError::Application(ApplicationError::FilesystemError { path, reason }) => {
                assert_eq!(path, file);
                assert!(reason.starts_with("Failed to write file"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn dir_over_existing_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("apis");
        std::fs::write(&blocker, "not a dir").unwrap();

        let result = LocalFilesystem::new().create_dir_all(&blocker.join("orders"));
        assert!(result.is_err());
    }
}
