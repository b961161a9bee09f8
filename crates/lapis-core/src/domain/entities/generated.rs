use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// File name of the descriptor document inside an endpoint directory.
pub const DESCRIPTOR_FILE: &str = "config.json";
/// File name of the source stub inside an endpoint directory.
pub const SOURCE_STUB_FILE: &str = "index.ts";

/// Rendered endpoint ready for materialization.
///
/// This is the output of the template engine. It contains no business
/// logic, only data: the endpoint directory name and the files to place in
/// it, in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEndpoint {
    pub(crate) dir_name: String,
    pub(crate) files: Vec<FileToWrite>,
}

impl GeneratedEndpoint {
    pub fn new(dir_name: impl Into<String>) -> Self {
        Self {
            dir_name: dir_name.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, file_name: impl Into<String>, content: String) {
        self.files.push(FileToWrite {
            file_name: file_name.into(),
            content,
        });
    }

    pub fn with_file(mut self, file_name: impl Into<String>, content: String) -> Self {
        self.add_file(file_name, content);
        self
    }

    /// Directory name relative to the APIs base directory.
    pub fn dir_name(&self) -> &str {
        &self.dir_name
    }

    /// `<base>/<dir_name>`
    pub fn dir_in(&self, base: &Path) -> PathBuf {
        base.join(&self.dir_name)
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.files.iter()
    }

    /// Contents of a file by name.
    pub fn file(&self, file_name: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.file_name == file_name)
            .map(|f| f.content.as_str())
    }

    /// Descriptor JSON text, if present.
    pub fn descriptor(&self) -> Option<&str> {
        self.file(DESCRIPTOR_FILE)
    }

    /// Source stub text, if present.
    pub fn source_stub(&self) -> Option<&str> {
        self.file(SOURCE_STUB_FILE)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Structural checks before writing: at least one file, no duplicate
    /// names, and every name a bare file name.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::Serialization(
                "generated endpoint has no files".into(),
            ));
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if !seen.insert(file.file_name.as_str()) {
                return Err(DomainError::Serialization(format!(
                    "duplicate file in generated endpoint: {}",
                    file.file_name
                )));
            }
            if Path::new(&file.file_name).components().count() != 1 {
                return Err(DomainError::Serialization(format!(
                    "file name must not contain a path: {}",
                    file.file_name
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    pub file_name: String,
    pub content: String,
}

impl FileToWrite {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
