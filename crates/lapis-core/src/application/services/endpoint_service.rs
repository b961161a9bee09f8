//! Endpoint Service - main application orchestrator.
//!
//! This service coordinates the output half of the workflow:
//! 1. Render the endpoint with the template engine
//! 2. Ensure `<base>/<name>` exists
//! 3. Write `config.json`, then `index.ts`
//!
//! Existing files are overwritten. There is no rollback: if the stub write
//! fails, the descriptor stays on disk.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{DomainValidator as validator, EndpointMetadata, GeneratedEndpoint, engine},
    error::{LapisError, LapisResult},
};

/// Fixed, process-relative location of endpoint modules.
pub const APIS_DIR: &str = "src/apis";

/// What a scaffold run wrote, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub name: String,
    pub endpoint_dir: PathBuf,
    pub files: Vec<PathBuf>,
    /// The endpoint directory was already present before this run.
    pub dir_existed: bool,
}

/// Main endpoint scaffolding service.
pub struct EndpointService {
    filesystem: Box<dyn Filesystem>,
}

impl EndpointService {
    /// Create a new endpoint service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Render an endpoint without touching the filesystem.
    pub fn generate(&self, metadata: &EndpointMetadata) -> LapisResult<GeneratedEndpoint> {
        let generated = engine::generate(metadata)?;
        validator::validate_generated(&generated).map_err(LapisError::Domain)?;
        Ok(generated)
    }

    /// Render an endpoint and write it under `base_dir`.
    #[instrument(
        skip_all,
        fields(
            endpoint = %metadata.name,
            base_dir = %base_dir.as_ref().display()
        )
    )]
    pub fn scaffold(
        &self,
        metadata: &EndpointMetadata,
        base_dir: impl AsRef<Path>,
    ) -> LapisResult<ScaffoldReport> {
        info!(method = %metadata.method, "Scaffolding endpoint");

        let generated = self.generate(metadata)?;
        let endpoint_dir = generated.dir_in(base_dir.as_ref());

        let dir_existed = self.filesystem.exists(&endpoint_dir);
        self.filesystem.create_dir_all(&endpoint_dir)?;

        let files = self.write_files(&generated, &endpoint_dir)?;

        info!(files = files.len(), "Endpoint written");
        Ok(ScaffoldReport {
            name: metadata.name.clone(),
            endpoint_dir,
            files,
            dir_existed,
        })
    }

    fn write_files(&self, generated: &GeneratedEndpoint, dir: &Path) -> LapisResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(generated.file_count());
        for file in generated.files() {
            let path = dir.join(&file.file_name);
            self.filesystem.write_file(&path, &file.content)?;
            debug!(path = %path.display(), bytes = file.size(), "Wrote file");
            written.push(path);
        }
        Ok(written)
    }
}
