//! Local mirror fetcher.
//!
//! Serves files from a directory that mirrors the upstream file store.
//! A file is looked up as `<mirror>/<project id>/<file id>/<name>` first,
//! then as `<mirror>/<name>`. Names that would step outside the mirror
//! are refused.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::debug;

use modshelf_core::{CatalogError, FileFetcher, Project};

use crate::cache::checked_file_name;

/// [`FileFetcher`] backed by a local directory.
#[derive(Debug, Clone)]
pub struct MirrorFetcher {
    root: PathBuf,
}

impl MirrorFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn locate(
        &self,
        project_id: i64,
        file_id: i64,
        file_name: &str,
    ) -> Result<Option<PathBuf>, CatalogError> {
        let name = checked_file_name(file_id, file_name)?;
        let nested = self
            .root
            .join(project_id.to_string())
            .join(file_id.to_string())
            .join(name);
        let flat = self.root.join(name);
        Ok([nested, flat].into_iter().find(|path| path.is_file()))
    }
}

impl FileFetcher for MirrorFetcher {
    fn fetch(
        &self,
        project: &Project,
        file_id: i64,
        file_name: &str,
        dest: &mut dyn Write,
    ) -> Result<u64, CatalogError> {
        let source = self
            .locate(project.id, file_id, file_name)?
            .ok_or_else(|| CatalogError::FetchFailed {
                project_id: project.id,
                file_id,
                reason: format!("{file_name} is not in mirror {}", self.root.display()),
            })?;
        debug!(source = %source.display(), "Copying file from mirror");
        let mut reader = File::open(&source)?;
        Ok(io::copy(&mut reader, dest)?)
    }
}
