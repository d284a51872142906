//! On-disk file cache.
//!
//! Files live at `<cache>/<project id>/<file id>/<file name>`. A cached
//! file is reused as-is; a missing one is fetched into a temporary file in
//! the same directory and renamed into place, so a failed fetch never
//! leaves a partial file behind.
//!
//! File names come from the database, so each one must be a single plain
//! path segment before it is joined onto the cache root.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use modshelf_core::{CatalogError, FileFetcher, Project};

/// Fetch-or-reuse cache for catalog files.
#[derive(Debug)]
pub struct FileCache {
    root: PathBuf,
    fetcher: Box<dyn FileFetcher>,
}

impl FileCache {
    pub fn new(root: impl Into<PathBuf>, fetcher: Box<dyn FileFetcher>) -> Self {
        Self {
            root: root.into(),
            fetcher,
        }
    }

    /// Where `file_name` of `project_id`/`file_id` is (or would be) cached.
    pub fn path_for(
        &self,
        project_id: i64,
        file_id: i64,
        file_name: &str,
    ) -> Result<PathBuf, CatalogError> {
        let name = checked_file_name(file_id, file_name)?;
        Ok(self
            .root
            .join(project_id.to_string())
            .join(file_id.to_string())
            .join(name))
    }

    /// Return the cached copy of a project file, fetching it first if absent.
    pub fn get_or_fetch(&self, project: &Project, file_id: i64) -> Result<PathBuf, CatalogError> {
        let file_name = project
            .file_name(file_id)
            .ok_or(CatalogError::FileNotFound(file_id))?;
        let target = self.path_for(project.id, file_id, file_name)?;
        if target.is_file() {
            debug!(path = %target.display(), "Cache hit");
            return Ok(target);
        }

        let dir = target
            .parent()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);
        fs::create_dir_all(&dir)?;

        let mut staging = tempfile::NamedTempFile::new_in(&dir)?;
        let bytes = self
            .fetcher
            .fetch(project, file_id, file_name, staging.as_file_mut())?;
        staging
            .persist(&target)
            .map_err(|err| CatalogError::Io(err.error))?;

        info!(path = %target.display(), bytes, "Cached file");
        Ok(target)
    }
}

/// Accept `file_name` only when it is exactly one normal path component.
pub(crate) fn checked_file_name(file_id: i64, file_name: &str) -> Result<&Path, CatalogError> {
    let path = Path::new(file_name);
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(path),
        _ => Err(CatalogError::InvalidFileName {
            file_id,
            name: file_name.to_string(),
        }),
    }
}
