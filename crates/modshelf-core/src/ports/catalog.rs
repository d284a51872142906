//! Catalog port for querying projects, files and pack manifests.
//!
//! This port defines the read-only surface the shell depends on. Loading
//! and merging database files happens when the concrete store is built;
//! once handed to the shell, the catalog only answers queries.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::{Manifest, Project};
use crate::filter::FilterChain;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No project with this id exists.
    #[error("Project not found: {0}")]
    ProjectNotFound(i64),

    /// No project references this file id.
    #[error("File not found: {0}")]
    FileNotFound(i64),

    /// Fetching a file into the cache failed.
    #[error("Failed to fetch file {file_id} of project {project_id}: {reason}")]
    FetchFailed {
        project_id: i64,
        file_id: i64,
        reason: String,
    },

    /// The pack archive has no readable manifest.
    #[error("Invalid manifest in file {file_id}: {reason}")]
    InvalidManifest { file_id: i64, reason: String },

    /// A file name that is not a plain single path segment.
    #[error("Refusing unsafe file name for file {file_id}: {name:?}")]
    InvalidFileName { file_id: i64, name: String },

    /// Filesystem error while accessing the cache.
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for querying the loaded catalog.
pub trait CatalogPort: fmt::Debug {
    /// The full, unfiltered project list in catalog order.
    fn projects(&self) -> &[Arc<Project>];

    /// The projects passing every filter in `chain`, in catalog order.
    fn filter(&self, chain: &FilterChain) -> Vec<Arc<Project>> {
        chain.apply(self.projects())
    }

    /// Resolve a project by id.
    fn project_by_id(&self, id: i64) -> Option<Arc<Project>>;

    /// Resolve the project that publishes `file_id`.
    ///
    /// Returns `None` when no project references the file.
    fn parent_of_file(&self, file_id: i64) -> Option<Arc<Project>>;

    /// Read the manifest of a pack file, fetching the archive if needed.
    fn manifest(&self, file_id: i64) -> Result<Manifest, CatalogError>;

    /// Return the local path of a file, fetching it on first use.
    ///
    /// Repeated calls for the same file reuse the cached copy.
    fn cached_file(&self, project_id: i64, file_id: i64) -> Result<PathBuf, CatalogError>;

    /// Distinct section names, sorted.
    fn sections(&self) -> Vec<String>;

    /// Distinct primary category names, sorted.
    fn categories(&self) -> Vec<String>;

    /// Distinct game versions, sorted.
    fn versions(&self) -> Vec<String>;

    /// Number of projects listed under `section` (exact name).
    fn section_size(&self, section: &str) -> usize {
        self.projects()
            .iter()
            .filter(|project| project.section_name() == section)
            .count()
    }
}
