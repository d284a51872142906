//! Core domain types.
//!
//! These types represent the catalog as the shell sees it, independent of
//! how the backing store reads or caches it.
//!
//! # Structure
//!
//! - `project` - Catalog entries and their file metadata
//! - `manifest` - Pack manifests (constituent project/file pairs)

mod manifest;
mod project;

pub use manifest::{GameInfo, MANIFEST_FILE_NAME, Manifest, ManifestFile};
pub use project::{FileStub, PACK_PACKAGE_TYPE, Project, ProjectFile, Section};
