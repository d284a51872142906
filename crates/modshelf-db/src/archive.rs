//! Pack archive reading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use modshelf_core::domain::MANIFEST_FILE_NAME;
use modshelf_core::{CatalogError, Manifest};

/// Read `manifest.json` out of the pack archive at `path`.
pub fn read_manifest(path: &Path, file_id: i64) -> Result<Manifest, CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidManifest { file_id, reason };

    let file = File::open(path)?;
    let mut archive =
        zip::ZipArchive::new(BufReader::new(file)).map_err(|e| invalid(e.to_string()))?;
    let entry = archive
        .by_name(MANIFEST_FILE_NAME)
        .map_err(|e| invalid(format!("{MANIFEST_FILE_NAME}: {e}")))?;
    Manifest::from_reader(entry).map_err(|e| invalid(e.to_string()))
}
