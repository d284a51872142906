//! Database file documents.
//!
//! A database file is one JSON document holding a generation timestamp and
//! the full project list. The primary database is the complete export;
//! secondaries are smaller, newer exports merged on top.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use modshelf_core::Project;

use crate::error::StoreError;

/// One parsed database file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DatabaseFile {
    /// Export generation time (seconds since the epoch).
    #[serde(default, alias = "timestamp")]
    pub timestamp: u64,
    /// Every project in the export.
    #[serde(default, alias = "data")]
    pub data: Vec<Project>,
}

impl DatabaseFile {
    /// Read and parse a database file from disk.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let file = File::open(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let database: Self =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        info!(
            path = %path.display(),
            projects = database.data.len(),
            timestamp = database.timestamp,
            "Opened database"
        );
        Ok(database)
    }
}

/// Outcome of opening the secondary databases.
#[derive(Debug, Default)]
pub struct Secondaries {
    /// Parsed files, in input order.
    pub opened: Vec<DatabaseFile>,
    /// Paths that do not exist.
    pub missing: Vec<PathBuf>,
    /// Files that exist but could not be read or parsed.
    pub failed: Vec<StoreError>,
}

/// Open each secondary database that can be opened.
///
/// A secondary only refreshes the primary, so one that is absent or
/// corrupt is set aside rather than failing the whole load.
pub fn open_secondaries(paths: &[PathBuf]) -> Secondaries {
    let mut secondaries = Secondaries::default();
    for path in paths {
        if !path.exists() {
            secondaries.missing.push(path.clone());
            continue;
        }
        match DatabaseFile::open(path) {
            Ok(database) => secondaries.opened.push(database),
            Err(err) => secondaries.failed.push(err),
        }
    }
    secondaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_parses_upstream_layout() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "Timestamp": 1500000000, "Data": [ {{ "Id": 1, "Name": "A" }} ] }}"#
        )
        .unwrap();

        let database = DatabaseFile::open(file.path()).unwrap();
        assert_eq!(database.timestamp, 1_500_000_000);
        assert_eq!(database.data[0].name, "A");
    }

    #[test]
    fn test_open_reports_parse_errors_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = DatabaseFile::open(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_open_secondaries_skips_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("hourly.json");
        std::fs::write(&present, r#"{ "Timestamp": 2, "Data": [] }"#).unwrap();
        let missing = dir.path().join("daily.json");

        let secondaries = open_secondaries(&[missing.clone(), present]);
        assert_eq!(secondaries.opened.len(), 1);
        assert_eq!(secondaries.missing, vec![missing]);
        assert!(secondaries.failed.is_empty());
    }

    #[test]
    fn test_open_secondaries_sets_aside_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        let corrupt = dir.path().join("hourly.json");
        std::fs::write(&corrupt, "garbage").unwrap();
        let good = dir.path().join("daily.json");
        std::fs::write(&good, r#"{ "Timestamp": 3, "Data": [] }"#).unwrap();

        let secondaries = open_secondaries(&[corrupt.clone(), good]);
        assert_eq!(secondaries.opened.len(), 1);
        assert_eq!(secondaries.opened[0].timestamp, 3);
        assert!(secondaries.missing.is_empty());
        assert_eq!(secondaries.failed.len(), 1);
        assert!(matches!(
            &secondaries.failed[0],
            StoreError::Parse { path, .. } if *path == corrupt
        ));
    }
}
