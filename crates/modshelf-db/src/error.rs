//! Errors raised while loading database files.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a catalog database file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be opened or read.
    #[error("Cannot read database {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid database document.
    #[error("Cannot parse database {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
