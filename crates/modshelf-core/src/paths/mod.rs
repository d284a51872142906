//! Path utilities for modshelf data directories.
//!
//! This module provides the canonical path resolution for:
//! - The data root (database files, history)
//! - The file cache and local mirror
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle reporting
//! - Environment lookups are injectable so resolution stays testable

mod error;

use std::path::{Path, PathBuf};

pub use error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "MODSHELF_DATA_DIR";

/// Directory name used under the system data directory.
pub const APP_DIR_NAME: &str = "modshelf";

/// Default primary database file name.
pub const DEFAULT_PRIMARY_DB: &str = "complete.json";

/// Default secondary database file names, merged in order.
pub const DEFAULT_SECONDARY_DBS: &[&str] = &["hourly.json"];

/// Default cache directory name under the data root.
pub const DEFAULT_CACHE_DIR: &str = "cache";

/// Default mirror directory name under the data root.
pub const DEFAULT_MIRROR_DIR: &str = "mirror";

/// Default history file name under the data root.
pub const DEFAULT_HISTORY_FILE: &str = "history.txt";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `override_dir`, normally the `MODSHELF_DATA_DIR` variable
/// 2. System data directory (e.g., `~/.local/share/modshelf`)
pub fn data_root_from(override_dir: Option<&str>) -> Result<PathBuf, PathError> {
    match override_dir.map(str::trim) {
        Some("") => Err(PathError::EmptyPath),
        Some(dir) => checked_dir(PathBuf::from(dir)),
        None => dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::NoDataDir),
    }
}

/// Resolve `name` against `root` unless it is already absolute.
pub fn resolve_under(root: &Path, name: &str) -> PathBuf {
    let path = Path::new(name);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn checked_dir(path: PathBuf) -> Result<PathBuf, PathError> {
    if path.exists() && !path.is_dir() {
        return Err(PathError::NotADirectory(path));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let root = data_root_from(dir.path().to_str()).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_blank_override_is_rejected() {
        assert!(matches!(data_root_from(Some("  ")), Err(PathError::EmptyPath)));
    }

    #[test]
    fn test_file_override_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            data_root_from(file.path().to_str()),
            Err(PathError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_resolve_under_keeps_absolute_paths() {
        let root = Path::new("/data/modshelf");
        assert_eq!(
            resolve_under(root, "complete.json"),
            PathBuf::from("/data/modshelf/complete.json")
        );
        assert_eq!(
            resolve_under(root, "/elsewhere/hourly.json"),
            PathBuf::from("/elsewhere/hourly.json")
        );
    }
}
