//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the storage adapter is wired
//! together for the shell:
//! - Paths resolved from the environment
//! - Database files opened and merged (via modshelf-db)
//! - File cache backed by the local mirror
//!
//! The shell itself only ever sees the resulting `CatalogPort`.

use std::io::Write;
use std::path::PathBuf;

use tracing::{info, warn};

use modshelf_core::CatalogPort;
use modshelf_core::paths::{
    DATA_DIR_ENV, DEFAULT_CACHE_DIR, DEFAULT_HISTORY_FILE, DEFAULT_MIRROR_DIR, DEFAULT_PRIMARY_DB,
    DEFAULT_SECONDARY_DBS, data_root_from, resolve_under,
};
use modshelf_db::{CatalogBuilder, DatabaseFile, FileCache, JsonCatalog, MirrorFetcher, open_secondaries};

use crate::error::CliError;

/// Primary database file name or path.
pub const PRIMARY_DB_ENV: &str = "MODSHELF_PRIMARY_DB";
/// Comma-separated secondary database file names or paths.
pub const SECONDARY_DBS_ENV: &str = "MODSHELF_SECONDARY_DBS";
/// File cache directory.
pub const CACHE_DIR_ENV: &str = "MODSHELF_CACHE_DIR";
/// Local mirror the cache fetches from.
pub const MIRROR_DIR_ENV: &str = "MODSHELF_MIRROR_DIR";
/// Line-editor history file.
pub const HISTORY_ENV: &str = "MODSHELF_HISTORY";

/// Bootstrap configuration for the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Directory relative names resolve against.
    pub data_root: PathBuf,
    /// Database that must load for the shell to start.
    pub primary_db: PathBuf,
    /// Newer databases merged on top, in order.
    pub secondary_dbs: Vec<PathBuf>,
    /// Where fetched files are kept.
    pub cache_dir: PathBuf,
    /// Where missing files are fetched from.
    pub mirror_dir: PathBuf,
    /// Line-editor history file.
    pub history_file: PathBuf,
}

impl ShellConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through `lookup`, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_root = data_root_from(lookup(DATA_DIR_ENV).as_deref())?;
        let setting = |key: &str, default: &str| {
            let value = lookup(key).filter(|value| !value.trim().is_empty());
            resolve_under(&data_root, value.as_deref().map_or(default, str::trim))
        };

        let secondary_dbs = lookup(SECONDARY_DBS_ENV).map_or_else(
            || {
                DEFAULT_SECONDARY_DBS
                    .iter()
                    .map(|name| resolve_under(&data_root, name))
                    .collect()
            },
            |list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(|name| resolve_under(&data_root, name))
                    .collect()
            },
        );

        Ok(Self {
            primary_db: setting(PRIMARY_DB_ENV, DEFAULT_PRIMARY_DB),
            secondary_dbs,
            cache_dir: setting(CACHE_DIR_ENV, DEFAULT_CACHE_DIR),
            mirror_dir: setting(MIRROR_DIR_ENV, DEFAULT_MIRROR_DIR),
            history_file: setting(HISTORY_ENV, DEFAULT_HISTORY_FILE),
            data_root,
        })
    }
}

/// Open, merge and index the databases named by `config`.
///
/// Progress and the section summary are written to `out`. A primary
/// database that cannot be read is a startup error; secondaries that are
/// missing or unreadable are skipped with a warning.
pub fn load_catalog(config: &ShellConfig, out: &mut dyn Write) -> Result<JsonCatalog, CliError> {
    write!(out, "Opening databases...")?;
    out.flush()?;
    let primary = DatabaseFile::open(&config.primary_db)?;
    let secondaries = open_secondaries(&config.secondary_dbs);
    for path in &secondaries.missing {
        warn!(path = %path.display(), "Secondary database not found, skipping");
    }
    for err in &secondaries.failed {
        warn!(error = %err, "Secondary database unreadable, skipping");
    }
    writeln!(out, "done")?;

    write!(out, "Merging databases...")?;
    out.flush()?;
    let mut builder = CatalogBuilder::from_primary(primary);
    for secondary in secondaries.opened {
        builder.merge_secondary(secondary);
    }
    writeln!(out, "done")?;

    write!(out, "Processing database data...")?;
    out.flush()?;
    let fetcher = MirrorFetcher::new(&config.mirror_dir);
    let catalog = builder.build(FileCache::new(&config.cache_dir, Box::new(fetcher)));
    writeln!(out, "done")?;

    info!(projects = catalog.projects().len(), "Catalog ready");
    write_section_summary(&catalog, out)?;
    Ok(catalog)
}

/// Write `Sections:` followed by the project count of each section.
pub fn write_section_summary(catalog: &dyn CatalogPort, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "\nSections:")?;
    for section in catalog.sections() {
        writeln!(out, "  {section} - {} projects", catalog.section_size(&section))?;
    }
    writeln!(out)?;
    Ok(())
}
