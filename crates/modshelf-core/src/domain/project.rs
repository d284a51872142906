//! Project domain types.
//!
//! These mirror the record layout of the catalog database files, so the
//! serde attributes keep the upstream field names while the Rust side uses
//! snake case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Package type marking a section whose projects are packs.
pub const PACK_PACKAGE_TYPE: &str = "ModPack";

// ─────────────────────────────────────────────────────────────────────────────
// Section / File Types
// ─────────────────────────────────────────────────────────────────────────────

/// The catalog section a project belongs to (e.g. "Mods", "Modpacks").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Section {
    /// Display name of the section.
    pub name: String,
    /// Upstream package type; `ModPack` marks pack sections.
    pub package_type: String,
}

/// Lightweight pointer to the latest file for one game version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FileStub {
    /// Game version this file targets.
    pub game_version: String,
    /// Identifier of the referenced file.
    #[serde(rename = "ProjectFileID")]
    pub project_file_id: i64,
    /// File name as published.
    pub project_file_name: String,
}

/// Full metadata for one published file of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProjectFile {
    /// File identifier, unique across the whole catalog.
    pub id: i64,
    /// File name as published.
    pub file_name: String,
    /// Publication timestamp, when known.
    pub file_date: Option<DateTime<Utc>>,
    /// Every game version the file declares support for.
    pub game_version: Vec<String>,
    /// Upstream download location, when known.
    #[serde(rename = "DownloadURL")]
    pub download_url: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Project
// ─────────────────────────────────────────────────────────────────────────────

/// One catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Project {
    /// Catalog-wide project identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Name of the primary author.
    pub primary_author_name: String,
    /// Name of the primary category.
    pub primary_category_name: String,
    /// Section the project is listed under.
    pub category_section: Section,
    /// Short description.
    pub summary: String,
    /// Lifetime download counter.
    pub download_count: f64,
    /// Project page.
    #[serde(rename = "WebSiteURL")]
    pub website_url: String,
    /// File used when the project id is given where a file id is expected.
    pub default_file_id: i64,
    /// Latest file per game version.
    pub game_version_latest_files: Vec<FileStub>,
    /// Most recent files with full metadata.
    pub latest_files: Vec<ProjectFile>,
}

impl Project {
    /// Whether this project's section holds packs.
    pub fn is_pack(&self) -> bool {
        self.category_section
            .package_type
            .eq_ignore_ascii_case(PACK_PACKAGE_TYPE)
    }

    /// Name of the section the project is listed under.
    pub fn section_name(&self) -> &str {
        &self.category_section.name
    }

    /// Every game version associated with the project, duplicates included.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        let stubs = self
            .game_version_latest_files
            .iter()
            .map(|stub| stub.game_version.as_str());
        let files = self
            .latest_files
            .iter()
            .flat_map(|file| file.game_version.iter().map(String::as_str));
        stubs.chain(files)
    }

    /// Every file id the project references.
    pub fn file_ids(&self) -> impl Iterator<Item = i64> + '_ {
        let stubs = self
            .game_version_latest_files
            .iter()
            .map(|stub| stub.project_file_id);
        let files = self.latest_files.iter().map(|file| file.id);
        stubs.chain(files)
    }

    /// Look up the published file name for one of this project's files.
    pub fn file_name(&self, file_id: i64) -> Option<&str> {
        self.latest_files
            .iter()
            .find(|file| file.id == file_id)
            .map(|file| file.file_name.as_str())
            .or_else(|| {
                self.game_version_latest_files
                    .iter()
                    .find(|stub| stub.project_file_id == file_id)
                    .map(|stub| stub.project_file_name.as_str())
            })
    }

    /// Number of files listed for the project.
    pub fn file_count(&self) -> usize {
        self.game_version_latest_files.len() + self.latest_files.len()
    }
}
