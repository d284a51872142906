//! Pack manifest types.
//!
//! A manifest is the `manifest.json` carried inside a pack archive. Only
//! the fields the shell displays or walks are modelled; unknown keys are
//! ignored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

/// Name of the manifest entry inside a pack archive.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Game information block of a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameInfo {
    /// Game version the pack targets.
    pub version: String,
}

/// One constituent of a pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestFile {
    #[serde(rename = "projectID")]
    pub project_id: i64,
    #[serde(rename = "fileID")]
    pub file_id: i64,
    #[serde(default = "default_required")]
    pub required: bool,
}

const fn default_required() -> bool {
    true
}

/// Ordered list of (project id, file id) pairs plus pack metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub author: String,
    pub minecraft: GameInfo,
    pub files: Vec<ManifestFile>,
}

impl Manifest {
    /// Parse a manifest from a JSON byte stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Name: {}", self.name)?;
        writeln!(f, "  Version: {}", self.version)?;
        writeln!(f, "  Author: {}", self.author)?;
        writeln!(f, "  Game Version: {}", self.minecraft.version)?;
        write!(f, "  Files: {}", self.files.len())
    }
}
