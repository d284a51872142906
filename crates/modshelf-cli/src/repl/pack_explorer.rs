//! Nested loop for exploring one pack.
//!
//! Entered from the `modpack` command once a pack file has been resolved.
//! It has its own small command set and leaves on an empty line; anything
//! else it does not recognise is ignored without feedback, like unknown
//! top-level commands.

use std::io::Write;

use tracing::{debug, warn};

use modshelf_core::{CatalogError, CatalogPort, Manifest, TerminalError};

use super::session::Session;

/// Prompt shown inside the pack explorer.
pub const PACK_PROMPT: &str = "Modpack> ";

/// Sub-commands understood by the pack explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackCommand {
    /// List the pack's constituent projects.
    Mods,
    /// Fetch every constituent file into the cache.
    Download,
    /// Return to the top-level shell (empty line).
    Leave,
    /// Anything else; ignored.
    Unknown,
}

impl PackCommand {
    pub fn parse(token: &str) -> Self {
        match token.to_lowercase().as_str() {
            "" => Self::Leave,
            "mods" => Self::Mods,
            "download" => Self::Download,
            _ => Self::Unknown,
        }
    }
}

/// Manifest state for one visit to the pack explorer.
///
/// The manifest is fetched by the first command that needs it and reused
/// until the explorer exits. A failed fetch is not cached.
#[derive(Debug)]
pub struct ManifestSession {
    file_id: i64,
    manifest: Option<Manifest>,
}

impl ManifestSession {
    pub const fn new(file_id: i64) -> Self {
        Self {
            file_id,
            manifest: None,
        }
    }

    pub const fn file_id(&self) -> i64 {
        self.file_id
    }

    pub const fn is_loaded(&self) -> bool {
        self.manifest.is_some()
    }

    /// The pack manifest, fetched on first use.
    pub fn get_or_fetch(&mut self, catalog: &dyn CatalogPort) -> Result<&Manifest, CatalogError> {
        let manifest = match self.manifest.take() {
            Some(manifest) => manifest,
            None => {
                debug!(file_id = self.file_id, "Fetching pack manifest");
                catalog.manifest(self.file_id)?
            }
        };
        Ok(self.manifest.insert(manifest))
    }
}

/// Run the pack explorer for `file_id` until an empty line.
pub fn run(session: &mut Session, file_id: i64) -> Result<(), TerminalError> {
    let mut manifests = ManifestSession::new(file_id);
    loop {
        let token = session.input.next_token_or_blank(PACK_PROMPT)?;
        match PackCommand::parse(&token) {
            PackCommand::Leave => return Ok(()),
            PackCommand::Mods => list_mods(session, &mut manifests)?,
            PackCommand::Download => download(session, &mut manifests)?,
            PackCommand::Unknown => debug!(command = %token, "Ignoring unknown pack command"),
        }
    }
}

fn list_mods(session: &mut Session, manifests: &mut ManifestSession) -> Result<(), TerminalError> {
    let manifest = match manifests.get_or_fetch(session.catalog.as_ref()) {
        Ok(manifest) => manifest,
        Err(err) => return writeln!(session.out, "Error: {err}").map_err(Into::into),
    };

    writeln!(session.out, "Manifest: \n{manifest}")?;
    for file in &manifest.files {
        match session.catalog.project_by_id(file.project_id) {
            Some(project) => writeln!(session.out, "{}", project.name)?,
            None => {
                warn!(project_id = file.project_id, "Manifest references unknown project");
                writeln!(
                    session.out,
                    "Invalid project ID in mod list: {}",
                    file.project_id
                )?;
            }
        }
    }
    Ok(())
}

fn download(session: &mut Session, manifests: &mut ManifestSession) -> Result<(), TerminalError> {
    let manifest = match manifests.get_or_fetch(session.catalog.as_ref()) {
        Ok(manifest) => manifest,
        Err(err) => return writeln!(session.out, "Error: {err}").map_err(Into::into),
    };

    writeln!(session.out, "Getting associated files")?;
    let mut fetched = 0_usize;
    for file in &manifest.files {
        match session.catalog.cached_file(file.project_id, file.file_id) {
            Ok(path) => {
                fetched += 1;
                writeln!(session.out, "  {}", path.display())?;
            }
            Err(err) => {
                warn!(
                    project_id = file.project_id,
                    file_id = file.file_id,
                    error = %err,
                    "Could not fetch pack file"
                );
                writeln!(session.out, "  Failed: {err}")?;
            }
        }
    }
    writeln!(
        session.out,
        "Fetched {fetched} of {} files",
        manifest.files.len()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(PackCommand::parse("MODS"), PackCommand::Mods);
        assert_eq!(PackCommand::parse("Download"), PackCommand::Download);
        assert_eq!(PackCommand::parse(""), PackCommand::Leave);
        assert_eq!(PackCommand::parse("quit"), PackCommand::Unknown);
    }

    #[test]
    fn test_manifest_session_starts_empty() {
        let manifests = ManifestSession::new(12);
        assert_eq!(manifests.file_id(), 12);
        assert!(!manifests.is_loaded());
    }
}
