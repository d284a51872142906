//! Modpack command handler.
//!
//! Resolves a pack id or pack file id and hands over to the pack explorer.
//! A project id is replaced by that project's default file; the file's
//! parent must be a pack before the explorer is entered.

use std::io::Write;

use tracing::debug;

use modshelf_core::TerminalError;

use super::read_id;
use crate::repl::{Session, pack_explorer};

/// Execute the modpack command.
pub fn execute(session: &mut Session) -> Result<(), TerminalError> {
    let mut file_id = read_id(session, "Modpack or file ID: ")?;
    writeln!(session.out)?;

    if let Some(project) = file_id.and_then(|id| session.catalog.project_by_id(id)) {
        writeln!(session.out, "Modpack ID detected, using default file ID for pack")?;
        file_id = Some(project.default_file_id);
    }

    let Some((file_id, parent)) =
        file_id.and_then(|id| session.catalog.parent_of_file(id).map(|parent| (id, parent)))
    else {
        writeln!(session.out, "Error: Invalid file ID")?;
        return Ok(());
    };

    writeln!(session.out)?;
    if !parent.is_pack() {
        debug!(file_id, parent = parent.id, "File parent is not a pack");
        writeln!(session.out, "Error: Parent of file isn't a modpack")?;
        return Ok(());
    }

    writeln!(session.out, "Parent Modpack: {}", parent.name)?;
    pack_explorer::run(session, file_id)
}
