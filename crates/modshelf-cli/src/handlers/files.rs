//! Files command handler.

use std::io::Write;

use modshelf_core::TerminalError;

use super::read_id;
use crate::presentation::write_file_listing;
use crate::repl::Session;

/// Execute the files command: list the latest files of one project.
pub fn execute(session: &mut Session) -> Result<(), TerminalError> {
    let id = read_id(session, "ID: ")?;
    writeln!(session.out)?;

    match id.and_then(|id| session.catalog.project_by_id(id)) {
        Some(project) => write_file_listing(session.out.as_mut(), &project)?,
        None => writeln!(session.out, "Invalid project ID")?,
    }
    Ok(())
}
