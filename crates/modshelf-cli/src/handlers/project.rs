//! Project command handler.

use std::io::Write;

use modshelf_core::TerminalError;

use super::read_id;
use crate::presentation::write_project_details;
use crate::repl::Session;

/// Execute the project command: show details for one project id.
pub fn execute(session: &mut Session) -> Result<(), TerminalError> {
    let id = read_id(session, "ID: ")?;
    writeln!(session.out)?;

    match id.and_then(|id| session.catalog.project_by_id(id)) {
        Some(project) => write_project_details(session.out.as_mut(), &project)?,
        None => writeln!(session.out, "Invalid project ID")?,
    }
    Ok(())
}
