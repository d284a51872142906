//! List command handler.
//!
//! Prints every project in the current working set.

use std::io::Write;

use modshelf_core::TerminalError;

use crate::presentation::write_project_summary;
use crate::repl::Session;

/// Execute the list command.
pub fn execute(session: &mut Session) -> Result<(), TerminalError> {
    writeln!(session.out)?;
    for project in &session.working {
        write_project_summary(session.out.as_mut(), project)?;
    }
    Ok(())
}
