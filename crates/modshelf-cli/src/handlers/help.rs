//! Help command handler.

use std::io::Write;

use modshelf_core::{CommandRegistry, TerminalError};

use crate::presentation::write_indented_list;
use crate::repl::Session;

/// Print every registered help line in registration order.
pub fn execute(session: &mut Session, registry: &CommandRegistry<Session>) -> Result<(), TerminalError> {
    writeln!(session.out, "\nCommand list:")?;
    write_indented_list(session.out.as_mut(), registry.help_text())?;
    Ok(())
}
