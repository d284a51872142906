//! Command handlers for the top-level shell.
//!
//! Handlers follow one pattern:
//! - Signature: `pub fn execute(session: &mut Session, ...) -> Result<(), TerminalError>`
//! - Arguments are pulled from the session's token queue, never from argv
//! - Command-level problems (bad ids, missing projects) are printed and
//!   swallowed; only terminal failures propagate
//!
//! [`default_registry`] wires every handler under its names in help order.

pub mod files;
pub mod filter;
pub mod help;
pub mod listings;
pub mod list;
pub mod modpack;
pub mod project;
pub mod quit;

use tracing::debug;

use modshelf_core::{CommandRegistry, TerminalError};

use crate::repl::Session;

/// Registry holding the standard command set.
pub fn default_registry() -> CommandRegistry<Session> {
    let mut registry = CommandRegistry::new();
    register_all(&mut registry);
    registry
}

/// Register the standard command set into `registry`.
///
/// Registration order is the order commands appear in `help`.
pub fn register_all(registry: &mut CommandRegistry<Session>) {
    registry.register(&["filter", "filters"], "Create filter", |session, _| {
        filter::execute(session)
    });
    registry.register(&["list", "ls", "dir"], "List projects", |session, _| {
        list::execute(session)
    });
    registry.register(&["project"], "Get info on a project", |session, _| {
        project::execute(session)
    });
    registry.register(&["files"], "List files for a project", |session, _| {
        files::execute(session)
    });
    registry.register(&["modpack"], "Modpack commands", |session, _| {
        modpack::execute(session)
    });
    registry.register(&["categories"], "List categories", |session, _| {
        listings::categories(session)
    });
    registry.register(&["versions"], "List versions", |session, _| {
        listings::versions(session)
    });
    registry.register(&["sections"], "List sections", |session, _| {
        listings::sections(session)
    });
    registry.register(&["help", "?"], "Show help", help::execute);
    registry.register(&["quit", "exit"], "Exit modshelf", |session, _| {
        quit::execute(session);
        Ok(())
    });
}

/// Read one token and parse it as a numeric id.
///
/// Unparseable input yields `None`; callers report it the same way as an
/// unknown id.
pub(crate) fn read_id(session: &mut Session, prompt: &str) -> Result<Option<i64>, TerminalError> {
    let token = session.input.next_token(prompt)?;
    match token.parse::<i64>() {
        Ok(id) => Ok(Some(id)),
        Err(err) => {
            debug!(%token, error = %err, "Not a numeric id");
            Ok(None)
        }
    }
}
