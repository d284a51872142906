//! Quit command handler.

use tracing::debug;

use crate::repl::Session;

/// Stop the shell once the current iteration finishes.
pub fn execute(session: &mut Session) {
    debug!("Quit requested");
    session.stop();
}
