//! Top-level read-dispatch loop.

use std::io::Write;

use tracing::debug;

use modshelf_core::{CommandRegistry, TerminalError};

use super::session::Session;
use crate::handlers;

/// Prompt for top-level commands.
pub const PROMPT: &str = "> ";

/// The interactive shell: a command table driving one session.
#[derive(Debug)]
pub struct Shell {
    registry: CommandRegistry<Session>,
    session: Session,
}

impl Shell {
    /// Shell with the standard command set.
    pub fn new(session: Session) -> Self {
        Self::with_registry(session, handlers::default_registry())
    }

    /// Shell with a caller-provided command table.
    pub const fn with_registry(session: Session, registry: CommandRegistry<Session>) -> Self {
        Self { registry, session }
    }

    /// Register additional commands (or override existing ones).
    pub fn registry_mut(&mut self) -> &mut CommandRegistry<Session> {
        &mut self.registry
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    /// Run until a quit command or the end of input.
    ///
    /// Only terminal I/O failures are returned; exhausted input is a
    /// normal stop.
    pub fn run(&mut self) -> Result<(), TerminalError> {
        match self.run_loop() {
            Ok(()) | Err(TerminalError::EndOfInput) => {
                debug!("Shell stopped");
                self.session.running = false;
                self.session.out.flush()?;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn run_loop(&mut self) -> Result<(), TerminalError> {
        while self.session.running {
            // Leftovers from a malformed line never leak into the next command.
            self.session.input.clear();
            writeln!(self.session.out, "Projects: {}", self.session.working.len())?;

            let command = self.session.input.next_token(PROMPT)?;
            if command.is_empty() {
                continue;
            }

            debug!(%command, "Dispatching");
            self.registry.dispatch(&command, &mut self.session)?;
            writeln!(self.session.out)?;
        }
        Ok(())
    }
}
