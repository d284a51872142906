//! Name/alias to handler registry with ordered help text.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::ports::TerminalError;

/// Width of the name column in help lines.
pub const HELP_NAME_WIDTH: usize = 18;

/// Handler signature shared by every command.
///
/// Handlers receive the registry itself so introspective commands (help)
/// need no extra wiring. Only terminal failures may escape a handler;
/// command-level problems are reported by the handler and swallowed.
pub type Handler<C> = Rc<dyn Fn(&mut C, &CommandRegistry<C>) -> Result<(), TerminalError>>;

/// Case-insensitive command table.
///
/// Every alias of one registration points at the same handler. Registering
/// a name that already exists replaces its handler; the earlier help line
/// stays in place.
pub struct CommandRegistry<C> {
    handlers: HashMap<String, Handler<C>>,
    descriptions: Vec<String>,
}

impl<C> CommandRegistry<C> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            descriptions: Vec::new(),
        }
    }

    /// Register `handler` under every name in `names`.
    pub fn register<F>(&mut self, names: &[&str], description: &str, handler: F)
    where
        F: Fn(&mut C, &Self) -> Result<(), TerminalError> + 'static,
    {
        let handler: Handler<C> = Rc::new(handler);
        for name in names {
            let key = name.to_lowercase();
            if self.handlers.insert(key, Rc::clone(&handler)).is_some() {
                debug!(command = %name, "Replacing existing command handler");
            }
        }
        self.descriptions.push(help_line(names, description));
    }

    /// Run the handler registered for `token`.
    ///
    /// Returns `Ok(false)` without side effects when nothing is registered.
    pub fn dispatch(&self, token: &str, ctx: &mut C) -> Result<bool, TerminalError> {
        let Some(handler) = self.handlers.get(&token.to_lowercase()) else {
            debug!(command = %token, "Ignoring unknown command");
            return Ok(false);
        };
        let handler = Rc::clone(handler);
        handler(ctx, self)?;
        Ok(true)
    }

    /// Whether `name` (any case) is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(&name.to_lowercase())
    }

    /// Help lines in registration order, one per `register` call.
    pub fn help_text(&self) -> &[String] {
        &self.descriptions
    }
}

impl<C> Default for CommandRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for CommandRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.handlers.keys().collect();
        names.sort();
        f.debug_struct("CommandRegistry")
            .field("names", &names)
            .field("descriptions", &self.descriptions)
            .finish()
    }
}

fn help_line(names: &[&str], description: &str) -> String {
    format!(
        "{:<width$} : {description}",
        names.join(", "),
        width = HELP_NAME_WIDTH
    )
}
