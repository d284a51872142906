//! Scripted line source for tests.
//!
//! Replays a fixed list of lines and records every prompt shown, so tests
//! can assert which prompts a session issued.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::ports::{LineSource, TerminalError};

/// Shared, clonable record of the prompts a [`ScriptedLines`] was asked for.
#[derive(Debug, Clone, Default)]
pub struct PromptLog(Rc<RefCell<Vec<String>>>);

impl PromptLog {
    /// Every prompt requested so far, in order (empty prompts included).
    pub fn prompts(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// Whether `prompt` was ever requested.
    pub fn contains(&self, prompt: &str) -> bool {
        self.0.borrow().iter().any(|p| p == prompt)
    }

    fn record(&self, prompt: &str) {
        self.0.borrow_mut().push(prompt.to_string());
    }
}

/// Line source that yields a fixed script, then reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
    log: PromptLog,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            log: PromptLog::default(),
        }
    }

    /// Handle that keeps observing prompts after the source is boxed away.
    pub fn prompt_log(&self) -> PromptLog {
        self.log.clone()
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, TerminalError> {
        self.log.record(prompt);
        Ok(self.lines.pop_front())
    }
}
