//! Shared lookahead buffer over a line source.
//!
//! Commands pull their arguments from one queue in two ways: a single
//! whitespace-delimited token, or everything left on the line. Typing
//! `filter author Foo Bar` in one go therefore feeds three prompts from
//! one line, while typing each part on its own line feeds them one by one.

use std::collections::VecDeque;

use tracing::trace;

use crate::ports::{LineSource, TerminalError};

/// FIFO of pending tokens, refilled from the line source only when empty.
pub struct TokenQueue {
    pending: VecDeque<String>,
    source: Box<dyn LineSource>,
}

impl TokenQueue {
    pub fn new(source: Box<dyn LineSource>) -> Self {
        Self {
            pending: VecDeque::new(),
            source,
        }
    }

    /// Pop the next token, reading lines until at least one token exists.
    ///
    /// Blank lines are skipped and the prompt is shown again.
    pub fn next_token(&mut self, prompt: &str) -> Result<String, TerminalError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let line = self.read_line(prompt)?;
            self.push_tokens(&line);
        }
    }

    /// Pop the next token, or return `""` when a fresh read hits a blank line.
    ///
    /// Used by prompts where pressing return means "cancel" or "leave".
    pub fn next_token_or_blank(&mut self, prompt: &str) -> Result<String, TerminalError> {
        if self.pending.is_empty() {
            let line = self.read_line(prompt)?;
            self.push_tokens(&line);
        }
        Ok(self.pending.pop_front().unwrap_or_default())
    }

    /// Return the rest of the current input.
    ///
    /// With buffered tokens, joins them with single spaces and empties the
    /// queue without reading. With an empty queue, reads one line and returns
    /// it verbatim (possibly empty); the queue stays empty.
    pub fn next_full_remainder(&mut self, prompt: &str) -> Result<String, TerminalError> {
        if self.pending.is_empty() {
            return self.read_line(prompt);
        }
        let joined = self.pending.drain(..).collect::<Vec<_>>().join(" ");
        Ok(joined)
    }

    /// Drop every buffered token. Never reads.
    pub fn clear(&mut self) {
        if !self.pending.is_empty() {
            trace!(discarded = self.pending.len(), "Clearing buffered tokens");
        }
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Release the queue, handing back the line source.
    pub fn into_source(self) -> Box<dyn LineSource> {
        self.source
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, TerminalError> {
        self.source
            .read_line(prompt)?
            .ok_or(TerminalError::EndOfInput)
    }

    fn push_tokens(&mut self, line: &str) {
        self.pending
            .extend(line.split_whitespace().map(str::to_string));
    }
}

impl std::fmt::Debug for TokenQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenQueue")
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
