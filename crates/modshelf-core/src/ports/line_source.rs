//! Line source port for interactive input.
//!
//! The shell reads user input one line at a time through this trait. The
//! CLI adapter provides a line-editing implementation; [`ReaderLines`]
//! wraps any buffered reader for piped input.
//!
//! [`ReaderLines`]: crate::input::ReaderLines

use std::io;
use thiserror::Error;

/// Errors that end an interactive read.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// The input stream is exhausted (closed pipe, Ctrl-D).
    #[error("End of input")]
    EndOfInput,

    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Source of raw input lines.
pub trait LineSource {
    /// Display `prompt` (when non-empty) and block for one line.
    ///
    /// Returns the line without its trailing newline, or `None` once the
    /// input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, TerminalError>;
}

impl<T: LineSource + ?Sized> LineSource for Box<T> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, TerminalError> {
        (**self).read_line(prompt)
    }
}
