//! Line-editing terminal input backed by rustyline.

use std::io;
use std::path::PathBuf;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, warn};

use modshelf_core::{LineSource, TerminalError};

/// Interactive [`LineSource`] with editing keys and persistent history.
///
/// Ctrl-D and Ctrl-C both end the input, which stops the shell cleanly.
pub struct EditorLines {
    editor: DefaultEditor,
    history: Option<PathBuf>,
}

impl EditorLines {
    /// Create an editor, loading history from `history` when it exists.
    pub fn new(history: Option<PathBuf>) -> Result<Self, TerminalError> {
        let mut editor = DefaultEditor::new().map_err(into_terminal_error)?;
        if let Some(path) = &history {
            if let Err(err) = editor.load_history(path) {
                debug!(path = %path.display(), error = %err, "No history loaded");
            }
        }
        Ok(Self { editor, history })
    }
}

impl LineSource for EditorLines {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, TerminalError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor
                        .add_history_entry(line.as_str())
                        .map_err(into_terminal_error)?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(err) => Err(into_terminal_error(err)),
        }
    }
}

impl Drop for EditorLines {
    fn drop(&mut self) {
        let Some(path) = &self.history else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %err, "Cannot create history directory");
                return;
            }
        }
        if let Err(err) = self.editor.save_history(path) {
            warn!(path = %path.display(), error = %err, "Failed to save history");
        }
    }
}

impl std::fmt::Debug for EditorLines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorLines")
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

fn into_terminal_error(err: ReadlineError) -> TerminalError {
    match err {
        ReadlineError::Io(err) => TerminalError::Io(err),
        other => TerminalError::Io(io::Error::other(other.to_string())),
    }
}
