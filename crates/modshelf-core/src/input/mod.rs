//! Interactive input handling.
//!
//! - `token_queue` - Lookahead token buffer shared by all commands
//! - `reader_lines` - [`LineSource`](crate::ports::LineSource) over a `BufRead`
//! - `scripted` - Replayed input for tests (`test-utils` feature)

mod reader_lines;
#[cfg(any(test, feature = "test-utils"))]
mod scripted;
mod token_queue;

pub use reader_lines::ReaderLines;
#[cfg(any(test, feature = "test-utils"))]
pub use scripted::{PromptLog, ScriptedLines};
pub use token_queue::TokenQueue;
