//! Interactive catalog shell.
//!
//! - `bootstrap` - Environment configuration and catalog loading
//! - `repl` - Session state, the top-level loop and the pack explorer
//! - `handlers` - One module per top-level command
//! - `presentation` - Output formatting shared by handlers
//! - `editor` - rustyline-backed terminal input

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod editor;
pub mod error;
pub mod handlers;
pub mod presentation;
pub mod repl;

// Re-export primary types for convenient access
pub use bootstrap::{ShellConfig, load_catalog};
pub use editor::EditorLines;
pub use error::CliError;
pub use repl::{Session, Shell};
