//! CLI-specific error types and exit code mapping.

use modshelf_core::{PathError, TerminalError};
use modshelf_db::StoreError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The primary database could not be loaded; the shell never starts.
    #[error("Error: No primary database loaded, cannot continue!\n  {0}")]
    Startup(String),

    /// Configuration error (unusable paths or settings).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal or filesystem I/O error.
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where a category fits.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Startup(_) => 66, // EX_NOINPUT
            Self::Config(_) => 78,  // EX_CONFIG
            Self::Io(_) => 74,      // EX_IOERR
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        Self::Startup(err.to_string())
    }
}

impl From<TerminalError> for CliError {
    fn from(err: TerminalError) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
