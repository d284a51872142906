//! Core domain types, ports and shell engine pieces for modshelf.
//!
//! The shell itself lives in `modshelf-cli`; this crate holds everything it
//! composes: the token queue its commands read from, the filter chain that
//! narrows the working list, the command registry, and the catalog port the
//! storage adapter implements.

pub mod commands;
pub mod domain;
pub mod filter;
pub mod input;
pub mod paths;
pub mod ports;

// Re-export commonly used types for convenience
pub use commands::{CommandRegistry, Handler};
pub use domain::{FileStub, GameInfo, Manifest, ManifestFile, Project, ProjectFile, Section};
pub use filter::{Filter, FilterChain, FilterError};
pub use input::{ReaderLines, TokenQueue};
pub use paths::PathError;
pub use ports::{CatalogError, CatalogPort, FileFetcher, LineSource, TerminalError};
