//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the shell expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No storage format types (JSON documents, archives) in any signature
//! - Queries are synchronous; the shell is single-threaded
//! - Terminal access goes through [`LineSource`] only

pub mod catalog;
pub mod file_fetcher;
pub mod line_source;

pub use catalog::{CatalogError, CatalogPort};
pub use file_fetcher::FileFetcher;
pub use line_source::{LineSource, TerminalError};
