//! Interactive shell engine.
//!
//! - `session` - State shared by handlers (input, filters, working set)
//! - `shell` - Top-level loop over the command registry
//! - `pack_explorer` - Nested loop for exploring one pack's manifest

pub mod pack_explorer;
pub mod session;
pub mod shell;

pub use pack_explorer::{ManifestSession, PACK_PROMPT, PackCommand};
pub use session::Session;
pub use shell::{PROMPT, Shell};
