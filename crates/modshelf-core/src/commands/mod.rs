//! Command registration and dispatch.

mod registry;

pub use registry::{CommandRegistry, HELP_NAME_WIDTH, Handler};
