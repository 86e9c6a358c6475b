//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod parse;
pub mod utils;

// Re-export main command functions
pub use parse::{execute_parse, ParseArgs};
pub use utils::{display_schema, display_version, throttle_summary, validate_file, DocumentKind};
