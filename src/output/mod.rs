//! Interchange codec and file output.

pub mod json;

// Re-export main functions
pub use json::{from_json_value, read_json, to_json_value, write_json};
