//! Stack trace format detection and per-language extraction.
//!
//! This module handles:
//! - Deciding which runtime produced a block of stack-trace text
//! - Extracting JVM, Python and Node frames into `StackTrace` values
//! - Normalizing frame order to innermost first

pub mod detector;
pub mod jvm;
pub mod node;
pub mod python;

use crate::trace::{ArtifactLanguage, StackTrace};
use crate::utils::error::ParseError;

// Re-export main entry points
pub use detector::{
    detect_and_parse, detect_format, extractor_for, parse_stack_trace, DETECTION_ORDER,
};
pub use jvm::JvmExtractor;
pub use node::NodeExtractor;
pub use python::PythonExtractor;

/// Converts one runtime's stack-trace output into a `StackTrace`
pub trait FrameExtractor: Sync {
    /// Runtime this extractor understands
    fn language(&self) -> ArtifactLanguage;

    /// Whether the text contains at least one frame in this runtime's syntax
    fn recognizes(&self, text: &str) -> bool;

    /// Extract the trace, frames innermost first
    fn extract(&self, text: &str) -> Result<StackTrace, ParseError>;
}

/// First line of the text, without a trailing carriage return
pub(crate) fn header_line(text: &str) -> &str {
    text.lines().next().unwrap_or("").trim_end_matches('\r')
}

/// Convert a digits-only capture group, reporting overflow as a malformed frame
pub(crate) fn parse_number(
    language: ArtifactLanguage,
    field: &str,
    value: &str,
) -> Result<u32, ParseError> {
    value.parse().map_err(|e| ParseError::MalformedFrame {
        language,
        detail: format!("{} '{}' is not a valid number: {}", field, value, e),
    })
}
