//! Stack trace format detection.
//!
//! Picks the extractor for a block of text by testing frame patterns
//! in a fixed priority order. Node runs before JVM: a Node frame
//! `fn (file:line:col)` can also read as a JVM `Class.method(Source)`
//! frame, while the reverse does not hold.

use super::{FrameExtractor, JvmExtractor, NodeExtractor, PythonExtractor};
use crate::trace::{ArtifactLanguage, StackTrace};
use crate::utils::error::ParseError;
use log::{debug, warn};

/// Order in which frame patterns are tested, first match wins
pub const DETECTION_ORDER: [ArtifactLanguage; 3] = [
    ArtifactLanguage::NodeJs,
    ArtifactLanguage::Jvm,
    ArtifactLanguage::Python,
];

/// Extractor responsible for a language
pub fn extractor_for(language: ArtifactLanguage) -> &'static dyn FrameExtractor {
    match language {
        ArtifactLanguage::Jvm => &JvmExtractor,
        ArtifactLanguage::Python => &PythonExtractor,
        ArtifactLanguage::NodeJs => &NodeExtractor,
    }
}

/// Decide which runtime produced the text
///
/// Returns `None` when no frame pattern matches.
pub fn detect_format(text: &str) -> Option<ArtifactLanguage> {
    DETECTION_ORDER
        .into_iter()
        .find(|language| extractor_for(*language).recognizes(text))
}

/// Detect the format and extract a stack trace
///
/// **Public** - main entry point for parsing
///
/// # Returns
/// * `Ok(None)` - text is not a recognized stack trace
/// * `Ok(Some(trace))` - parsed trace, frames innermost first
///
/// # Errors
/// * `ParseError::MalformedFrame` - a frame matched but a numeric group did not convert
pub fn parse_stack_trace(text: &str) -> Result<Option<StackTrace>, ParseError> {
    let Some(language) = detect_format(text) else {
        debug!("No stack trace format recognized ({} bytes)", text.len());
        return Ok(None);
    };

    let trace = extractor_for(language).extract(text)?;
    debug!(
        "Parsed {} stack trace: {} with {} frames",
        language,
        trace.exception_type,
        trace.len()
    );
    Ok(Some(trace))
}

/// Detect the format and extract a stack trace, treating failures as unparsed text
///
/// Callers carry text that yields `None` as opaque, unparsed output.
pub fn detect_and_parse(text: &str) -> Option<StackTrace> {
    match parse_stack_trace(text) {
        Ok(trace) => trace,
        Err(e) => {
            warn!("Discarding stack trace: {}", e);
            None
        }
    }
}
