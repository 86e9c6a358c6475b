//! JVM stack trace extraction.
//!
//! Handles `Throwable.printStackTrace()` output:
//!
//! ```text
//! java.lang.RuntimeException: boom
//!     at com.foo.Bar.baz(Bar.java:42)
//! Caused by: java.io.IOException: disk
//!     at com.foo.Io.read(Io.java:7)
//! ```

use super::{header_line, FrameExtractor};
use crate::trace::{ArtifactLanguage, FrameElement, StackTrace};
use crate::utils::error::ParseError;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// `at <qualified.class>.<method>(<source>)`, source may hold one nested paren group
static JVM_FRAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*at\s+((?:[\w\s](?:\$+|\.|/)?)+)\.([\w|_$\s<>]+)\s*\(([^()]+(?:\([^)]*\))?)\)")
        .expect("JVM frame pattern is valid")
});

static CAUSED_BY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*Caused by: ").expect("cause pattern is valid"));

#[derive(Debug, Clone, Copy, Default)]
pub struct JvmExtractor;

impl FrameExtractor for JvmExtractor {
    fn language(&self) -> ArtifactLanguage {
        ArtifactLanguage::Jvm
    }

    fn recognizes(&self, text: &str) -> bool {
        JVM_FRAME.is_match(text)
    }

    /// Extract the top-level trace and at most one `Caused by:` level
    ///
    /// Frames are kept in the order the JVM prints them, which is
    /// already innermost first. The cause section runs from the first
    /// `Caused by:` line up to the next one; deeper causes are dropped.
    fn extract(&self, text: &str) -> Result<StackTrace, ParseError> {
        let trace = match CAUSED_BY.find(text) {
            Some(cause) => {
                let top = extract_section(&text[..cause.start()]);
                let rest = &text[cause.end()..];
                let cause_text = match CAUSED_BY.find(rest) {
                    Some(deeper) => {
                        debug!("Dropping JVM causes nested below the first");
                        &rest[..deeper.start()]
                    }
                    None => rest,
                };
                let caused_by = extract_section(cause_text);
                debug!(
                    "JVM trace has cause {} with {} frames",
                    caused_by.exception_type,
                    caused_by.len()
                );
                top.with_caused_by(caused_by.with_language(ArtifactLanguage::Jvm))
            }
            None => extract_section(text),
        };

        Ok(trace.with_language(ArtifactLanguage::Jvm))
    }
}

/// Header split plus every frame in a single exception section
fn extract_section(text: &str) -> StackTrace {
    let (exception_type, message) = split_header(header_line(text).trim());

    let elements = JVM_FRAME
        .captures_iter(text)
        .map(|caps| {
            let class = &caps[1];
            let method = &caps[2];
            FrameElement::new(format!("{}.{}", class, method), &caps[3])
        })
        .collect();

    StackTrace::new(exception_type, message, elements)
}

/// Split `Type: message` on the first `": "`
///
/// **Public** - shared with callers that receive JVM headers separately
pub fn split_header(header: &str) -> (String, Option<String>) {
    match header.split_once(": ") {
        Some((exception_type, message)) => (exception_type.to_string(), Some(message.to_string())),
        None => (header.to_string(), None),
    }
}
