//! Node.js stack trace extraction.

use super::{header_line, parse_number, FrameExtractor};
use crate::trace::{ArtifactLanguage, FrameElement, StackTrace};
use crate::utils::config::NOT_AVAILABLE;
use crate::utils::error::ParseError;
use regex::Regex;
use std::sync::LazyLock;

/// `at <fn> (<file>:<line>:<col>)`
static NODE_FRAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"at (.+) \((.+):([0-9]+):([0-9]+)\)").expect("Node frame pattern is valid")
});

#[derive(Debug, Clone, Copy, Default)]
pub struct NodeExtractor;

impl FrameExtractor for NodeExtractor {
    fn language(&self) -> ArtifactLanguage {
        ArtifactLanguage::NodeJs
    }

    fn recognizes(&self, text: &str) -> bool {
        NODE_FRAME.is_match(text)
    }

    /// Node prints innermost first, so frames keep file order
    fn extract(&self, text: &str) -> Result<StackTrace, ParseError> {
        let mut elements = Vec::new();
        for caps in NODE_FRAME.captures_iter(text) {
            let line = parse_number(self.language(), "line", &caps[3])?;
            let column = parse_number(self.language(), "column", &caps[4])?;
            elements.push(
                FrameElement::new(&caps[1], format!("{}:{}", &caps[2], line)).with_column(column),
            );
        }

        let (exception_type, message) = split_header(header_line(text));
        Ok(StackTrace::new(exception_type, Some(message), elements)
            .with_language(ArtifactLanguage::NodeJs))
    }
}

/// Type is everything before the first `:`, message the segment after the first `": "`
fn split_header(header: &str) -> (String, String) {
    let exception_type = header
        .split(':')
        .next()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(NOT_AVAILABLE);
    let message = header.split(": ").nth(1).unwrap_or(NOT_AVAILABLE);
    (exception_type.to_string(), message.to_string())
}
