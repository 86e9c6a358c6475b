//! Python traceback extraction.

use super::FrameExtractor;
use crate::trace::{ArtifactLanguage, FrameElement, StackTrace};
use crate::utils::config::NOT_AVAILABLE;
use crate::utils::error::ParseError;
use regex::Regex;
use std::sync::LazyLock;

/// `  File "<path>", line <n>, in <fn>` followed by the indented source line
static PYTHON_FRAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#" {2}File "(.+)", line ([0-9]+), in ([^\r\n]+)\r?\n {4}([^\r\n]+)"#)
        .expect("Python frame pattern is valid")
});

#[derive(Debug, Clone, Copy, Default)]
pub struct PythonExtractor;

impl FrameExtractor for PythonExtractor {
    fn language(&self) -> ArtifactLanguage {
        ArtifactLanguage::Python
    }

    fn recognizes(&self, text: &str) -> bool {
        PYTHON_FRAME.is_match(text)
    }

    /// Python prints outermost first, so frames are reversed
    ///
    /// The traceback text carries no reliable exception header, so type
    /// and message are both the `n/a` sentinel.
    fn extract(&self, text: &str) -> Result<StackTrace, ParseError> {
        let mut elements: Vec<FrameElement> = PYTHON_FRAME
            .captures_iter(text)
            .map(|caps| {
                FrameElement::new(&caps[3], format!("{}:{}", &caps[1], &caps[2]))
                    .with_source_code(&caps[4])
            })
            .collect();
        elements.reverse();

        Ok(StackTrace::new(NOT_AVAILABLE, Some(NOT_AVAILABLE.to_string()), elements)
            .with_language(ArtifactLanguage::Python))
    }
}
