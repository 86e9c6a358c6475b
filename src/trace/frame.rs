//! A single parsed stack frame.

use crate::utils::error::CodecError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One call-site record of a stack trace
///
/// `source` encodes `file[:line]`. Languages that report the column
/// separately carry it in `column`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameElement {
    /// Fully-qualified call-site identifier (e.g. `pkg.Class.method`)
    pub method: String,

    /// Source file, optionally suffixed with `:line`; never empty
    #[serde(deserialize_with = "deserialize_source")]
    pub source: String,

    #[serde(default)]
    pub source_line: Option<u32>,

    #[serde(default)]
    pub column: Option<u32>,

    /// Source text of the line, when the runtime prints it
    #[serde(default)]
    pub source_code: Option<String>,
}

impl FrameElement {
    /// Create a frame with only method and source set
    ///
    /// `source` must not be empty; use `try_new` for unchecked input.
    pub fn new(method: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        debug_assert!(!source.is_empty(), "frame source must not be empty");
        Self {
            method: method.into(),
            source,
            source_line: None,
            column: None,
            source_code: None,
        }
    }

    /// Create a frame, rejecting an empty `source`
    pub fn try_new(
        method: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<Self, CodecError> {
        let source = source.into();
        if source.is_empty() {
            return Err(CodecError::EmptySource);
        }
        Ok(Self::new(method, source))
    }

    pub fn with_column(mut self, column: u32) -> Self {
        self.column = Some(column);
        self
    }

    pub fn with_source_code(mut self, source_code: impl Into<String>) -> Self {
        self.source_code = Some(source_code.into());
        self
    }

    pub fn with_source_line(mut self, source_line: u32) -> Self {
        self.source_line = Some(source_line);
        self
    }

    /// Line number encoded as the trailing `:<n>` of `source`, if any
    pub fn source_line_number(&self) -> Option<u32> {
        let (_, line) = self.source.rsplit_once(':')?;
        line.parse().ok()
    }

    /// `source` without its trailing line number
    pub fn source_file(&self) -> &str {
        match self.source.rsplit_once(':') {
            Some((file, line)) if line.parse::<u32>().is_ok() => file,
            _ => &self.source,
        }
    }
}

fn deserialize_source<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let source = String::deserialize(deserializer)?;
    if source.is_empty() {
        return Err(serde::de::Error::custom(CodecError::EmptySource));
    }
    Ok(source)
}

impl fmt::Display for FrameElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}({})", self.method, self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_line_number() {
        assert_eq!(FrameElement::new("a.b", "Bar.java:42").source_line_number(), Some(42));
        assert_eq!(FrameElement::new("a.b", "Native Method").source_line_number(), None);
        assert_eq!(FrameElement::new("a.b", "Bar.java").source_line_number(), None);
        assert_eq!(FrameElement::new("a.b", "C:\\app\\x.js:7").source_line_number(), Some(7));
    }

    #[test]
    fn test_source_file() {
        assert_eq!(FrameElement::new("f", "/app/index.js:10").source_file(), "/app/index.js");
        assert_eq!(FrameElement::new("f", "Unknown Source").source_file(), "Unknown Source");
    }

    #[test]
    fn test_empty_source_rejected() {
        assert!(matches!(FrameElement::try_new("m", ""), Err(CodecError::EmptySource)));
        assert_eq!(
            FrameElement::try_new("m", "a.py:1").unwrap(),
            FrameElement::new("m", "a.py:1")
        );

        let decoded: Result<FrameElement, _> =
            serde_json::from_value(serde_json::json!({"method": "m", "source": ""}));
        assert!(decoded.is_err());
    }

    #[test]
    fn test_display() {
        let frame = FrameElement::new("com.foo.Bar.baz", "Bar.java:42");
        assert_eq!(frame.to_string(), "at com.foo.Bar.baz(Bar.java:42)");
    }
}
