//! The parsed stack trace aggregate.

use super::filter::filter_agent_frames;
use super::frame::FrameElement;
use super::language::ArtifactLanguage;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A structured stack trace
///
/// Frames are ordered innermost first, i.e. `elements[0]` is where the
/// exception occurred. `caused_by` is a single optional link; deeper
/// chains only exist when a caller nests traces explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackTrace {
    pub exception_type: String,

    #[serde(default)]
    pub message: Option<String>,

    pub elements: Vec<FrameElement>,

    #[serde(default)]
    pub caused_by: Option<Box<StackTrace>>,

    #[serde(default)]
    pub language: Option<ArtifactLanguage>,
}

impl StackTrace {
    /// Create a trace with no cause and no language
    pub fn new(
        exception_type: impl Into<String>,
        message: Option<String>,
        elements: Vec<FrameElement>,
    ) -> Self {
        Self {
            exception_type: exception_type.into(),
            message,
            elements,
            caused_by: None,
            language: None,
        }
    }

    pub fn with_language(mut self, language: ArtifactLanguage) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_caused_by(mut self, cause: StackTrace) -> Self {
        self.caused_by = Some(Box::new(cause));
        self
    }

    /// Frames of this trace, optionally with agent frames hidden
    ///
    /// Borrows the stored frames unless filtering is requested.
    pub fn frames(&self, hide_agent_frames: bool) -> Cow<'_, [FrameElement]> {
        if hide_agent_frames {
            Cow::Owned(filter_agent_frames(&self.elements))
        } else {
            Cow::Borrowed(&self.elements)
        }
    }

    /// This trace followed by each nested cause
    pub fn caused_by_chain(&self) -> impl Iterator<Item = &StackTrace> {
        std::iter::successors(Some(self), |trace| trace.caused_by.as_deref())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrameElement> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<'a> IntoIterator for &'a StackTrace {
    type Item = &'a FrameElement;
    type IntoIter = std::slice::Iter<'a, FrameElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.exception_type)?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        for element in &self.elements {
            write!(f, "\n\t{}", element)?;
        }
        if let Some(cause) = &self.caused_by {
            write!(f, "\nCaused by: {}", cause)?;
        }
        Ok(())
    }
}
