//! Error types for the entire crate.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use crate::trace::ArtifactLanguage;
use thiserror::Error;

/// Errors that can occur during stack trace extraction
#[derive(Error, Debug)]
pub enum ParseError {
    /// A frame pattern matched but one of its numeric groups did not convert
    #[error("Malformed {language} frame: {detail}")]
    MalformedFrame {
        language: ArtifactLanguage,
        detail: String,
    },
}

/// Errors that can occur while mapping values to and from the interchange shape
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("JSON mapping failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Frame source must not be empty")]
    EmptySource,

    #[error("Unknown {kind} variant: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

/// Errors that can occur during file input/output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
