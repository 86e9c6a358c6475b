//! JSON interchange codec.
//!
//! `to_json_value`/`from_json_value` map any value type to and from
//! `serde_json::Value`, the generic structured form handed to whatever
//! transport carries it. `write_json`/`read_json` add file I/O for the CLI.

use crate::utils::error::{CodecError, OutputError};
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Map a value to its interchange shape
///
/// **Public** - encoding half of the codec pair
pub fn to_json_value<T: Serialize>(value: &T) -> Result<serde_json::Value, CodecError> {
    Ok(serde_json::to_value(value)?)
}

/// Rebuild a value from its interchange shape
///
/// **Public** - decoding half of the codec pair
///
/// # Errors
/// * `CodecError::JsonError` - missing required fields or unknown enum tags
pub fn from_json_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, CodecError> {
    Ok(serde_json::from_value(value)?)
}

/// Write a value to a pretty-printed JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_json<T: Serialize>(
    value: &T,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON to: {}", output_path.display());

    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, value).map_err(OutputError::SerializationFailed)?;

    info!("JSON written successfully ({} bytes)", calculate_file_size(output_path));

    Ok(())
}

/// Read a value from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::ReadFailed` - File read error
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_json<T: DeserializeOwned>(input_path: impl AsRef<Path>) -> Result<T, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading JSON from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let value = serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    Ok(value)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
