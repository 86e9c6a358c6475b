//! Parse command implementation.
//!
//! The parse command:
//! 1. Reads raw stack-trace text from a file or stdin
//! 2. Detects the runtime and extracts frames
//! 3. Optionally hides agent frames
//! 4. Prints the trace and writes JSON output

use crate::output::write_json;
use crate::parser::parse_stack_trace;
use crate::trace::StackTrace;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Read;
use std::path::PathBuf;

/// Arguments for the parse command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ParseArgs {
    /// Raw text input file (None = stdin)
    pub input: Option<PathBuf>,

    /// Strip frames injected by the instrumentation agent
    pub hide_agent_frames: bool,

    /// Print JSON instead of the rendered trace
    pub print_json: bool,

    /// Output path for the JSON trace (optional)
    pub output_json: Option<PathBuf>,
}

/// Execute the parse command
///
/// **Public** - main entry point called from main.rs
///
/// Unrecognized text is reported on stdout and is not an error.
pub fn execute_parse(args: ParseArgs) -> Result<Option<StackTrace>> {
    let text = read_input(args.input.as_ref())?;
    debug!("Read {} bytes of input", text.len());

    let Some(trace) = parse_stack_trace(&text).context("Failed to parse stack trace")? else {
        println!("No recognized stack trace format in input");
        return Ok(None);
    };

    let trace = if args.hide_agent_frames {
        hide_agent_frames(trace)
    } else {
        trace
    };

    info!(
        "Parsed {} trace with {} frames",
        trace
            .language
            .map(|l| l.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
        trace.len()
    );

    if args.print_json {
        println!("{}", serde_json::to_string_pretty(&trace)?);
    } else {
        println!("{}", trace);
    }

    if let Some(output) = &args.output_json {
        write_json(&trace, output)
            .with_context(|| format!("Failed to write {}", output.display()))?;
    }

    Ok(Some(trace))
}

/// Read the whole input file, or stdin when no file is given
///
/// **Private** - internal helper for execute_parse
fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Filter agent frames at every level of the cause chain
///
/// **Private** - internal helper for execute_parse
fn hide_agent_frames(trace: StackTrace) -> StackTrace {
    let elements = trace.frames(true).into_owned();
    let caused_by = trace.caused_by.map(|cause| Box::new(hide_agent_frames(*cause)));
    StackTrace {
        elements,
        caused_by,
        ..trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_file_and_write_json() {
        let mut input = NamedTempFile::new().unwrap();
        write!(input, "Error: oops\n    at foo (/app/index.js:10:5)\n").unwrap();
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("trace.json");

        let trace = execute_parse(ParseArgs {
            input: Some(input.path().to_path_buf()),
            output_json: Some(output.clone()),
            ..Default::default()
        })
        .unwrap()
        .unwrap();

        assert_eq!(trace.exception_type, "Error");
        let written: StackTrace = crate::output::read_json(&output).unwrap();
        assert_eq!(written, trace);
    }

    #[test]
    fn test_unrecognized_input_is_not_an_error() {
        let mut input = NamedTempFile::new().unwrap();
        write!(input, "plain log output").unwrap();

        let result = execute_parse(ParseArgs {
            input: Some(input.path().to_path_buf()),
            ..Default::default()
        })
        .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_missing_input_file() {
        let result = execute_parse(ParseArgs {
            input: Some(PathBuf::from("/nonexistent/input.txt")),
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
