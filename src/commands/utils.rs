use crate::event::{LiveBreakpointHit, LiveInstrumentRemoved, TrackedLiveEvent};
use crate::instrument::{InstrumentThrottle, LiveInstrument, LiveInstrumentCommand};
use crate::output::read_json;
use crate::trace::StackTrace;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::Path;

/// Document kinds the validate command understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentKind {
    StackTrace,
    Instrument,
    Command,
    BreakpointHit,
    InstrumentRemoved,
}

/// Decode a JSON document of the given kind and print a summary
pub fn validate_file(file_path: &Path, kind: DocumentKind) -> Result<()> {
    println!("Validating {:?}: {}", kind, file_path.display());

    let context = || format!("Invalid {:?} document: {}", kind, file_path.display());

    match kind {
        DocumentKind::StackTrace => {
            let trace: StackTrace = read_json(file_path).with_context(context)?;
            println!("✓ Valid stack trace JSON");
            println!("  Exception: {}", trace.exception_type);
            println!("  Frames: {}", trace.len());
            if let Some(top) = trace.elements.first() {
                println!("  Top Frame File: {}", top.source_file());
            }
            println!("  Cause depth: {}", trace.caused_by_chain().count() - 1);
        }
        DocumentKind::Instrument => {
            let instrument: LiveInstrument = read_json(file_path).with_context(context)?;
            println!("✓ Valid instrument JSON");
            println!("  Type: {}", instrument.instrument_type());
            println!("  Location: {}:{}", instrument.location.source, instrument.location.line);
            println!("  Hit Limit: {}", instrument.hit_limit);
            println!("  Throttle: {}", throttle_summary(&instrument.throttle));
        }
        DocumentKind::Command => {
            let command: LiveInstrumentCommand = read_json(file_path).with_context(context)?;
            println!("✓ Valid command JSON");
            println!("  Command: {:?}", command.command_type);
            println!("  Instruments: {}", command.instruments().len());
            println!("  Locations: {}", command.locations().len());
        }
        DocumentKind::BreakpointHit => {
            let hit: LiveBreakpointHit = read_json(file_path).with_context(context)?;
            println!("✓ Valid breakpoint hit JSON");
            println!("  Breakpoint: {}", hit.breakpoint_id);
            println!("  Occurred At: {}", hit.occurred_at().to_rfc3339());
            println!("  Frames: {}", hit.stack_trace.len());
        }
        DocumentKind::InstrumentRemoved => {
            let removed: LiveInstrumentRemoved = read_json(file_path).with_context(context)?;
            println!("✓ Valid instrument removed JSON");
            println!("  Event: {:?}", removed.event_type());
            println!("  Has Cause: {}", removed.cause.is_some());
        }
    }

    Ok(())
}

/// One-line throttle description, e.g. `5 per 60s`
pub fn throttle_summary(throttle: &InstrumentThrottle) -> String {
    format!("{} per {}s", throttle.limit, throttle.step.as_duration().as_secs())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Live Probe Protocol Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("StackTrace:");
        println!("  exceptionType: string      - Exception class or error name");
        println!("  message: string?           - Exception message");
        println!("  elements: array            - Frames, innermost first");
        println!("    method: string           - Fully-qualified call site");
        println!("    source: string           - file[:line]");
        println!("    sourceLine: number?      - Line, when reported separately");
        println!("    column: number?          - Column, when reported");
        println!("    sourceCode: string?      - Source text of the line");
        println!("  causedBy: StackTrace?      - Nested cause");
        println!("  language: string?          - JVM | PYTHON | NODEJS");
        println!();
        println!("LiveInstrument:");
        println!("  type: string               - BREAKPOINT | LOG | METER | SPAN");
        println!("  location: object           - source, line (-1 = any), service, ...");
        println!("  condition: string?         - Guard expression");
        println!("  expiresAt: number?         - Epoch milliseconds");
        println!("  hitLimit: number           - Default 1, -1 = unlimited");
        println!("  throttle: object           - limit, step (SECOND | MINUTE | HOUR | DAY)");
        println!("  meta: object               - Free-form metadata");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Live Probe v{}", env!("CARGO_PKG_VERSION"));
    println!("Protocol Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Stack trace normalization for live instrumentation agents.");
}
