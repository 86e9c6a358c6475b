//! Live Probe Protocol
//!
//! Normalization layer for remote-debugging events: detects which
//! runtime produced a block of stack-trace text, parses it into a
//! structured `StackTrace`, and strips frames the instrumentation agent
//! injected. Also defines the live instrument data model (breakpoints,
//! logs, meters, spans) those traces are correlated against.
//!
//! ## Getting Started
//!
//! ```
//! use live_probe_protocol::parser::detect_and_parse;
//!
//! let trace = detect_and_parse("Error: oops\n    at foo (/app/index.js:10:5)\n").unwrap();
//! assert_eq!(trace.exception_type, "Error");
//! ```

pub mod commands;
pub mod event;
pub mod instrument;
pub mod output;
pub mod parser;
pub mod trace;
pub mod utils;
