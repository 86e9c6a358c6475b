//! Structured stack traces and agent-frame filtering.
//!
//! This module handles:
//! - The frame value type
//! - The stack trace aggregate and its rendering
//! - Stripping frames injected by the instrumentation agent

pub mod filter;
pub mod frame;
pub mod language;
pub mod stack_trace;

// Re-export main types
pub use filter::{filter_agent_frames, is_agent_library_frame};
pub use frame::FrameElement;
pub use language::ArtifactLanguage;
pub use stack_trace::StackTrace;
