//! Instrumentation events that carry parsed stack traces downstream.

pub mod live_event;

pub use live_event::{
    LiveBreakpointHit, LiveInstrumentEventType, LiveInstrumentRemoved, TrackedLiveEvent,
};
