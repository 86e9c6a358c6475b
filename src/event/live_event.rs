//! Breakpoint hits and instrument removals.

use crate::instrument::{LiveInstrument, LiveInstrumentType};
use crate::trace::StackTrace;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiveInstrumentEventType {
    BreakpointHit,
    BreakpointRemoved,
    LogRemoved,
    MeterRemoved,
    SpanRemoved,
}

impl LiveInstrumentEventType {
    /// Removal event for an instrument kind
    pub fn removed(instrument_type: LiveInstrumentType) -> Self {
        match instrument_type {
            LiveInstrumentType::Breakpoint => Self::BreakpointRemoved,
            LiveInstrumentType::Log => Self::LogRemoved,
            LiveInstrumentType::Meter => Self::MeterRemoved,
            LiveInstrumentType::Span => Self::SpanRemoved,
        }
    }
}

/// An event with a kind and a point in time
pub trait TrackedLiveEvent {
    fn event_type(&self) -> LiveInstrumentEventType;

    fn occurred_at(&self) -> DateTime<Utc>;
}

/// A breakpoint fired and captured the stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveBreakpointHit {
    pub breakpoint_id: String,
    pub trace_id: String,
    pub occurred_at: DateTime<Utc>,
    pub service_instance: String,
    pub service: String,
    pub stack_trace: StackTrace,
}

impl TrackedLiveEvent for LiveBreakpointHit {
    fn event_type(&self) -> LiveInstrumentEventType {
        LiveInstrumentEventType::BreakpointHit
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// An instrument was removed, optionally because of an error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveInstrumentRemoved {
    pub live_instrument: LiveInstrument,
    pub occurred_at: DateTime<Utc>,

    #[serde(default)]
    pub cause: Option<StackTrace>,
}

impl LiveInstrumentRemoved {
    pub fn new(live_instrument: LiveInstrument, occurred_at: DateTime<Utc>) -> Self {
        Self {
            live_instrument,
            occurred_at,
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: StackTrace) -> Self {
        self.cause = Some(cause);
        self
    }
}

impl TrackedLiveEvent for LiveInstrumentRemoved {
    /// Derived from the removed instrument's kind
    fn event_type(&self) -> LiveInstrumentEventType {
        LiveInstrumentEventType::removed(self.live_instrument.instrument_type())
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
