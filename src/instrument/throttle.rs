//! Rate limits bounding how often an instrument fires.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Time window a throttle limit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThrottleStep {
    Second,
    Minute,
    Hour,
    Day,
}

impl ThrottleStep {
    pub fn as_duration(&self) -> Duration {
        match self {
            Self::Second => Duration::from_secs(1),
            Self::Minute => Duration::from_secs(60),
            Self::Hour => Duration::from_secs(60 * 60),
            Self::Day => Duration::from_secs(24 * 60 * 60),
        }
    }
}

/// At most `limit` executions per `step`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstrumentThrottle {
    pub limit: i32,
    pub step: ThrottleStep,
}

impl InstrumentThrottle {
    pub const DEFAULT: InstrumentThrottle = InstrumentThrottle {
        limit: 1,
        step: ThrottleStep::Second,
    };

    pub fn new(limit: i32, step: ThrottleStep) -> Self {
        Self { limit, step }
    }
}

impl Default for InstrumentThrottle {
    fn default() -> Self {
        Self::DEFAULT
    }
}
