//! Live instruments: breakpoints, logs, meters and spans.
//!
//! All four kinds share one set of fields (location, condition, hit
//! limit, throttle, lifecycle flags). What differs per kind lives in
//! `InstrumentKind`, and the interchange `type` tag is produced from that
//! variant, so an instrument's tag can never disagree with its payload.

use super::location::SourceLocation;
use super::throttle::InstrumentThrottle;
use super::variable::VariableControl;
use crate::utils::config::{DEFAULT_HIT_LIMIT, UNLIMITED_HITS};
use crate::utils::error::CodecError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Tag naming an instrument kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiveInstrumentType {
    Breakpoint,
    Log,
    Meter,
    Span,
}

impl LiveInstrumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakpoint => "BREAKPOINT",
            Self::Log => "LOG",
            Self::Meter => "METER",
            Self::Span => "SPAN",
        }
    }
}

impl fmt::Display for LiveInstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LiveInstrumentType {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BREAKPOINT" => Ok(Self::Breakpoint),
            "LOG" => Ok(Self::Log),
            "METER" => Ok(Self::Meter),
            "SPAN" => Ok(Self::Span),
            _ => Err(CodecError::UnknownVariant {
                kind: "instrument type",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeterType {
    Count,
    Gauge,
    Histogram,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricValueType {
    Number,
    NumberExpression,
    Value,
    ValueExpression,
}

/// What a meter records each time it fires
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValue {
    pub value_type: MetricValueType,
    pub value: String,
}

/// Kind-specific payload of an instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentKind {
    #[serde(rename_all = "camelCase")]
    Breakpoint {
        #[serde(default)]
        variable_control: Option<VariableControl>,
    },
    #[serde(rename_all = "camelCase")]
    Log {
        #[serde(default)]
        log_format: String,
        #[serde(default)]
        log_arguments: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Meter {
        meter_type: MeterType,
        #[serde(default)]
        metric_value: Option<MetricValue>,
    },
    #[serde(rename_all = "camelCase")]
    Span {
        #[serde(default)]
        operation_name: String,
    },
}

impl InstrumentKind {
    pub fn instrument_type(&self) -> LiveInstrumentType {
        match self {
            Self::Breakpoint { .. } => LiveInstrumentType::Breakpoint,
            Self::Log { .. } => LiveInstrumentType::Log,
            Self::Meter { .. } => LiveInstrumentType::Meter,
            Self::Span { .. } => LiveInstrumentType::Span,
        }
    }
}

/// A dynamically installed probe at a source location
///
/// `hit_limit` of -1 means unlimited; enforcing it is up to the agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveInstrument {
    #[serde(flatten)]
    pub kind: InstrumentKind,

    pub location: SourceLocation,

    #[serde(default)]
    pub condition: Option<String>,

    /// Epoch milliseconds after which the instrument is removed
    #[serde(default)]
    pub expires_at: Option<i64>,

    #[serde(default = "default_hit_limit")]
    pub hit_limit: i32,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub apply_immediately: bool,

    #[serde(default)]
    pub applied: bool,

    #[serde(default)]
    pub pending: bool,

    #[serde(default)]
    pub throttle: InstrumentThrottle,

    #[serde(default)]
    pub meta: HashMap<String, serde_json::Value>,
}

fn default_hit_limit() -> i32 {
    DEFAULT_HIT_LIMIT
}

impl LiveInstrument {
    /// Create an instrument with default shared fields
    pub fn new(kind: InstrumentKind, location: SourceLocation) -> Self {
        Self {
            kind,
            location,
            condition: None,
            expires_at: None,
            hit_limit: DEFAULT_HIT_LIMIT,
            id: None,
            apply_immediately: false,
            applied: false,
            pending: false,
            throttle: InstrumentThrottle::DEFAULT,
            meta: HashMap::new(),
        }
    }

    pub fn breakpoint(location: SourceLocation) -> Self {
        Self::new(
            InstrumentKind::Breakpoint {
                variable_control: None,
            },
            location,
        )
    }

    pub fn log(
        location: SourceLocation,
        log_format: impl Into<String>,
        log_arguments: Vec<String>,
    ) -> Self {
        Self::new(
            InstrumentKind::Log {
                log_format: log_format.into(),
                log_arguments,
            },
            location,
        )
    }

    pub fn meter(
        location: SourceLocation,
        meter_type: MeterType,
        metric_value: Option<MetricValue>,
    ) -> Self {
        Self::new(
            InstrumentKind::Meter {
                meter_type,
                metric_value,
            },
            location,
        )
    }

    pub fn span(location: SourceLocation, operation_name: impl Into<String>) -> Self {
        Self::new(
            InstrumentKind::Span {
                operation_name: operation_name.into(),
            },
            location,
        )
    }

    /// Kind tag, always derived from the payload
    pub fn instrument_type(&self) -> LiveInstrumentType {
        self.kind.instrument_type()
    }

    /// Variable capture limits, for breakpoints that set them
    pub fn variable_control(&self) -> Option<&VariableControl> {
        match &self.kind {
            InstrumentKind::Breakpoint { variable_control } => variable_control.as_ref(),
            _ => None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn with_expires_at(mut self, expires_at: i64) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn with_hit_limit(mut self, hit_limit: i32) -> Self {
        self.hit_limit = hit_limit;
        self
    }

    pub fn with_throttle(mut self, throttle: InstrumentThrottle) -> Self {
        self.throttle = throttle;
        self
    }

    pub fn with_apply_immediately(mut self, apply_immediately: bool) -> Self {
        self.apply_immediately = apply_immediately;
        self
    }

    pub fn with_meta(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Whether the hit limit is the unlimited marker
    pub fn is_unlimited(&self) -> bool {
        self.hit_limit == UNLIMITED_HITS
    }

    /// Whether the expiry, if any, is at or before `now_millis`
    pub fn is_expired(&self, now_millis: i64) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_follows_variant() {
        let location = SourceLocation::at_line("A.java", 3);
        let cases = [
            (LiveInstrument::breakpoint(location.clone()), LiveInstrumentType::Breakpoint),
            (
                LiveInstrument::log(location.clone(), "x={}", vec!["x".into()]),
                LiveInstrumentType::Log,
            ),
            (
                LiveInstrument::meter(location.clone(), MeterType::Count, None),
                LiveInstrumentType::Meter,
            ),
            (LiveInstrument::span(location, "op"), LiveInstrumentType::Span),
        ];
        for (instrument, expected) in cases {
            assert_eq!(instrument.instrument_type(), expected);
        }
    }

    #[test]
    fn test_type_names() {
        assert_eq!("span".parse::<LiveInstrumentType>().unwrap(), LiveInstrumentType::Span);
        assert_eq!(LiveInstrumentType::Meter.to_string(), "METER");
        assert!("PROFILER".parse::<LiveInstrumentType>().is_err());
    }

    #[test]
    fn test_expiry_and_unlimited() {
        let bp = LiveInstrument::breakpoint(SourceLocation::new("a.py")).with_expires_at(1_000);
        assert!(bp.is_expired(1_000));
        assert!(!bp.is_expired(999));
        assert!(!bp.is_unlimited());
        assert!(bp.with_hit_limit(-1).is_unlimited());
    }

    #[test]
    fn test_variable_control_only_on_breakpoints() {
        let control = VariableControl {
            max_object_depth: Some(3),
            ..Default::default()
        };
        let mut bp = LiveInstrument::breakpoint(SourceLocation::new("a.py"));
        bp.kind = InstrumentKind::Breakpoint {
            variable_control: Some(control.clone()),
        };
        assert_eq!(bp.variable_control(), Some(&control));
        let span = LiveInstrument::span(SourceLocation::new("a.py"), "op");
        assert_eq!(span.variable_control(), None);
    }
}
