//! Live instrument data model.
//!
//! Instruments, the locations they attach to, their throttles and the
//! commands that batch them for agents.

pub mod command;
pub mod live_instrument;
pub mod location;
pub mod throttle;
pub mod variable;

// Re-export main types
pub use command::{CommandType, LiveInstrumentCommand};
pub use live_instrument::{
    InstrumentKind, LiveInstrument, LiveInstrumentType, MeterType, MetricValue, MetricValueType,
};
pub use location::{InstanceConnection, SourceLocation};
pub use throttle::{InstrumentThrottle, ThrottleStep};
pub use variable::VariableControl;
