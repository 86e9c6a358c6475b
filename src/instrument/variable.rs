//! Capture limits for breakpoint variables.

use serde::{Deserialize, Serialize};

/// Bounds on how much of the variable graph a breakpoint captures
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableControl {
    #[serde(default)]
    pub max_object_depth: Option<u32>,

    #[serde(default)]
    pub max_object_size: Option<u64>,

    #[serde(default)]
    pub max_collection_length: Option<u32>,
}
