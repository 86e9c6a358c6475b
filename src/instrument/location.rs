//! Source locations instruments are attached to.

use crate::utils::config::{META_COMMIT_ID, META_SERVICE, META_SERVICE_INSTANCE, WILDCARD_LINE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Position of an instrument in user code
///
/// A `line` of -1 is a wildcard matching any line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    pub source: String,

    #[serde(default = "wildcard_line")]
    pub line: i32,

    #[serde(default)]
    pub service: Option<String>,

    #[serde(default)]
    pub service_instance: Option<String>,

    #[serde(default)]
    pub commit_id: Option<String>,

    #[serde(default)]
    pub file_checksum: Option<String>,

    #[serde(default)]
    pub probe_id: Option<String>,
}

fn wildcard_line() -> i32 {
    WILDCARD_LINE
}

/// Identity of a live agent connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceConnection {
    pub instance_id: String,

    #[serde(default)]
    pub meta: HashMap<String, String>,
}

impl InstanceConnection {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            meta: HashMap::new(),
        }
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }
}

impl SourceLocation {
    /// Location matching any line of `source`
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            line: WILDCARD_LINE,
            service: None,
            service_instance: None,
            commit_id: None,
            file_checksum: None,
            probe_id: None,
        }
    }

    pub fn at_line(source: impl Into<String>, line: i32) -> Self {
        Self {
            line,
            ..Self::new(source)
        }
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    pub fn with_service_instance(mut self, service_instance: impl Into<String>) -> Self {
        self.service_instance = Some(service_instance.into());
        self
    }

    pub fn with_commit_id(mut self, commit_id: impl Into<String>) -> Self {
        self.commit_id = Some(commit_id.into());
        self
    }

    pub fn with_file_checksum(mut self, file_checksum: impl Into<String>) -> Self {
        self.file_checksum = Some(file_checksum.into());
        self
    }

    pub fn with_probe_id(mut self, probe_id: impl Into<String>) -> Self {
        self.probe_id = Some(probe_id.into());
        self
    }

    pub fn is_wildcard_line(&self) -> bool {
        self.line == WILDCARD_LINE
    }

    /// Whether two locations denote the same place
    ///
    /// Lines match when equal or when either side is the wildcard.
    /// Every other field must match exactly, absence included.
    pub fn is_same_location(&self, other: &SourceLocation) -> bool {
        let lines_match =
            self.line == other.line || self.is_wildcard_line() || other.is_wildcard_line();

        self.source == other.source
            && lines_match
            && self.service == other.service
            && self.service_instance == other.service_instance
            && self.commit_id == other.commit_id
            && self.file_checksum == other.file_checksum
            && self.probe_id == other.probe_id
    }

    /// Whether this location applies to a live connection
    ///
    /// Unset fields match any connection. A set field must equal the
    /// connection's attribute: service, instance and commit come from its
    /// meta, the probe id is the connection's instance id.
    pub fn matches_connection(&self, connection: &InstanceConnection) -> bool {
        fn field_matches(expected: &Option<String>, actual: Option<&String>) -> bool {
            expected.as_ref().map_or(true, |value| Some(value) == actual)
        }

        field_matches(&self.service, connection.meta.get(META_SERVICE))
            && field_matches(&self.service_instance, connection.meta.get(META_SERVICE_INSTANCE))
            && field_matches(&self.commit_id, connection.meta.get(META_COMMIT_ID))
            && field_matches(&self.probe_id, Some(&connection.instance_id))
    }
}
