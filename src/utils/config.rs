//! Configuration and constants for parsing and the instrument model.

/// Current interchange schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Sentinel used when an exception type or message cannot be derived from the text
pub const NOT_AVAILABLE: &str = "n/a";

// Instrument defaults
pub const DEFAULT_HIT_LIMIT: i32 = 1;
pub const UNLIMITED_HITS: i32 = -1;
pub const WILDCARD_LINE: i32 = -1;

/// Method the agent's bytecode interceptor shows up as in captured JVM traces
pub const AGENT_INTERCEPTOR_METHOD: &str =
    "org.apache.skywalking.apm.agent.core.plugin.interceptor.enhance.InstMethodsInter.intercept";

/// Source path fragments belonging to agent libraries (interceptor plugins, debugger shims)
pub const AGENT_PATH_FRAGMENTS: &[&str] = &[
    "/skywalking/plugins/",
    "/nopdb/nopdb/",
    "/probe-python/ContextReceiver.py",
];

// Meta keys a live connection reports its identity under
pub const META_SERVICE: &str = "service";
pub const META_SERVICE_INSTANCE: &str = "service_instance";
pub const META_COMMIT_ID: &str = "commit_id";
