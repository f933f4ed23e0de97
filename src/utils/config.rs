//! Configuration and constants for the CLI.

/// Directory SCR creates under the job prefix
pub const SCR_DIR_NAME: &str = ".scr";

/// Name of the event log inside the SCR directory
pub const LOG_FILE_NAME: &str = "log";

/// Environment variable SCR uses for the job prefix directory
pub const PREFIX_ENV_VAR: &str = "SCR_PREFIX";

/// Separator between simple `key=value` fields on a log line
pub const FIELD_SEPARATOR: &str = ", ";

/// Format of the timestamp that leads every log line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";
