//! SCR log parsing and entry schema.
//!
//! This module handles:
//! - Parsing raw log lines into typed entries
//! - Reading whole log files in order
//! - Defining the entry schema

pub mod schema;
pub mod scr_log;

// Re-export main types
pub use schema::{EntryKind, LogEntry};
pub use scr_log::{parse_entries, parse_line, read_log, timestamp_span};
