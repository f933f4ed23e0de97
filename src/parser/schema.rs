//! Typed representation of a single SCR log line.
//!
//! Every field is optional: a line that matches nothing still yields
//! a valid (empty) entry.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Distinguishes state-transition markers from data-transfer lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// `event=...` line (START, COMPUTE_END, CHECKPOINT_START, ...)
    Event,

    /// `xfer=...` line (FETCH, FLUSH_SYNC, ...)
    Xfer,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Event => write!(f, "event"),
            EntryKind::Xfer => write!(f, "xfer"),
        }
    }
}

/// One parsed log line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Leading `YYYY-MM-DDTHH:MM:SS` prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntryKind>,

    /// Event or transfer name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Duration in seconds, present on completion lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_count: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_path: Option<String>,

    /// Quoted dataset name; may contain the field separator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Quoted free-form note; may contain the field separator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

impl LogEntry {
    /// Label as a string slice, if present
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// True if nothing on the line was recognized
    pub fn is_empty(&self) -> bool {
        *self == LogEntry::default()
    }
}
