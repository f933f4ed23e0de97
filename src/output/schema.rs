//! Output JSON schema definitions for analysis reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::CostSummary;
use crate::model::IntervalEstimate;
use crate::utils::config::SCHEMA_VERSION;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Log file that was analyzed
    pub log_file: String,

    /// Number of lines parsed
    pub entries: usize,

    /// Earliest timestamp in the log
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_timestamp: Option<String>,

    /// Latest timestamp in the log
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_timestamp: Option<String>,

    /// Per-category costs, MTTI and checkpoint cost
    pub summary: CostSummary,

    /// Chosen model's interval and overhead
    pub estimate: IntervalEstimate,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

impl Report {
    /// Assemble a report for the current time
    ///
    /// **Public** - used by the analyze command
    pub fn new(
        log_file: &Path,
        entries: usize,
        span: Option<(NaiveDateTime, NaiveDateTime)>,
        summary: CostSummary,
        estimate: IntervalEstimate,
    ) -> Self {
        let (first_timestamp, last_timestamp) = match span {
            Some((first, last)) => (
                Some(first.and_utc().to_rfc3339()),
                Some(last.and_utc().to_rfc3339()),
            ),
            None => (None, None),
        };

        Self {
            version: SCHEMA_VERSION.to_string(),
            log_file: log_file.display().to_string(),
            entries,
            first_timestamp,
            last_timestamp,
            summary,
            estimate,
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}
