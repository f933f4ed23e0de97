//! Fold an ordered sequence of log entries into per-phase time totals.
//!
//! The only state carried across entries is the current [`Phase`], which
//! decides whether a `FLUSH_SYNC` counts toward checkpoint cost or output.
//! Entry order therefore matters.

use crate::parser::LogEntry;
use log::{debug, warn};
use serde::Serialize;

/// Labels the aggregator understands
pub const LABEL_START: &str = "START";
pub const LABEL_FETCH: &str = "FETCH";
pub const LABEL_RESTART_SUCCESS: &str = "RESTART_SUCCESS";
pub const LABEL_RESTART_FAILURE: &str = "RESTART_FAILURE";
pub const LABEL_COMPUTE_START: &str = "COMPUTE_START";
pub const LABEL_COMPUTE_END: &str = "COMPUTE_END";
pub const LABEL_CHECKPOINT_START: &str = "CHECKPOINT_START";
pub const LABEL_CHECKPOINT_END: &str = "CHECKPOINT_END";
pub const LABEL_FLUSH_SYNC: &str = "FLUSH_SYNC";

/// Execution phase implied by the most recent `*_START` marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No phase marker seen yet
    #[default]
    Idle,
    Compute,
    Checkpoint,
}

/// Running time total and occurrence count for one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategoryTotals {
    /// Sum of `secs` over all entries in this category
    pub time: f64,

    /// Number of entries in this category
    pub count: u64,
}

impl CategoryTotals {
    /// Add one occurrence lasting `seconds`
    pub fn record(&mut self, seconds: f64) {
        self.time += seconds;
        self.count += 1;
    }

    /// Mean time per occurrence, or the raw total when nothing was counted
    pub fn average(&self) -> f64 {
        if self.count > 0 {
            self.time / self.count as f64
        } else {
            self.time
        }
    }
}

/// Per-category totals collected from one log
///
/// **Public** - returned from [`aggregate`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PhaseAccumulator {
    /// Number of job launches (`event=START`)
    pub starts: u64,

    /// Restart fetches from the parallel file system
    pub fetch: CategoryTotals,

    /// Restart rebuilds, successful or not
    pub rebuild: CategoryTotals,

    /// Completed compute phases
    pub compute: CategoryTotals,

    /// Completed checkpoint phases
    pub checkpoint: CategoryTotals,

    /// Flushes that happened inside a checkpoint phase
    pub flush_checkpoint: CategoryTotals,

    /// Flushes outside any checkpoint phase (output data)
    pub flush_output: CategoryTotals,

    /// Phase in effect after the last entry
    pub phase: Phase,
}

impl PhaseAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one entry to the running totals
    ///
    /// **Public** - a single step of the fold performed by [`aggregate`]
    pub fn apply(&mut self, entry: &LogEntry) {
        let Some(label) = entry.label() else {
            return;
        };

        match label {
            LABEL_START => self.starts += 1,
            LABEL_FETCH => self.fetch.record(duration_of(entry, label)),
            LABEL_RESTART_SUCCESS | LABEL_RESTART_FAILURE => {
                self.rebuild.record(duration_of(entry, label))
            }
            LABEL_COMPUTE_START => self.phase = Phase::Compute,
            LABEL_COMPUTE_END => self.compute.record(duration_of(entry, label)),
            LABEL_CHECKPOINT_START => self.phase = Phase::Checkpoint,
            LABEL_CHECKPOINT_END => self.checkpoint.record(duration_of(entry, label)),
            LABEL_FLUSH_SYNC => {
                let seconds = duration_of(entry, label);
                if self.phase == Phase::Checkpoint {
                    self.flush_checkpoint.record(seconds);
                } else {
                    self.flush_output.record(seconds);
                }
            }
            _ => {}
        }
    }

    /// Sum of all six category totals
    pub fn total_time(&self) -> f64 {
        self.categories().iter().map(|c| c.time).sum()
    }

    /// All six categories, in report order
    pub fn categories(&self) -> [CategoryTotals; 6] {
        [
            self.fetch,
            self.rebuild,
            self.compute,
            self.checkpoint,
            self.flush_checkpoint,
            self.flush_output,
        ]
    }
}

/// Duration carried by an entry; a missing `secs` counts as zero
///
/// **Private** - internal helper for PhaseAccumulator::apply
fn duration_of(entry: &LogEntry, label: &str) -> f64 {
    entry.seconds.unwrap_or_else(|| {
        warn!("{} entry has no secs field, counting it as 0s", label);
        0.0
    })
}

/// Fold entries, in order, into per-category totals
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `entries` - Parsed log entries in file order
///
/// # Returns
/// Accumulated totals; all zero for an empty log
pub fn aggregate(entries: &[LogEntry]) -> PhaseAccumulator {
    debug!("Aggregating {} log entries", entries.len());

    let acc = entries.iter().fold(PhaseAccumulator::new(), |mut acc, entry| {
        acc.apply(entry);
        acc
    });

    debug!(
        "Aggregated {} starts, {} compute phases, {} checkpoints",
        acc.starts, acc.compute.count, acc.checkpoint.count
    );

    acc
}
