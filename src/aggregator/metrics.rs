//! Derive per-category costs, MTTI and checkpoint cost from phase totals.
//!
//! Only single-level checkpointing is modeled. Fetch and rebuild time is
//! reported but kept out of the checkpoint cost: restart cost reaches the
//! models only through the total run time that feeds MTTI.

use super::phases::{CategoryTotals, PhaseAccumulator};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Total, count and mean time for one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryCost {
    pub total: f64,
    pub count: u64,

    /// `total / count`, or `total` when `count` is zero
    pub average: f64,
}

impl From<CategoryTotals> for CategoryCost {
    fn from(totals: CategoryTotals) -> Self {
        Self {
            total: totals.time,
            count: totals.count,
            average: totals.average(),
        }
    }
}

/// Cost figures derived from one log
///
/// **Public** - input to the interval models and the stats report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Number of job launches
    pub starts: u64,

    pub fetch: CategoryCost,
    pub rebuild: CategoryCost,
    pub compute: CategoryCost,
    pub checkpoint: CategoryCost,
    pub flush_checkpoint: CategoryCost,
    pub flush_output: CategoryCost,

    /// Sum of all category totals
    pub total_time: f64,

    /// Mean time to interruption: total time per job launch
    pub mtti: f64,

    /// Checkpoint plus in-checkpoint flush time, per checkpoint
    pub checkpoint_cost: f64,
}

/// Calculate the cost summary from accumulated totals
///
/// **Public** - main entry point for cost derivation
pub fn calculate_costs(acc: &PhaseAccumulator) -> CostSummary {
    let total_time = acc.total_time();

    if acc.starts == 0 {
        warn!("Log contains no START events, MTTI is reported as 0");
    }

    let summary = CostSummary {
        starts: acc.starts,
        fetch: acc.fetch.into(),
        rebuild: acc.rebuild.into(),
        compute: acc.compute.into(),
        checkpoint: acc.checkpoint.into(),
        flush_checkpoint: acc.flush_checkpoint.into(),
        flush_output: acc.flush_output.into(),
        total_time,
        mtti: calculate_mtti(total_time, acc.starts),
        checkpoint_cost: calculate_checkpoint_cost(acc),
    };

    debug!("Cost summary: {}", summary.summary());

    summary
}

/// Total run time divided by the number of launches, 0 with no launches
///
/// **Public** - exposed for callers that track totals themselves
pub fn calculate_mtti(total_time: f64, starts: u64) -> f64 {
    if starts > 0 {
        total_time / starts as f64
    } else {
        0.0
    }
}

/// Composite single-level checkpoint cost
///
/// **Private** - internal helper for calculate_costs
fn calculate_checkpoint_cost(acc: &PhaseAccumulator) -> f64 {
    let time = acc.checkpoint.time + acc.flush_checkpoint.time;
    if acc.checkpoint.count > 0 {
        time / acc.checkpoint.count as f64
    } else {
        time
    }
}

impl CostSummary {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Starts: {} | Total: {:.2}s | MTTI: {:.2}s | Checkpoint cost: {:.2}s",
            self.starts, self.total_time, self.mtti, self.checkpoint_cost
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::parser::parse_entries;

    #[test]
    fn test_checkpoint_cost_folds_in_checkpoint_flushes() {
        let log = "event=START\n\
                   event=CHECKPOINT_START\n\
                   event=CHECKPOINT_END, secs=3.000000\n\
                   xfer=FLUSH_SYNC, secs=5.000000\n\
                   event=CHECKPOINT_START\n\
                   event=CHECKPOINT_END, secs=1.000000";
        let summary = calculate_costs(&aggregate(&parse_entries(log)));

        assert_eq!(summary.checkpoint.average, 2.0);
        assert_eq!(summary.flush_checkpoint.total, 5.0);
        assert_eq!(summary.checkpoint_cost, 4.5);
    }

    #[test]
    fn test_restart_costs_excluded_from_checkpoint_cost() {
        let log = "event=START\n\
                   xfer=FETCH, secs=10.000000\n\
                   event=RESTART_SUCCESS, secs=6.000000\n\
                   event=CHECKPOINT_END, secs=2.000000";
        let summary = calculate_costs(&aggregate(&parse_entries(log)));

        assert_eq!(summary.checkpoint_cost, 2.0);
        assert_eq!(summary.total_time, 18.0);
        assert_eq!(summary.mtti, 18.0);
    }

    #[test]
    fn test_zero_counts_use_raw_totals() {
        let summary = calculate_costs(&PhaseAccumulator::default());
        assert_eq!(summary.checkpoint_cost, 0.0);
        assert_eq!(summary.mtti, 0.0);
        assert_eq!(summary.compute.average, 0.0);
    }

    #[test]
    fn test_mtti_without_starts_is_zero() {
        assert_eq!(calculate_mtti(100.0, 0), 0.0);
        assert_eq!(calculate_mtti(100.0, 4), 25.0);
    }
}
