//! Aggregation of log entries into phase totals and cost metrics.
//!
//! This module transforms parsed log entries into:
//! - Per-category time totals and counts (phase state machine)
//! - Derived averages, MTTI and checkpoint cost

pub mod metrics;
pub mod phases;

// Re-export main types and functions
pub use metrics::{calculate_costs, calculate_mtti, CategoryCost, CostSummary};
pub use phases::{aggregate, CategoryTotals, Phase, PhaseAccumulator};
