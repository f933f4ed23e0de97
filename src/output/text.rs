//! Plain-text renderings of an analysis.
//!
//! The stats report is for people; the overhead line is for scripts that
//! want to set a checkpoint period from our output.

use crate::aggregator::{CategoryCost, CostSummary};
use crate::model::IntervalEstimate;

/// Render the human-readable breakdown, one labeled metric per line
///
/// **Public** - used by the analyze command in `--stats` mode
pub fn render_stats(summary: &CostSummary, estimate: &IntervalEstimate) -> String {
    let rows: [(&str, &CategoryCost); 6] = [
        ("Fetch", &summary.fetch),
        ("Rebuild", &summary.rebuild),
        ("Compute", &summary.compute),
        ("Checkpoint", &summary.checkpoint),
        ("Flush checkpoint", &summary.flush_checkpoint),
        ("Flush output", &summary.flush_output),
    ];

    let mut lines = Vec::with_capacity(rows.len() + 6);
    lines.push(format!("Starts: {}", summary.starts));
    for (label, cost) in rows {
        lines.push(format!(
            "{} time (s): {} (count={}, avg={})",
            label, cost.total, cost.count, cost.average
        ));
    }
    lines.push(format!("Checkpoint cost (s): {}", summary.checkpoint_cost));
    lines.push(format!("Total time (s): {}", summary.total_time));
    lines.push(format!("MTTI (s): {}", summary.mtti));
    lines.push(format!("Model: {}", estimate.model.title()));
    lines.push(format!("Checkpoint interval (s): {}", estimate.interval));
    lines.push(format!(
        "Target checkpoint overhead: {} %",
        estimate.overhead_percent
    ));

    lines.join("\n")
}

/// Render the overhead percentage alone, for machine consumption
///
/// **Public** - used by the analyze command without `--stats`
pub fn render_overhead(estimate: &IntervalEstimate) -> String {
    estimate.overhead_percent.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{aggregate, calculate_costs};
    use crate::model::{estimate, Model};
    use crate::parser::parse_entries;

    #[test]
    fn test_render_stats_lines() {
        let log = "event=START\n\
                   event=COMPUTE_START\n\
                   event=COMPUTE_END, secs=46.000000\n\
                   event=CHECKPOINT_START\n\
                   event=CHECKPOINT_END, secs=4.000000";
        let summary = calculate_costs(&aggregate(&parse_entries(log)));
        let est = estimate(Model::Young, summary.checkpoint_cost, summary.mtti);

        let text = render_stats(&summary, &est);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "Starts: 1");
        assert_eq!(lines[3], "Compute time (s): 46 (count=1, avg=46)");
        assert!(text.contains("MTTI (s): 50"));
        assert!(text.contains("Model: Young"));
        assert!(text.contains("Checkpoint interval (s): 20"));
        assert!(text.contains("Target checkpoint overhead: 20 %"));
    }

    #[test]
    fn test_render_overhead_is_single_number() {
        let est = estimate(Model::Daly, 120.0, 50.0);
        let line = render_overhead(&est);

        assert!(!line.contains('\n'));
        assert_eq!(line.parse::<f64>().unwrap(), 240.0);
    }
}
