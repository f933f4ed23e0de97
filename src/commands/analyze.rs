//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Resolves and reads the SCR log
//! 2. Aggregates phase totals
//! 3. Derives costs and MTTI
//! 4. Estimates the optimal interval
//! 5. Writes outputs

use super::models::AnalyzeArgs;
use crate::aggregator::{aggregate, calculate_costs, CostSummary};
use crate::model::{estimate, IntervalEstimate, Model};
use crate::output::{render_overhead, render_stats, validate_output_path, write_report, Report};
use crate::parser::{read_log, timestamp_span};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Result of analyzing one log
///
/// **Public** - returned by [`run_analysis`] so callers can render it themselves
#[derive(Debug, Clone)]
pub struct Analysis {
    pub log_file: PathBuf,
    pub summary: CostSummary,
    pub estimate: IntervalEstimate,
    pub report: Report,
}

/// Read, aggregate and estimate without printing anything
///
/// **Public** - library entry point behind the CLI
///
/// # Errors
/// * The log file cannot be opened or read
pub fn run_analysis(log_file: &Path, model: Model) -> Result<Analysis> {
    info!("Step 1/3: Reading log {}", log_file.display());
    let entries = read_log(log_file)
        .with_context(|| format!("Failed to read SCR log {}", log_file.display()))?;

    info!("Step 2/3: Aggregating {} entries...", entries.len());
    let totals = aggregate(&entries);
    let summary = calculate_costs(&totals);
    info!("{}", summary.summary());

    info!("Step 3/3: Estimating interval with {} model...", model.title());
    let estimate = estimate(model, summary.checkpoint_cost, summary.mtti);
    debug!(
        "Interval {}s, overhead {}%",
        estimate.interval, estimate.overhead_percent
    );

    let report = Report::new(
        log_file,
        entries.len(),
        timestamp_span(&entries),
        summary.clone(),
        estimate,
    );

    Ok(Analysis {
        log_file: log_file.to_path_buf(),
        summary,
        estimate,
        report,
    })
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Missing or unreadable log file
/// * JSON report write failure
/// * Undefined overhead when only the number was requested
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    let log_file = args.log_path();
    let analysis = run_analysis(&log_file, args.model)?;

    if let Some(json_path) = &args.output_json {
        write_report(&analysis.report, json_path).context("Failed to write JSON report")?;
        info!("✓ Report written to: {}", json_path.display());
    }

    if args.print_stats {
        println!("{}", render_stats(&analysis.summary, &analysis.estimate));
        if !analysis.estimate.is_finite() {
            warn!("Checkpoint overhead is undefined: the optimal interval is zero");
        }
        return Ok(());
    }

    if !analysis.estimate.is_finite() {
        anyhow::bail!(
            "Checkpoint overhead is undefined for {} (checkpoint cost {}s, MTTI {}s)",
            log_file.display(),
            analysis.summary.checkpoint_cost,
            analysis.summary.mtti
        );
    }

    println!("{}", render_overhead(&analysis.estimate));

    Ok(())
}

/// Validate analyze arguments
///
/// **Public** - called before executing the command
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if let Some(log_file) = &args.log_file {
        if log_file.as_os_str().is_empty() {
            anyhow::bail!("Log file path cannot be empty");
        }
    }

    if let Some(json_path) = &args.output_json {
        validate_output_path(json_path).context("Invalid JSON report path")?;
    }

    Ok(())
}
