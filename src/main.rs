//! SCR checkpoint overhead CLI
//!
//! Reads an SCR event log and prints the checkpoint overhead implied by the
//! optimal checkpoint interval, or a full breakdown with `--stats`.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use scr_overhead::commands::{execute_analyze, validate_args, AnalyzeArgs};
use scr_overhead::model::Model;
use scr_overhead::utils::config::PREFIX_ENV_VAR;

/// Estimate the optimum checkpoint interval from an SCR log
#[derive(Parser, Debug)]
#[command(name = "scr-ckpt-overhead")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Print stats for checkpoint cost and failure rate
    #[arg(long)]
    stats: bool,

    /// Model to compute optimum checkpoint interval
    #[arg(long, value_enum, default_value_t = Model::Daly)]
    model: Model,

    /// Prefix directory to look for the log file (<prefix>/.scr/log)
    #[arg(long, env = PREFIX_ENV_VAR)]
    prefix: Option<PathBuf>,

    /// Path to log file (overrides --prefix)
    #[arg(long)]
    logfile: Option<PathBuf>,

    /// Also write a JSON report to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging (stderr, so stdout stays machine-readable)
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = AnalyzeArgs {
        log_file: cli.logfile,
        prefix: cli.prefix,
        model: cli.model,
        print_stats: cli.stats,
        output_json: cli.json,
    };

    validate_args(&args)?;
    execute_analyze(args)?;

    Ok(())
}
