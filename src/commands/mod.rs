//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod models;

// Re-export main command functions
pub use analyze::{execute_analyze, run_analysis, validate_args, Analysis};
pub use models::{resolve_log_path, AnalyzeArgs};
