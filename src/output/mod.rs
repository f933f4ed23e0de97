//! Output writers for analysis results.
//!
//! This module handles:
//! - Text stats report and the single overhead line (stdout)
//! - Versioned JSON reports (disk)

pub mod json;
pub mod schema;
pub mod text;

// Re-export main functions
pub use json::{validate_output_path, write_report};
pub use schema::Report;
pub use text::{render_overhead, render_stats};
