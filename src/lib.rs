//! SCR Overhead
//!
//! Estimates the checkpoint interval that minimizes total overhead for a
//! job running under the Scalable Checkpoint/Restart (SCR) library, from
//! the event log SCR writes to `<prefix>/.scr/log`.
//!
//! Two analytical models are available: Young (1976) and Daly (2004).
//!
//! ## Getting Started
//!
//! ```bash
//! scr-ckpt-overhead --prefix /p/lustre/myjob --stats
//! ```
//!
//! Or from Rust:
//!
//! ```ignore
//! use scr_overhead::commands::run_analysis;
//! use scr_overhead::model::Model;
//!
//! let analysis = run_analysis(Path::new(".scr/log"), Model::Daly)?;
//! println!("{}", analysis.estimate.overhead_percent);
//! ```

pub mod aggregator;
pub mod commands;
pub mod model;
pub mod output;
pub mod parser;
pub mod utils;
