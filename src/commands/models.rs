//! Argument types for the analyze command and log path resolution.

use crate::model::Model;
use crate::utils::config::{LOG_FILE_NAME, SCR_DIR_NAME};
use std::path::{Path, PathBuf};

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Explicit log file path; overrides the prefix
    pub log_file: Option<PathBuf>,

    /// SCR prefix directory containing `.scr/log`
    pub prefix: Option<PathBuf>,

    /// Model used to compute the optimal interval
    pub model: Model,

    /// Print the full breakdown instead of just the overhead
    pub print_stats: bool,

    /// Also write a JSON report here
    pub output_json: Option<PathBuf>,
}

impl AnalyzeArgs {
    /// Resolve which log file to read
    ///
    /// **Public** - explicit log file, else `<prefix>/.scr/log`, else `./.scr/log`
    pub fn log_path(&self) -> PathBuf {
        resolve_log_path(self.log_file.as_deref(), self.prefix.as_deref())
    }
}

/// Resolve the log path from an explicit file and an optional prefix
///
/// **Public** - used by AnalyzeArgs::log_path and by library callers
pub fn resolve_log_path(log_file: Option<&Path>, prefix: Option<&Path>) -> PathBuf {
    if let Some(path) = log_file {
        return path.to_path_buf();
    }

    let relative = Path::new(SCR_DIR_NAME).join(LOG_FILE_NAME);
    match prefix {
        Some(dir) => dir.join(relative),
        None => relative,
    }
}
