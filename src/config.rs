//! Analysis defaults and well-known paths.

use std::path::PathBuf;

/// Default benchmark log directory.
pub const LOG_DIR: &str = "./log";

/// Default directory holding per-run record files.
pub const RECORD_DIR: &str = "./log/record";

/// Default k values for pass@k.
pub const DEFAULT_K_VALUES: &[usize] = &[1, 5];

/// How many 0%-pass-rate problems to list per file by default.
pub const DEFAULT_HARDEST_LIMIT: usize = 5;

/// Per-run analysis configuration. Passed by reference into the
/// loader/aggregator/report layers; there is no process-wide state, so
/// repeated or parallel runs cannot interfere with each other.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Directory scanned for record files.
    pub record_dir: PathBuf,
    /// k values to estimate, e.g. `[1, 5]`.
    pub k_values: Vec<usize>,
    /// Maximum number of hardest-problem names to report per file.
    pub hardest_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            record_dir: PathBuf::from(RECORD_DIR),
            k_values: DEFAULT_K_VALUES.to_vec(),
            hardest_limit: DEFAULT_HARDEST_LIMIT,
        }
    }
}
