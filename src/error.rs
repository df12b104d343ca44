//! Error taxonomy for the analysis pipeline.
//!
//! Every failure is local to one file or one estimator call; a
//! multi-file scan reports the error and moves on to the next file.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The record file (or directory) does not exist.
    #[error("file not found: {path:?}")]
    NotFound { path: PathBuf },

    /// A non-blank line in a record file is not a parseable JSON record.
    /// `line` is 1-based.
    #[error("malformed record at {path:?} line {line}: {source}")]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },

    /// Estimator called outside its domain. Never clamps silently.
    #[error("invalid pass@k arguments: n={n}, c={c}, k={k}")]
    InvalidArgument { n: usize, c: usize, k: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
