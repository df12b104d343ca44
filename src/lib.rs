//! Pass@k metrics for LLM code-generation benchmark runs.
//!
//! This crate consumes line-delimited JSON record files produced by a
//! benchmark harness (one problem per line, each with its sampled code
//! candidates and their test verdicts), classifies each candidate as
//! correct or incorrect, estimates the unbiased pass@k probability per
//! problem, and rolls everything up into dataset-level summaries.

pub mod analysis;
pub mod config;
pub mod error;

pub use analysis::aggregate::{aggregate, DatasetSummary, ProblemSummary};
pub use analysis::metrics::estimate_pass_at_k;
pub use analysis::record::{load_records, CandidateResult, PassVerdict, ProblemRecord};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
