//! The pass@k analysis pipeline: record loading, estimation,
//! aggregation, and reporting.

pub mod aggregate;
pub mod leaderboard;
pub mod metrics;
pub mod record;
pub mod report;
