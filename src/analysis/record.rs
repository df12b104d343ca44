//! Record file data model and loader.
//!
//! A record file is UTF-8 text with one JSON object per non-blank
//! line, each object describing one benchmark problem and the sampled
//! code candidates generated for it. The verdict encoding evolved
//! across dataset generations, so `passed_case` is dispatched
//! structurally rather than by a schema version flag.

use log::info;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::AnalysisError;

/// Per-test-case status labels that mean the candidate failed.
const FAILURE_LABELS: &[&str] = &["Timeout", "Exception", "execution error"];

/// The raw verdict attached to a candidate, covering every encoding
/// the log format has used:
///
/// - `Label` — a single final-verdict string; only `"Pass"` counts.
/// - `Cases` — a per-test-case sequence (booleans or status values);
///   only its emptiness matters for classification.
/// - `Other` — anything else; always classified incorrect.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PassVerdict {
    Label(String),
    Cases(Vec<Value>),
    Other(Value),
}

impl Default for PassVerdict {
    // A missing passed_case reads as an empty case list (incorrect).
    fn default() -> Self {
        PassVerdict::Cases(Vec::new())
    }
}

/// One sampled code completion's evaluation outcome for a problem.
///
/// `case_status`, when present, is an ordered list of per-test-case
/// outcome labels parallel to `passed_case`; only some dataset formats
/// emit it. Entries are kept as raw JSON values so that a non-string
/// entry parses fine and simply never matches a failure label.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateResult {
    #[serde(default)]
    pub passed_case: PassVerdict,
    #[serde(default)]
    pub case_status: Option<Vec<Value>>,
}

impl CandidateResult {
    /// Classify this candidate as correct or incorrect.
    ///
    /// Precedence: a `"Pass"` label wins regardless of `case_status`;
    /// a case list defers to `case_status` when one is present and
    /// non-empty (correct iff no failure label appears and the case
    /// list is non-empty), otherwise a non-empty case list alone means
    /// correct. Unrecognized shapes are incorrect, not errors — this
    /// permissive default is load-bearing for reproducing historical
    /// metrics.
    pub fn is_correct(&self) -> bool {
        match &self.passed_case {
            PassVerdict::Label(label) => label == "Pass",
            PassVerdict::Cases(cases) => match self.case_status.as_deref() {
                Some(statuses) if !statuses.is_empty() => {
                    let any_failure = statuses.iter().any(|s| {
                        s.as_str().is_some_and(|s| FAILURE_LABELS.contains(&s))
                    });
                    !any_failure && !cases.is_empty()
                }
                _ => !cases.is_empty(),
            },
            PassVerdict::Other(_) => false,
        }
    }
}

/// One benchmark problem's full sampling result.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemRecord {
    #[serde(default = "unknown_name")]
    pub name: String,
    #[serde(default)]
    pub code_candidates: Vec<CandidateResult>,
}

fn unknown_name() -> String {
    "unknown".to_string()
}

impl ProblemRecord {
    /// Total number of sampled candidates.
    pub fn n_samples(&self) -> usize {
        self.code_candidates.len()
    }

    /// Number of candidates classified correct.
    pub fn n_correct(&self) -> usize {
        self.code_candidates.iter().filter(|c| c.is_correct()).count()
    }
}

/// Load problem records from a line-delimited JSON file.
///
/// Blank lines are skipped. A missing file yields `NotFound`; a
/// non-blank line that is not a parseable record yields
/// `MalformedRecord` with its 1-based line number. Either error aborts
/// this file only.
pub fn load_records(path: &Path) -> Result<Vec<ProblemRecord>, AnalysisError> {
    if !path.exists() {
        return Err(AnalysisError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let mut problems = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: ProblemRecord =
            serde_json::from_str(line).map_err(|source| AnalysisError::MalformedRecord {
                path: path.to_path_buf(),
                line: idx + 1,
                source,
            })?;
        problems.push(record);
    }

    info!("Loaded {} problems from {:?}", problems.len(), path);
    Ok(problems)
}
