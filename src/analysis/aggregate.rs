//! Roll-up from per-problem records to dataset-level pass@k.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::analysis::metrics::estimate_pass_at_k;
use crate::analysis::record::ProblemRecord;
use crate::error::AnalysisError;

/// Per-problem diagnostic detail. Immutable once computed.
#[derive(Debug, Clone, Serialize)]
pub struct ProblemSummary {
    pub name: String,
    pub n_samples: usize,
    pub n_correct: usize,
    pub pass_rate: f64,
}

/// Dataset-level summary: averaged pass@k per requested k, plus the
/// per-problem detail in original encounter order.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub pass_at_k: BTreeMap<usize, f64>,
    pub total_problems: usize,
    pub problems: Vec<ProblemSummary>,
}

impl DatasetSummary {
    /// Problems sorted ascending by pass rate. The sort is stable, so
    /// ties keep their original encounter order.
    pub fn by_pass_rate(&self) -> Vec<&ProblemSummary> {
        let mut sorted: Vec<&ProblemSummary> = self.problems.iter().collect();
        sorted.sort_by(|a, b| a.pass_rate.total_cmp(&b.pass_rate));
        sorted
    }

    /// The first `limit` problems with a 0% pass rate, in original
    /// encounter order.
    pub fn hardest(&self, limit: usize) -> Vec<&ProblemSummary> {
        self.problems
            .iter()
            .filter(|p| p.pass_rate == 0.0)
            .take(limit)
            .collect()
    }
}

/// Compute the dataset summary for a set of problems and k values.
///
/// For each k, only problems with at least k samples contribute an
/// estimate; problems with fewer are excluded from that k's mean, not
/// scored as zero. When no problem qualifies for a k, its summary
/// value is 0.0. Note the exclusion skews the mean toward problems
/// with enough samples when sample counts vary across the set; this
/// matches the historical behavior on purpose.
///
/// Rejects k == 0 with `InvalidArgument`. Duplicate k values collapse
/// into one entry. Pure function of its inputs.
pub fn aggregate(
    problems: &[ProblemRecord],
    k_values: &[usize],
) -> Result<DatasetSummary, AnalysisError> {
    if let Some(&k) = k_values.iter().find(|&&k| k == 0) {
        return Err(AnalysisError::InvalidArgument { n: 0, c: 0, k });
    }

    let mut collected: BTreeMap<usize, Vec<f64>> =
        k_values.iter().map(|&k| (k, Vec::new())).collect();
    let mut summaries = Vec::with_capacity(problems.len());

    for problem in problems {
        let n = problem.n_samples();
        let c = problem.n_correct();

        for (&k, values) in collected.iter_mut() {
            if n >= k {
                values.push(estimate_pass_at_k(n, c, k)?);
            }
        }

        summaries.push(ProblemSummary {
            name: problem.name.clone(),
            n_samples: n,
            n_correct: c,
            pass_rate: if n > 0 { c as f64 / n as f64 } else { 0.0 },
        });
    }

    let pass_at_k = collected
        .into_iter()
        .map(|(k, values)| {
            let mean = if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            };
            (k, mean)
        })
        .collect();

    Ok(DatasetSummary {
        pass_at_k,
        total_problems: problems.len(),
        problems: summaries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn problem(json: &str) -> ProblemRecord {
        serde_json::from_str(json).unwrap()
    }

    fn two_problem_set() -> Vec<ProblemRecord> {
        // A: 4 candidates, 3 correct. B: 2 candidates, 0 correct.
        vec![
            problem(
                r#"{"name": "A", "code_candidates": [
                    {"passed_case": "Pass"},
                    {"passed_case": "Pass"},
                    {"passed_case": [true]},
                    {"passed_case": []}
                ]}"#,
            ),
            problem(
                r#"{"name": "B", "code_candidates": [
                    {"passed_case": []},
                    {"passed_case": "Fail"}
                ]}"#,
            ),
        ]
    }

    #[test]
    fn test_two_problem_pass_at_one() {
        let summary = aggregate(&two_problem_set(), &[1]).unwrap();
        assert_eq!(summary.total_problems, 2);
        // (0.75 + 0.0) / 2
        assert!((summary.pass_at_k[&1] - 0.375).abs() < EPS);
        assert_eq!(summary.problems[0].n_correct, 3);
        assert_eq!(summary.problems[1].n_correct, 0);
    }

    #[test]
    fn test_short_problems_excluded_not_zeroed() {
        // Every problem has exactly one sample: pass@5 has no
        // contributors and defaults to 0.0, while pass@1 is populated.
        let problems = vec![
            problem(r#"{"name": "a", "code_candidates": [{"passed_case": "Pass"}]}"#),
            problem(r#"{"name": "b", "code_candidates": [{"passed_case": []}]}"#),
        ];
        let summary = aggregate(&problems, &[1, 5]).unwrap();
        assert!((summary.pass_at_k[&1] - 0.5).abs() < EPS);
        assert_eq!(summary.pass_at_k[&5], 0.0);
    }

    #[test]
    fn test_partial_exclusion_biases_mean() {
        // Only A has >= 3 samples, so pass@3 averages over A alone
        // (with n=4, c=3, n-c < 3 makes it exactly 1.0).
        let summary = aggregate(&two_problem_set(), &[3]).unwrap();
        assert_eq!(summary.pass_at_k[&3], 1.0);
    }

    #[test]
    fn test_empty_input() {
        let summary = aggregate(&[], &[1, 5]).unwrap();
        assert_eq!(summary.total_problems, 0);
        assert_eq!(summary.pass_at_k[&1], 0.0);
        assert_eq!(summary.pass_at_k[&5], 0.0);
        assert!(summary.problems.is_empty());
    }

    #[test]
    fn test_zero_k_rejected() {
        let err = aggregate(&[], &[0]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidArgument { k: 0, .. }));
    }

    #[test]
    fn test_duplicate_k_collapses() {
        let summary = aggregate(&two_problem_set(), &[1, 1]).unwrap();
        assert_eq!(summary.pass_at_k.len(), 1);
        assert!((summary.pass_at_k[&1] - 0.375).abs() < EPS);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let problems = two_problem_set();
        let first = aggregate(&problems, &[1, 2]).unwrap();
        let second = aggregate(&problems, &[1, 2]).unwrap();
        assert_eq!(first.pass_at_k, second.pass_at_k);
        assert_eq!(first.total_problems, second.total_problems);
    }

    #[test]
    fn test_zero_sample_problem_has_zero_rate() {
        let problems = vec![problem(r#"{"name": "empty", "code_candidates": []}"#)];
        let summary = aggregate(&problems, &[1]).unwrap();
        assert_eq!(summary.problems[0].pass_rate, 0.0);
        // n=0 < k=1, so it contributes nothing.
        assert_eq!(summary.pass_at_k[&1], 0.0);
    }

    #[test]
    fn test_by_pass_rate_stable_ascending() {
        let problems = vec![
            problem(r#"{"name": "hard1", "code_candidates": [{"passed_case": []}]}"#),
            problem(
                r#"{"name": "easy", "code_candidates": [{"passed_case": "Pass"}]}"#,
            ),
            problem(r#"{"name": "hard2", "code_candidates": [{"passed_case": []}]}"#),
        ];
        let summary = aggregate(&problems, &[1]).unwrap();
        let sorted = summary.by_pass_rate();
        let names: Vec<&str> = sorted.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["hard1", "hard2", "easy"]);
    }

    #[test]
    fn test_hardest_encounter_order_and_limit() {
        let problems = vec![
            problem(r#"{"name": "z", "code_candidates": [{"passed_case": []}]}"#),
            problem(r#"{"name": "m", "code_candidates": [{"passed_case": "Pass"}]}"#),
            problem(r#"{"name": "a", "code_candidates": [{"passed_case": []}]}"#),
            problem(r#"{"name": "b", "code_candidates": [{"passed_case": []}]}"#),
        ];
        let summary = aggregate(&problems, &[1]).unwrap();
        let hardest = summary.hardest(2);
        let names: Vec<&str> = hardest.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
    }
}
