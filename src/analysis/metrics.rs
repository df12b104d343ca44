//! Unbiased pass@k estimation.

use crate::error::AnalysisError;

/// Estimate pass@k for a single problem.
/// n = total samples, c = correct samples, k = attempts.
///
/// Formula: pass@k = 1 - C(n-c, k) / C(n, k)
/// Computed as: 1 - prod_{i=0..k-1} (n-c-i)/(n-i)
///
/// Fails fast with `InvalidArgument` when k == 0, k > n, or c > n.
/// Deterministic given (n, c, k); the factor product keeps every
/// intermediate in [0, 1], so it stays stable for n in the hundreds
/// and k up to n.
pub fn estimate_pass_at_k(n: usize, c: usize, k: usize) -> Result<f64, AnalysisError> {
    if k == 0 || k > n || c > n {
        return Err(AnalysisError::InvalidArgument { n, c, k });
    }
    // Fewer incorrect samples than k: no draw of k can be all-incorrect.
    if n - c < k {
        return Ok(1.0);
    }
    if c == 0 {
        return Ok(0.0);
    }
    let all_incorrect = (0..k).fold(1.0_f64, |acc, i| {
        acc * (n - c - i) as f64 / (n - i) as f64
    });
    Ok(1.0 - all_incorrect)
}
