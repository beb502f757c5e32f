//! Recoverable algorithm failures.

/// Sentinel text shown in place of scores for a metric that failed to converge.
pub const CONVERGENCE_FAILED: &str = "Convergence failed - Unable to compute";

/// Power iteration did not settle within its iteration budget.
///
/// Carried in the `Err` arm of a [`crate::metrics::CentralityMapping`]. It is
/// never propagated past the centrality engine: the other metrics are still
/// computed and returned.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("Convergence failed - Unable to compute")]
pub struct ConvergenceFailure {
    /// Iterations performed before giving up.
    pub iterations: usize,
    /// Tolerance that was not reached.
    pub tolerance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_sentinel() {
        let err = ConvergenceFailure {
            iterations: 500,
            tolerance: 1e-6,
        };
        assert_eq!(err.to_string(), CONVERGENCE_FAILED);
    }
}
