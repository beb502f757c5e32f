//! Eigenvector centrality via power iteration.
//!
//! # Overview
//!
//! Eigenvector centrality scores proteins based on the idea that
//! interacting with high-scoring proteins contributes more to a protein's
//! score. It's the dominant eigenvector of the adjacency matrix.
//!
//! # Algorithm
//!
//! Power iteration on the shifted matrix `A + I`:
//!
//! 1. Initialize scores uniformly (summing to 1).
//! 2. For each node `v`: `score'(v) = score(v) + Σ score(u)` over neighbours `u`.
//! 3. Normalize the score vector to unit L2 norm.
//! 4. Stop when the L1 change is below `n * tolerance`, or give up after
//!    `max_iter` iterations.
//!
//! The identity shift has the same dominant eigenvector as `A` but keeps
//! bipartite graphs (paths, stars, trees) from oscillating between two
//! vectors.
//!
//! # Output
//!
//! `Ok(scores)` on convergence, otherwise `Err(ConvergenceFailure)`. Long
//! chains of interactions are the usual culprit: their two leading
//! eigenvalues are too close for the iteration to settle within 500 steps.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::{CentralityMapping, Scores, scores_by_protein};
use crate::error::ConvergenceFailure;
use crate::graph::PpiGraph;

/// Iteration budget for eigenvector centrality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EigenvectorConfig {
    /// Maximum number of iterations. Default: 500.
    pub max_iter: usize,
    /// Per-node absolute tolerance between successive iterates. Default: 1e-6.
    pub tolerance: f64,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self {
            max_iter: 500,
            tolerance: 1e-6,
        }
    }
}

/// Compute eigenvector centrality for every protein.
///
/// # Errors
///
/// Returns [`ConvergenceFailure`] when the power iteration has not settled
/// after `config.max_iter` iterations. An empty graph converges trivially.
#[instrument(skip(g, config))]
#[allow(clippy::cast_precision_loss)]
pub fn eigenvector_centrality(g: &PpiGraph, config: &EigenvectorConfig) -> CentralityMapping {
    let n = g.node_count();

    if n == 0 {
        return Ok(Scores::new());
    }

    let adj = g.adjacency();
    let threshold = n as f64 * config.tolerance;

    let mut scores: Vec<f64> = vec![1.0 / n as f64; n];

    for iter in 0..config.max_iter {
        // Start from the previous vector: the `I` in `A + I`.
        let mut next = scores.clone();

        for (v, nbrs) in adj.iter().enumerate() {
            for &w in nbrs {
                next[w] += scores[v];
            }
        }

        // Normalize to unit L2 norm.
        let norm: f64 = next.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for x in &mut next {
                *x /= norm;
            }
        }

        // Check convergence: L1 norm of the change.
        let diff: f64 = scores
            .iter()
            .zip(next.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();

        scores = next;

        if diff < threshold {
            debug!(iterations = iter + 1, "eigenvector centrality converged");
            return Ok(scores_by_protein(g, &scores));
        }
    }

    warn!(
        iterations = config.max_iter,
        tolerance = config.tolerance,
        "eigenvector centrality did not converge"
    );

    Err(ConvergenceFailure {
        iterations: config.max_iter,
        tolerance: config.tolerance,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
