//! PageRank on the undirected interaction graph.
//!
//! # Overview
//!
//! PageRank scores a protein by the stationary probability that a damped
//! random walk over the interaction graph is standing on it.
//!
//! # Algorithm
//!
//! Standard power method, each undirected edge followed in both directions
//! (a self-loop once):
//!
//! ```text
//! PR(v) = (1 - d) / N + d * Σ PR(u) / deg(u)   for each neighbour u of v
//!                     + d * Σ PR(w) / N         for each dangling w
//! ```
//!
//! where `d` is the damping factor (default 0.85). Dangling (isolated)
//! nodes hand their rank out uniformly.
//!
//! Iteration stops when the L1 change between iterates drops below
//! `N * tolerance`. On an undirected graph the damped walk always converges
//! geometrically, so running out of iterations is logged but the last
//! iterate is still returned.

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use super::{Scores, scores_by_protein};
use crate::graph::PpiGraph;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for PageRank computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    /// Damping factor (probability of following a link vs teleporting).
    /// Default: 0.85.
    pub damping: f64,
    /// Per-node convergence threshold: stop when the L1 norm of the rank
    /// delta is below `tolerance * N`.
    /// Default: 1e-6.
    pub tolerance: f64,
    /// Maximum number of iterations.
    /// Default: 100.
    pub max_iter: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1e-6,
            max_iter: 100,
        }
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Result of a PageRank computation.
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// PageRank scores: protein symbol → score.
    pub scores: Scores,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether the algorithm converged within `max_iter`.
    pub converged: bool,
}

// ---------------------------------------------------------------------------
// PageRank
// ---------------------------------------------------------------------------

/// Compute PageRank for every protein.
#[must_use]
#[instrument(skip(g, config))]
#[allow(clippy::cast_precision_loss)]
pub fn pagerank(g: &PpiGraph, config: &PageRankConfig) -> PageRankResult {
    let n = g.node_count();

    if n == 0 {
        return PageRankResult {
            scores: Scores::new(),
            iterations: 0,
            converged: true,
        };
    }

    let adj = g.adjacency();
    let n_f64 = n as f64;
    let teleport = (1.0 - config.damping) / n_f64;

    // Initialize ranks uniformly.
    let mut ranks = vec![1.0 / n_f64; n];
    let mut new_ranks = vec![0.0_f64; n];

    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..config.max_iter {
        iterations += 1;

        let dangling: f64 = adj
            .iter()
            .zip(&ranks)
            .filter(|(nbrs, _)| nbrs.is_empty())
            .map(|(_, r)| r)
            .sum();
        let base = teleport + config.damping * dangling / n_f64;

        for r in &mut new_ranks {
            *r = base;
        }

        // Distribute rank from each node to its neighbours.
        for (v, nbrs) in adj.iter().enumerate() {
            if nbrs.is_empty() {
                continue;
            }
            let share = config.damping * ranks[v] / nbrs.len() as f64;
            for &w in nbrs {
                new_ranks[w] += share;
            }
        }

        // Check convergence: L1 norm of delta.
        let delta: f64 = ranks
            .iter()
            .zip(new_ranks.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();

        std::mem::swap(&mut ranks, &mut new_ranks);

        if delta < n_f64 * config.tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(
            iterations,
            tolerance = config.tolerance,
            "PageRank did not converge; returning last iterate"
        );
    }

    PageRankResult {
        scores: scores_by_protein(g, &ranks),
        iterations,
        converged,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
