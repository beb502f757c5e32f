//! Degree centrality.
//!
//! The degree of each protein divided by `n - 1`, the largest degree
//! possible in a simple graph on `n` nodes. A self-loop adds two to the
//! degree, so a looped protein can score above 1.0. A graph with a single
//! protein scores it 1.0.

use tracing::instrument;

use super::{Scores, scores_by_protein};
use crate::graph::PpiGraph;

/// Compute normalized degree centrality for every protein.
#[must_use]
#[instrument(skip(g))]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality(g: &PpiGraph) -> Scores {
    let n = g.node_count();

    if n == 0 {
        return Scores::new();
    }
    if n == 1 {
        return g.nodes().map(|p| (p.to_string(), 1.0)).collect();
    }

    let scale = 1.0 / (n - 1) as f64;
    let values: Vec<f64> = g.degrees().iter().map(|&d| d as f64 * scale).collect();

    scores_by_protein(g, &values)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
