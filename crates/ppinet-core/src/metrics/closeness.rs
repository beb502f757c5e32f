//! Closeness centrality.
//!
//! For a protein `u` that reaches `r - 1` other proteins (so `r` counts `u`
//! itself) with a total shortest-path distance `d`:
//!
//! ```text
//! closeness(u) = (r - 1) / d  ·  (r - 1) / (n - 1)
//! ```
//!
//! The first factor is the inverse mean distance to reachable proteins. The
//! second (Wasserman–Faust) scales it by the share of the graph `u` can reach,
//! so a protein in a small component does not outrank one in the main
//! component. A protein that reaches nothing scores 0.

use std::collections::VecDeque;

use tracing::instrument;

use super::{Scores, scores_by_protein};
use crate::graph::PpiGraph;

/// Compute closeness centrality for every protein.
#[must_use]
#[instrument(skip(g))]
#[allow(clippy::cast_precision_loss)]
pub fn closeness_centrality(g: &PpiGraph) -> Scores {
    let n = g.node_count();

    if n == 0 {
        return Scores::new();
    }

    let adj = g.adjacency();
    let mut values = vec![0.0; n];

    for (u, value) in values.iter_mut().enumerate() {
        let (reached, total) = bfs_distance_sum(&adj, u);
        if total > 0 && n > 1 {
            let others = (reached - 1) as f64;
            *value = (others / total as f64) * (others / (n - 1) as f64);
        }
    }

    scores_by_protein(g, &values)
}

/// BFS from `source`: number of nodes reached (including `source`) and the
/// sum of their distances.
fn bfs_distance_sum(adj: &[Vec<usize>], source: usize) -> (usize, usize) {
    let mut dist: Vec<Option<usize>> = vec![None; adj.len()];
    dist[source] = Some(0);

    let mut queue = VecDeque::from([source]);
    let mut reached = 0;
    let mut total = 0;

    while let Some(v) = queue.pop_front() {
        let Some(dv) = dist[v] else { continue };
        reached += 1;
        total += dv;
        for &w in &adj[v] {
            if dist[w].is_none() {
                dist[w] = Some(dv + 1);
                queue.push_back(w);
            }
        }
    }

    (reached, total)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
