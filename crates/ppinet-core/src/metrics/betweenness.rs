//! Betweenness centrality via Brandes' algorithm.
//!
//! # Overview
//!
//! Betweenness centrality measures how often a protein lies on shortest
//! paths between other pairs of proteins. High-betweenness proteins are
//! "bridges" between otherwise loosely connected parts of the network.
//!
//! # Algorithm
//!
//! We implement Brandes' algorithm (2001) for unweighted graphs:
//!
//! 1. For each source node `s`, run BFS to compute shortest-path counts
//!    and distances.
//! 2. Accumulate dependency scores in reverse BFS order (farthest nodes first).
//! 3. Sum the dependency scores across all source nodes.
//!
//! Complexity: O(V * E).
//!
//! # Normalization
//!
//! On an undirected graph every pair `(s, t)` is visited from both ends, so
//! the raw sums count each pair twice. Multiplying by `1 / ((n-1)(n-2))`
//! both undoes the double count and divides by the number of pairs not
//! involving the node, giving scores in `[0, 1]`. With two nodes or fewer no
//! node can be intermediate and every score is 0.

use std::collections::VecDeque;

use tracing::instrument;

use super::{Scores, scores_by_protein};
use crate::graph::PpiGraph;

/// Compute normalized betweenness centrality for every protein.
///
/// Disconnected nodes and nodes with no shortest paths through them receive
/// a score of 0.0.
#[must_use]
#[instrument(skip(g))]
#[allow(clippy::cast_precision_loss)]
pub fn betweenness_centrality(g: &PpiGraph) -> Scores {
    let n = g.node_count();

    if n == 0 {
        return Scores::new();
    }

    let adj = g.adjacency();

    // Node-indexed betweenness accumulator.
    let mut cb: Vec<f64> = vec![0.0; n];

    for s in 0..n {
        // Stack: nodes in order of discovery (farthest popped first).
        let mut stack: Vec<usize> = Vec::with_capacity(n);

        // predecessors[w] = nodes immediately preceding w on shortest paths from s.
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];

        // sigma[t]: number of shortest paths from s to t.
        let mut sigma: Vec<f64> = vec![0.0; n];
        sigma[s] = 1.0;

        // dist[t]: distance from s to t (None = unvisited).
        let mut dist: Vec<Option<usize>> = vec![None; n];
        dist[s] = Some(0);

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            stack.push(v);
            let Some(dv) = dist[v] else { continue };

            for &w in &adj[v] {
                // First visit to w?
                if dist[w].is_none() {
                    dist[w] = Some(dv + 1);
                    queue.push_back(w);
                }

                // Shortest path to w via v?
                if dist[w] == Some(dv + 1) {
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                }
            }
        }

        // Accumulate dependencies in reverse BFS order.
        let mut delta: Vec<f64> = vec![0.0; n];

        while let Some(w) = stack.pop() {
            for &v in &predecessors[w] {
                if sigma[w] > 0.0 {
                    delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
                }
            }
            if w != s {
                cb[w] += delta[w];
            }
        }
    }

    if n > 2 {
        let scale = 1.0 / ((n - 1) * (n - 2)) as f64;
        for x in &mut cb {
            *x *= scale;
        }
    }

    scores_by_protein(g, &cb)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, what: &str) {
        assert!(
            (actual - expected).abs() < 1e-10,
            "{what}: expected {expected}, got {actual}"
        );
    }

    #[test]
    fn empty_graph_returns_empty() {
        assert!(betweenness_centrality(&PpiGraph::default()).is_empty());
    }

    #[test]
    fn single_edge_all_zero() {
        let bc = betweenness_centrality(&PpiGraph::from_pairs([("A", "B")]));
        assert_close(bc["A"], 0.0, "A");
        assert_close(bc["B"], 0.0, "B");
    }

    #[test]
    fn linear_chain_middle_node_has_betweenness() {
        // A - B - C: B is on the only shortest path between A and C.
        let bc = betweenness_centrality(&PpiGraph::from_pairs([("A", "B"), ("B", "C")]));
        assert_close(bc["A"], 0.0, "A");
        assert_close(bc["B"], 1.0, "B");
        assert_close(bc["C"], 0.0, "C");
    }

    #[test]
    fn chain_of_four_betweenness() {
        // A - B - C - D
        // B is on A–C and A–D: 2 of 3 pairs not involving B.
        let bc = betweenness_centrality(&PpiGraph::from_pairs([
            ("A", "B"),
            ("B", "C"),
            ("C", "D"),
        ]));
        assert_close(bc["A"], 0.0, "A");
        assert_close(bc["B"], 2.0 / 3.0, "B");
        assert_close(bc["C"], 2.0 / 3.0, "C");
        assert_close(bc["D"], 0.0, "D");
    }

    #[test]
    fn star_center_is_on_every_path() {
        let bc = betweenness_centrality(&PpiGraph::from_pairs([
            ("A", "B"),
            ("A", "C"),
            ("A", "D"),
        ]));
        assert_close(bc["A"], 1.0, "A");
        for leaf in ["B", "C", "D"] {
            assert_close(bc[leaf], 0.0, leaf);
        }
    }

    #[test]
    fn square_splits_paths_evenly() {
        // A - B - D - C - A: each opposite pair has two shortest paths.
        let bc = betweenness_centrality(&PpiGraph::from_pairs([
            ("A", "B"),
            ("B", "D"),
            ("D", "C"),
            ("C", "A"),
        ]));
        // Each node sits on half of the one opposite pair not involving it:
        // 0.5 / C(3, 2) = 1/6.
        for id in ["A", "B", "C", "D"] {
            assert_close(bc[id], 1.0 / 6.0, id);
        }
    }

    #[test]
    fn disconnected_components_no_cross_betweenness() {
        // A - B and C - D - E
        let bc = betweenness_centrality(&PpiGraph::from_pairs([
            ("A", "B"),
            ("C", "D"),
            ("D", "E"),
        ]));
        assert_close(bc["A"], 0.0, "A");
        assert_close(bc["B"], 0.0, "B");
        assert_close(bc["D"], 1.0 / 6.0, "D");
    }

    #[test]
    fn self_loop_does_not_change_paths() {
        let looped = betweenness_centrality(&PpiGraph::from_pairs([
            ("A", "A"),
            ("A", "B"),
            ("B", "C"),
        ]));
        assert_close(looped["A"], 0.0, "A");
        assert_close(looped["B"], 1.0, "B");
        assert_close(looped["C"], 0.0, "C");
    }
}
