//! Basic graph statistics for the interaction graph.
//!
//! # Statistics Provided
//!
//! - **node_count**: Number of distinct proteins.
//! - **edge_count**: Number of distinct interactions, self-loops included.
//! - **self_loop_count**: Proteins recorded as interacting with themselves.
//! - **density**: `2 * edge_count / (node_count * (node_count - 1))` for an
//!   undirected graph. Zero for graphs with 0 or 1 node.
//! - **component_count**: Number of connected components. A value greater
//!   than 1 means the queried neighbourhood splits into disjoint subgraphs.
//! - **isolated_node_count**: Nodes with no edges at all.
//! - **max_degree**: Highest degree of any protein (self-loops count twice).

use petgraph::algo::connected_components;
use serde::Serialize;

use crate::graph::build::PpiGraph;

// ---------------------------------------------------------------------------
// GraphStats
// ---------------------------------------------------------------------------

/// Summary statistics for an interaction graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    /// Number of proteins (nodes).
    pub node_count: usize,
    /// Number of distinct interactions (edges).
    pub edge_count: usize,
    /// Number of self-loops.
    pub self_loop_count: usize,
    /// Undirected graph density.
    pub density: f64,
    /// Number of connected components.
    pub component_count: usize,
    /// Number of nodes with degree zero.
    pub isolated_node_count: usize,
    /// Maximum degree over all nodes.
    pub max_degree: usize,
}

impl GraphStats {
    /// Compute statistics from a [`PpiGraph`].
    #[must_use]
    pub fn from_graph(g: &PpiGraph) -> Self {
        let node_count = g.node_count();
        let edge_count = g.edge_count();

        let degrees = g.degrees();

        Self {
            node_count,
            edge_count,
            self_loop_count: g.self_loop_count(),
            density: compute_density(node_count, edge_count),
            component_count: connected_components(&g.graph),
            isolated_node_count: degrees.iter().filter(|&&d| d == 0).count(),
            max_degree: degrees.iter().copied().max().unwrap_or(0),
        }
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

#[allow(clippy::cast_precision_loss)]
fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0;
    }
    let max_edges = (node_count * (node_count - 1)) as f64;
    2.0 * edge_count as f64 / max_edges
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
