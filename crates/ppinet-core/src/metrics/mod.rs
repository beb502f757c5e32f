//! Centrality metrics for the interaction graph.
//!
//! # Overview
//!
//! Five node-level measures, each answering a different question about a
//! protein's place in the network:
//!
//! - **Degree** (`degree`): What fraction of the other proteins does it
//!   interact with directly?
//! - **Betweenness** (`betweenness`): How often does it sit on a shortest
//!   path between two other proteins?
//! - **Closeness** (`closeness`): How near is it, on average, to the
//!   proteins it can reach?
//! - **PageRank** (`pagerank`): How likely is a damped random walk to be on
//!   it?
//! - **Eigenvector** (`eigenvector`): Is it connected to other central
//!   proteins?
//!
//! # Failure policy
//!
//! Eigenvector centrality is the only metric allowed to fail: when power
//! iteration does not settle within its budget the mapping is
//! `Err(ConvergenceFailure)`. The other four are always computed.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ppinet_core::graph::PpiGraph;
//! use ppinet_core::metrics::{compute_centralities, Metric};
//!
//! let g = PpiGraph::from_pairs([("A", "B"), ("B", "C")]);
//! for (metric, mapping) in compute_centralities(&g) {
//!     println!("{metric}: {mapping:?}");
//! }
//! ```

pub mod betweenness;
pub mod closeness;
pub mod degree;
pub mod eigenvector;
pub mod pagerank;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::error::ConvergenceFailure;
use crate::graph::PpiGraph;

pub use eigenvector::EigenvectorConfig;
pub use pagerank::PageRankConfig;

/// Per-protein score for one metric.
pub type Scores = HashMap<String, f64>;

/// Scores for one metric, or the reason they could not be computed.
pub type CentralityMapping = Result<Scores, ConvergenceFailure>;

// ---------------------------------------------------------------------------
// Metric
// ---------------------------------------------------------------------------

/// The centrality measures computed for every graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Metric {
    Degree,
    Betweenness,
    Closeness,
    PageRank,
    Eigenvector,
}

impl Metric {
    /// Every metric, in presentation order.
    pub const ALL: [Self; 5] = [
        Self::Degree,
        Self::Betweenness,
        Self::Closeness,
        Self::PageRank,
        Self::Eigenvector,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Degree => "Degree",
            Self::Betweenness => "Betweenness",
            Self::Closeness => "Closeness",
            Self::PageRank => "PageRank",
            Self::Eigenvector => "Eigenvector",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Parameters for the iterative metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CentralityConfig {
    #[serde(default)]
    pub pagerank: PageRankConfig,
    #[serde(default)]
    pub eigenvector: EigenvectorConfig,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Compute all five metrics with default parameters.
#[must_use]
pub fn compute_centralities(g: &PpiGraph) -> Vec<(Metric, CentralityMapping)> {
    compute_centralities_with(g, &CentralityConfig::default())
}

/// Compute all five metrics, in [`Metric::ALL`] order.
///
/// A convergence failure in the eigenvector step is recorded in its slot and
/// does not affect the other metrics.
#[must_use]
#[instrument(skip(g, config), fields(nodes = g.node_count(), edges = g.edge_count()))]
pub fn compute_centralities_with(
    g: &PpiGraph,
    config: &CentralityConfig,
) -> Vec<(Metric, CentralityMapping)> {
    let out: Vec<(Metric, CentralityMapping)> = Metric::ALL
        .into_iter()
        .map(|metric| (metric, compute_metric(g, metric, config)))
        .collect();

    let failed = out.iter().filter(|(_, m)| m.is_err()).count();
    if failed > 0 {
        warn!(failed, "some centrality metrics could not be computed");
    }
    info!(metrics = out.len() - failed, "computed centrality metrics");

    out
}

/// Compute a single metric.
#[must_use]
pub fn compute_metric(g: &PpiGraph, metric: Metric, config: &CentralityConfig) -> CentralityMapping {
    match metric {
        Metric::Degree => Ok(degree::degree_centrality(g)),
        Metric::Betweenness => Ok(betweenness::betweenness_centrality(g)),
        Metric::Closeness => Ok(closeness::closeness_centrality(g)),
        Metric::PageRank => Ok(pagerank::pagerank(g, &config.pagerank).scores),
        Metric::Eigenvector => eigenvector::eigenvector_centrality(g, &config.eigenvector),
    }
}

/// Map node-indexed values back to protein symbols.
pub(crate) fn scores_by_protein(g: &PpiGraph, values: &[f64]) -> Scores {
    g.graph
        .node_indices()
        .map(|idx| (g.graph[idx].clone(), values[idx.index()]))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
