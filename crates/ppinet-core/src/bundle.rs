//! The graph paired with its centrality metrics.
//!
//! A [`ResultBundle`] is what the pipeline hands to whatever renders the
//! analysis. Metrics are always held in [`Metric::ALL`] order. Serialized to
//! JSON, score maps list proteins in graph order and a metric that failed to
//! converge is the sentinel string instead of a map:
//!
//! ```json
//! {
//!   "nodes": ["A", "B", "C"],
//!   "edges": [["A", "B"], ["B", "C"]],
//!   "content_hash": "blake3:…",
//!   "metrics": {
//!     "Degree": { "A": 0.5, "B": 1.0, "C": 0.5 },
//!     "Eigenvector": "Convergence failed - Unable to compute"
//!   }
//! }
//! ```

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::graph::{GraphStats, PpiGraph};
use crate::metrics::{
    CentralityConfig, CentralityMapping, Metric, Scores, compute_centralities_with,
};

/// An interaction graph and its five centrality metrics.
#[derive(Debug, Clone)]
pub struct ResultBundle {
    graph: PpiGraph,
    metrics: Vec<(Metric, CentralityMapping)>,
}

impl ResultBundle {
    /// Pair `graph` with already-computed `centralities`.
    #[must_use]
    pub fn assemble(graph: PpiGraph, mut centralities: Vec<(Metric, CentralityMapping)>) -> Self {
        centralities.sort_by_key(|(metric, _)| *metric);
        Self {
            graph,
            metrics: centralities,
        }
    }

    /// Run the centrality engine over `graph` and assemble the result.
    #[must_use]
    pub fn from_graph(graph: PpiGraph, config: &CentralityConfig) -> Self {
        let centralities = compute_centralities_with(&graph, config);
        Self::assemble(graph, centralities)
    }

    #[must_use]
    pub const fn graph(&self) -> &PpiGraph {
        &self.graph
    }

    /// The mapping for `metric`, if it was supplied.
    #[must_use]
    pub fn metric(&self, metric: Metric) -> Option<&CentralityMapping> {
        self.metrics
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, mapping)| mapping)
    }

    /// Metrics in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, &CentralityMapping)> + '_ {
        self.metrics.iter().map(|(m, mapping)| (*m, mapping))
    }

    #[must_use]
    pub fn stats(&self) -> GraphStats {
        GraphStats::from_graph(&self.graph)
    }

    #[must_use]
    pub fn into_parts(self) -> (PpiGraph, Vec<(Metric, CentralityMapping)>) {
        (self.graph, self.metrics)
    }
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

impl Serialize for ResultBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let nodes: Vec<&str> = self.graph.nodes().collect();
        let edges: Vec<(&str, &str)> = self.graph.edges().collect();

        let mut s = serializer.serialize_struct("ResultBundle", 4)?;
        s.serialize_field("nodes", &nodes)?;
        s.serialize_field("edges", &edges)?;
        s.serialize_field("content_hash", &self.graph.content_hash)?;
        s.serialize_field(
            "metrics",
            &MetricsView {
                graph: &self.graph,
                metrics: &self.metrics,
            },
        )?;
        s.end()
    }
}

struct MetricsView<'a> {
    graph: &'a PpiGraph,
    metrics: &'a [(Metric, CentralityMapping)],
}

impl Serialize for MetricsView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.metrics.len()))?;
        for (metric, mapping) in self.metrics {
            match mapping {
                Ok(scores) => map.serialize_entry(
                    metric.as_str(),
                    &ScoresView {
                        graph: self.graph,
                        scores,
                    },
                )?,
                Err(failure) => map.serialize_entry(metric.as_str(), &failure.to_string())?,
            }
        }
        map.end()
    }
}

/// Scores keyed by protein, in graph node order.
struct ScoresView<'a> {
    graph: &'a PpiGraph,
    scores: &'a Scores,
}

impl Serialize for ScoresView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scores.len()))?;
        for node in self.graph.nodes() {
            if let Some(score) = self.scores.get(node) {
                map.serialize_entry(node, score)?;
            }
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
