//! End-to-end analysis: payload → table → graph → bundle.

use serde_json::Value;
use tracing::{info, instrument};

use crate::bundle::ResultBundle;
use crate::config::PpiConfig;
use crate::graph::build_graph;
use crate::metrics::CentralityConfig;
use crate::normalize::{InteractionTable, SourceSchema, normalize};

/// Runs the normalizer, graph builder and centrality engine in sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipeline {
    /// Keep only the first `limit` interactions. `None` keeps everything.
    pub limit: Option<usize>,
    pub centrality: CentralityConfig,
}

impl Pipeline {
    #[must_use]
    pub fn from_config(config: &PpiConfig) -> Self {
        Self {
            limit: config.preview_limit(),
            centrality: config.centrality(),
        }
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// The rows that will reach the graph builder.
    #[must_use]
    pub fn select(&self, table: &InteractionTable) -> InteractionTable {
        match self.limit {
            Some(n) => table.head(n),
            None => table.clone(),
        }
    }

    /// Build the graph from `table` (after truncation) and score it.
    #[must_use]
    #[instrument(skip(self, table), fields(rows = table.len(), limit = ?self.limit))]
    pub fn run(&self, table: &InteractionTable) -> ResultBundle {
        let selected = self.select(table);
        let graph = build_graph(&selected);
        info!(
            interactions = selected.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built interaction graph"
        );
        ResultBundle::from_graph(graph, &self.centrality)
    }

    /// Normalize a raw upstream payload and run it.
    #[must_use]
    pub fn run_json(&self, payload: &Value, schema: SourceSchema) -> ResultBundle {
        self.run(&normalize(payload, schema))
    }
}
