//! Interaction graph module.
//!
//! # Overview
//!
//! This module turns a canonical [`InteractionTable`](crate::normalize::InteractionTable)
//! into a petgraph-based undirected graph. The graph feeds every centrality
//! metric in [`crate::metrics`].
//!
//! ## Pipeline
//!
//! ```text
//! InteractionTable (protein1, protein2)
//!        ↓  build::PpiGraph::from_table()
//! PpiGraph (UnGraph, parallel edges collapsed, self-loops kept)
//!        ↓  stats::GraphStats::from_graph()
//! GraphStats (nodes, edges, self-loops, density, components, …)
//! ```
//!
//! ## Change Detection
//!
//! [`PpiGraph::content_hash`] is a BLAKE3 hash of the interaction list the
//! graph was built from. Two runs over the same data produce the same hash.
//!
//! ## Typical Usage
//!
//! ```rust,ignore
//! use ppinet_core::graph::{PpiGraph, stats::GraphStats};
//!
//! let table = ppinet_core::normalize(&payload, SourceSchema::StringDb);
//! let graph = PpiGraph::from_table(&table);
//! let stats = GraphStats::from_graph(&graph);
//!
//! println!("nodes={} edges={} density={:.3}",
//!     stats.node_count, stats.edge_count, stats.density);
//! ```

pub mod build;
pub mod stats;

// Re-export primary types at module level for convenience.
pub use build::{PpiGraph, build_graph};
pub use stats::GraphStats;
