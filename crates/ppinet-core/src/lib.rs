#![forbid(unsafe_code)]
//! ppinet-core library.
//!
//! Turns a raw protein-protein interaction payload into an undirected graph
//! and a bundle of node centrality scores.
//!
//! ```text
//! raw JSON payload
//!        ↓  normalize::normalize()
//! InteractionTable (protein1, protein2)
//!        ↓  graph::PpiGraph::from_table()
//! PpiGraph (undirected, simple, self-loops kept)
//!        ↓  metrics::compute_centralities()
//! [(Metric, CentralityMapping); 5]
//!        ↓  bundle::ResultBundle::assemble()
//! ResultBundle
//! ```
//!
//! # Conventions
//!
//! - **Errors**: Use `anyhow::Result` for I/O-facing return types and typed
//!   `thiserror` errors for recoverable algorithm failures.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod bundle;
pub mod config;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod normalize;
pub mod pipeline;

pub use bundle::ResultBundle;
pub use config::PpiConfig;
pub use error::ConvergenceFailure;
pub use graph::{PpiGraph, build_graph};
pub use metrics::{
    CentralityConfig, CentralityMapping, Metric, Scores, compute_centralities,
    compute_centralities_with,
};
pub use normalize::{InteractionRecord, InteractionTable, RawPayload, SourceSchema, normalize};
pub use pipeline::Pipeline;
