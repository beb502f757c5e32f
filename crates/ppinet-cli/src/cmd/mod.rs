pub mod analyze;
pub mod config;
pub mod query;
pub mod report;

use std::path::PathBuf;

use clap::Args;
use ppinet_core::PpiConfig;

/// Truncation and export flags shared by `query` and `analyze`.
#[derive(Args, Debug, Default, Clone)]
pub struct NetworkArgs {
    /// Keep only the first N interactions (default: `[analysis] preview_limit`).
    #[arg(long, value_name = "N", conflicts_with = "all")]
    pub limit: Option<usize>,

    /// Keep every interaction.
    #[arg(long)]
    pub all: bool,

    /// Write the interaction graph in Graphviz DOT form to FILE.
    #[arg(long, value_name = "FILE")]
    pub dot: Option<PathBuf>,
}

impl NetworkArgs {
    /// Effective interaction limit; `None` keeps everything.
    pub fn resolve_limit(&self, config: &PpiConfig) -> Option<usize> {
        if self.all {
            return None;
        }
        match self.limit {
            Some(0) => None,
            Some(n) => Some(n),
            None => config.preview_limit(),
        }
    }
}
