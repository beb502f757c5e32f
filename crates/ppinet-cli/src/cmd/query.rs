//! `ppinet query` - fetch a protein's interactions and analyze them.

use anyhow::Result;
use clap::Args;
use ppinet_core::{Pipeline, PpiConfig, SourceSchema, normalize};

use super::NetworkArgs;
use super::report::{AnalysisReport, emit};
use crate::fetch::fetch_payload;
use crate::output::{CliError, OutputMode, render_error};

/// Arguments for `ppinet query`.
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Protein identifier or gene symbol, e.g. `TP53`.
    pub protein: String,

    /// Database to query: `biogrid` or `string`.
    #[arg(long, default_value = "biogrid")]
    pub db: SourceSchema,

    #[command(flatten)]
    pub network: NetworkArgs,
}

/// Execute `ppinet query`.
pub fn run_query(args: &QueryArgs, config: &PpiConfig, output: OutputMode) -> Result<()> {
    let protein = args.protein.trim();
    if protein.is_empty() {
        render_error(
            output,
            &CliError::with_details(
                "protein identifier is empty",
                "pass a gene symbol such as TP53",
                "empty_protein",
            ),
        )?;
        anyhow::bail!("empty protein identifier");
    }

    let payload = fetch_payload(args.db, protein, config)?;
    let table = normalize(&payload, args.db);

    let pipeline = Pipeline::from_config(config).with_limit(args.network.resolve_limit(config));
    let report = AnalysisReport::build(Some(protein.to_string()), args.db, &table, &pipeline);
    emit(&report, &args.network, output)
}
