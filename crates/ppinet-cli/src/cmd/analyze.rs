//! `ppinet analyze` - run the pipeline over a saved payload.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use ppinet_core::{Pipeline, PpiConfig, SourceSchema, normalize};
use serde_json::Value;
use tracing::debug;

use super::NetworkArgs;
use super::report::{AnalysisReport, emit};
use crate::output::OutputMode;

/// Arguments for `ppinet analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Source the payload came from: `biogrid` or `string`.
    #[arg(long)]
    pub db: SourceSchema,

    /// Payload file; `-` or omitted reads stdin.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Protein the payload was retrieved for (used in headings only).
    #[arg(long)]
    pub protein: Option<String>,

    #[command(flatten)]
    pub network: NetworkArgs,
}

/// Execute `ppinet analyze`.
pub fn run_analyze(args: &AnalyzeArgs, config: &PpiConfig, output: OutputMode) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let payload = parse_payload(&text)?;
    let table = normalize(&payload, args.db);
    debug!(rows = table.len(), source = %args.db, "normalized payload");

    let pipeline = Pipeline::from_config(config).with_limit(args.network.resolve_limit(config));
    let report = AnalysisReport::build(args.protein.clone(), args.db, &table, &pipeline);
    emit(&report, &args.network, output)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read payload from stdin")?;
            Ok(buf)
        }
    }
}

/// Blank input is an absent payload, not a parse error.
fn parse_payload(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).context("payload is not valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_null() {
        assert_eq!(parse_payload("  \n").expect("blank"), Value::Null);
    }

    #[test]
    fn malformed_input_is_an_error() {
        let err = parse_payload("{\"1\": ").expect_err("truncated JSON");
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn reads_payload_file() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("payload.json");
        std::fs::write(&path, "[]").expect("write");
        assert_eq!(read_input(Some(&path)).expect("read"), "[]");
    }
}
