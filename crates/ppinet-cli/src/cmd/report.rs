//! Rendering of a finished analysis, shared by `query` and `analyze`.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use ppinet_core::graph::GraphStats;
use ppinet_core::{InteractionTable, Pipeline, ResultBundle, SourceSchema};
use serde::Serialize;
use tracing::info;

use super::NetworkArgs;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// One protein's interaction table and the network built from it.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub protein: Option<String>,
    pub source: SourceSchema,
    /// Rows returned by the source before truncation.
    pub total_interactions: usize,
    /// Rows the network was built from.
    pub interactions: InteractionTable,
    pub stats: GraphStats,
    pub network: ResultBundle,
}

impl AnalysisReport {
    pub fn build(
        protein: Option<String>,
        source: SourceSchema,
        table: &InteractionTable,
        pipeline: &Pipeline,
    ) -> Self {
        let interactions = pipeline.select(table);
        let network = pipeline.run(&interactions);
        Self {
            protein,
            source,
            total_interactions: table.len(),
            stats: network.stats(),
            interactions,
            network,
        }
    }

    fn title(&self) -> String {
        match &self.protein {
            Some(protein) => format!("{protein} interactions ({})", self.source),
            None => format!("{} interactions", self.source),
        }
    }
}

/// Print the report, then write the DOT file if one was requested.
pub fn emit(report: &AnalysisReport, args: &NetworkArgs, output: OutputMode) -> Result<()> {
    render_mode(output, report, render_text, render_pretty)?;
    if let Some(path) = &args.dot {
        write_dot(&report.network, path)?;
    }
    Ok(())
}

fn write_dot(bundle: &ResultBundle, path: &Path) -> Result<()> {
    std::fs::write(path, bundle.graph().to_dot())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote DOT graph");
    Ok(())
}

fn render_pretty(report: &AnalysisReport, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, &report.title())?;
    if report.interactions.is_empty() {
        return writeln!(w, "No interactions found.");
    }

    writeln!(w, "{:>4}  {:<16} Protein 2", "#", "Protein 1")?;
    for (i, record) in report.interactions.iter().enumerate() {
        writeln!(w, "{:>4}  {:<16} {}", i + 1, record.protein1, record.protein2)?;
    }
    if report.total_interactions > report.interactions.len() {
        writeln!(
            w,
            "(first {} of {} interactions)",
            report.interactions.len(),
            report.total_interactions
        )?;
    }

    writeln!(w)?;
    pretty_section(w, "Network statistics")?;
    let stats = &report.stats;
    pretty_kv(w, "Interactions", report.interactions.len().to_string())?;
    pretty_kv(w, "Nodes", stats.node_count.to_string())?;
    pretty_kv(w, "Edges", stats.edge_count.to_string())?;
    pretty_kv(w, "Self-loops", stats.self_loop_count.to_string())?;
    pretty_kv(w, "Components", stats.component_count.to_string())?;
    pretty_kv(w, "Max degree", stats.max_degree.to_string())?;
    pretty_kv(w, "Density", format!("{:.4}", stats.density))?;
    pretty_kv(w, "Content hash", &report.network.graph().content_hash)?;

    let graph = report.network.graph();
    for (metric, mapping) in report.network.iter() {
        writeln!(w)?;
        pretty_section(w, &format!("{metric} centrality"))?;
        match mapping {
            Ok(scores) => {
                for protein in graph.nodes() {
                    if let Some(score) = scores.get(protein) {
                        writeln!(w, "  {protein:<16} {score:.6}")?;
                    }
                }
            }
            Err(failure) => writeln!(w, "  {failure}")?,
        }
    }
    Ok(())
}

fn render_text(report: &AnalysisReport, w: &mut dyn Write) -> io::Result<()> {
    for (i, record) in report.interactions.iter().enumerate() {
        writeln!(w, "interaction\t{}\t{}\t{}", i + 1, record.protein1, record.protein2)?;
    }

    let stats = &report.stats;
    writeln!(w, "stat\tinteractions\t{}", report.interactions.len())?;
    writeln!(w, "stat\ttotal_interactions\t{}", report.total_interactions)?;
    writeln!(w, "stat\tnodes\t{}", stats.node_count)?;
    writeln!(w, "stat\tedges\t{}", stats.edge_count)?;

    let graph = report.network.graph();
    for (metric, mapping) in report.network.iter() {
        match mapping {
            Ok(scores) => {
                for protein in graph.nodes() {
                    if let Some(score) = scores.get(protein) {
                        writeln!(w, "metric\t{metric}\t{protein}\t{score}")?;
                    }
                }
            }
            Err(failure) => writeln!(w, "metric\t{metric}\t-\t{failure}")?,
        }
    }
    Ok(())
}
