//! `bfsbicc check` command - Decide whether a graph file is biconnected.

use std::time::Instant;

use bfsbicc_graph::is_biconnected;
use colored::Colorize;
use serde::Serialize;

use super::{load_graph, millis, OutputFormat};
use crate::error::CliResult;

/// Result of a `check` run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Input file.
    pub file: String,
    /// Number of vertices.
    pub vertices: usize,
    /// Number of undirected edges.
    pub edges: usize,
    /// Whether the graph is biconnected.
    pub biconnected: bool,
    /// Time spent in the check, excluding loading.
    pub execution_ms: f64,
}

/// Execute the `check` command.
pub async fn execute(file: &str, format: &str) -> CliResult<()> {
    let format: OutputFormat = format.parse()?;
    let report = build_report(file).await?;

    match format {
        OutputFormat::Text => {
            let marker = if report.biconnected {
                "✓".bright_green()
            } else {
                "✗".bright_red()
            };
            println!("{} {}", marker, verdict(&report));
            println!("Execution time: {} milliseconds", report.execution_ms);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Load `file` and test it for biconnectivity.
pub async fn build_report(file: &str) -> CliResult<CheckReport> {
    let graph = load_graph(file).await?;

    let start = Instant::now();
    let biconnected = is_biconnected(&graph)?;
    let elapsed = start.elapsed();

    Ok(CheckReport {
        file: file.to_string(),
        vertices: graph.num_vertices(),
        edges: graph.num_edges(),
        biconnected,
        execution_ms: millis(elapsed),
    })
}

/// One-line verdict for a report.
pub fn verdict(report: &CheckReport) -> &'static str {
    if report.biconnected {
        "The graph is biconnected"
    } else {
        "The graph is not biconnected"
    }
}
