//! `bfsbicc count` command - Count biconnected components of a graph file.

use std::time::Instant;

use bfsbicc_graph::{biconnected_components_with_config, BiccConfig};
use serde::Serialize;
use tracing::info;

use super::{load_graph, millis, OutputFormat};
use crate::error::CliResult;

/// Result of a `count` run.
#[derive(Debug, Clone, Serialize)]
pub struct CountReport {
    /// Input file.
    pub file: String,
    /// Number of vertices.
    pub vertices: usize,
    /// Number of undirected edges.
    pub edges: usize,
    /// Number of connected components.
    pub connected_components: usize,
    /// Number of biconnected components.
    pub biconnected_components: usize,
    /// Articulation points, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub articulation_points: Option<Vec<u32>>,
    /// Time spent in the decomposition, excluding loading.
    pub execution_ms: f64,
}

/// Execute the `count` command.
pub async fn execute(
    file: &str,
    format: &str,
    articulation: bool,
    no_shortcuts: bool,
) -> CliResult<()> {
    let format: OutputFormat = format.parse()?;
    let report = build_report(file, articulation, no_shortcuts).await?;

    let output = match format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
    };
    println!("{}", output);

    Ok(())
}

/// Load `file` and decompose it.
pub async fn build_report(
    file: &str,
    articulation: bool,
    no_shortcuts: bool,
) -> CliResult<CountReport> {
    let graph = load_graph(file).await?;

    let config = BiccConfig::new()
        .with_record_edges(false)
        .with_small_graph_shortcuts(!no_shortcuts);

    let start = Instant::now();
    let decomposition = biconnected_components_with_config(&graph, &config)?;
    let elapsed = start.elapsed();

    info!(
        file,
        components = decomposition.num_components(),
        "counted biconnected components"
    );

    Ok(CountReport {
        file: file.to_string(),
        vertices: graph.num_vertices(),
        edges: graph.num_edges(),
        connected_components: decomposition.connected_components(),
        biconnected_components: decomposition.num_components(),
        articulation_points: articulation.then(|| {
            decomposition
                .articulation_points()
                .into_iter()
                .map(|v| v.get())
                .collect()
        }),
        execution_ms: millis(elapsed),
    })
}

/// Format a report as plain text.
pub fn render_text(report: &CountReport) -> String {
    let mut output = format!(
        "Number of biconnected components: {}\n",
        report.biconnected_components
    );

    if let Some(points) = &report.articulation_points {
        let listed = if points.is_empty() {
            "none".to_string()
        } else {
            points
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        output.push_str(&format!("Articulation points: {}\n", listed));
    }

    output.push_str(&format!("Execution time: {} milliseconds", report.execution_ms));
    output
}
