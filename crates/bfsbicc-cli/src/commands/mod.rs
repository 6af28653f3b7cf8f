//! CLI command implementations.

pub mod check;
pub mod count;

use std::str::FromStr;
use std::time::Duration;

use bfsbicc_graph::{parse_edge_list, CsrGraph};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON format for programmatic consumption.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(CliError::InvalidFormat(format!(
                "Unknown format '{}'. Valid options: text, json",
                s
            ))),
        }
    }
}

/// Read and parse an edge-list file.
pub async fn load_graph(path: &str) -> CliResult<CsrGraph> {
    let input = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CliError::unreadable(path, e))?;
    let graph = parse_edge_list(&input)?;

    debug!(
        path,
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        "loaded graph"
    );
    Ok(graph)
}

/// Duration as fractional milliseconds.
pub fn millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}
