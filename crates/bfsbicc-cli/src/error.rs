//! Error types for the bfsbicc CLI.

use thiserror::Error;

/// CLI result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type.
#[derive(Error, Debug)]
pub enum CliError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Graph could not be loaded or decomposed.
    #[error("{0}")]
    Graph(#[from] bfsbicc_graph::GraphError),

    /// Unknown output format.
    #[error("Invalid output format: {0}")]
    InvalidFormat(String),

    /// Report serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Wrap an IO error with the path that caused it.
    pub fn unreadable(path: &str, e: std::io::Error) -> Self {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Unable to open file {}: {}", path, e),
        ))
    }
}
