//! bfsbicc CLI - Biconnected components of edge-list graph files.
//!
//! # Commands
//!
//! - `bfsbicc count <file>` - Count biconnected components
//! - `bfsbicc check <file>` - Decide whether the graph is biconnected
//! - `bfsbicc completions <shell>` - Generate shell completions
//!
//! # Input format
//!
//! Whitespace-separated integers: vertex count, edge count, then one pair of
//! 0-indexed vertex IDs per edge.
//!
//! # Examples
//!
//! ```bash
//! # Count components and list articulation points
//! bfsbicc count graph.txt --articulation
//!
//! # Machine-readable biconnectivity check
//! bfsbicc check graph.txt --format json
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;

use commands::{check, count};

/// bfsbicc - biconnected components using breadth-first search only
#[derive(Parser)]
#[command(name = "bfsbicc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the biconnected components of a graph
    Count {
        /// Edge-list file
        file: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Also list articulation points
        #[arg(short, long)]
        articulation: bool,

        /// Traverse even graphs with at most two vertices
        #[arg(long)]
        no_shortcuts: bool,
    },

    /// Check whether a graph is biconnected
    Check {
        /// Edge-list file
        file: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Count {
            file,
            format,
            articulation,
            no_shortcuts,
        } => count::execute(&file, &format, articulation, no_shortcuts).await,

        Commands::Check { file, format } => check::execute(&file, &format).await,

        Commands::Completions { shell } => {
            use clap::CommandFactory;
            clap_complete::generate(shell, &mut Cli::command(), "bfsbicc", &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_count() {
        let cli = Cli::parse_from(["bfsbicc", "count", "g.txt", "--articulation", "-f", "json"]);
        match cli.command {
            Commands::Count {
                file,
                format,
                articulation,
                no_shortcuts,
            } => {
                assert_eq!(file, "g.txt");
                assert_eq!(format, "json");
                assert!(articulation);
                assert!(!no_shortcuts);
            }
            _ => panic!("expected count command"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from(["bfsbicc", "check", "g.txt", "--quiet"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::Check { .. }));
    }

    #[test]
    fn test_missing_file_is_usage_error() {
        assert!(Cli::try_parse_from(["bfsbicc", "count"]).is_err());
    }
}
