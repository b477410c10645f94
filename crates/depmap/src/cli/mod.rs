//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for depmap using clap's derive API.
//! Every command loads the edge list given by `--edges`, runs one analysis and
//! prints the result.
//!
//! # Commands
//!
//! - `report`: Full topology report with issues and recommendations
//! - `cycles`: Circular dependencies
//! - `spof`: Single points of failure
//! - `depth`: Longest dependency chain
//! - `path`: Critical path from one service
//! - `paths`: Critical paths seeded from every critical/high edge
//! - `blast`: Services affected by a failure of one service
//! - `stats`: Edge and service counts
//! - `list`: Stored edges, optionally filtered
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--config <path>`: YAML file with mapper limits
//! - `--edges <path>`: JSONL edge list to analyze
//!
//! # Example
//!
//! ```bash
//! depmap --edges edges.jsonl report
//! depmap --edges edges.jsonl blast payments
//! depmap --edges edges.jsonl --json list --source checkout -n 20
//! ```

mod args;
mod execute;
mod validators;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Re-export argument structs
pub use args::{BlastArgs, ListArgs, PathArgs};

// Re-export validators for external use
pub use validators::validate_service_name;

/// depmap - Service dependency topology analysis
///
/// Loads a JSONL list of service-to-service dependency edges and reports
/// cycles, single points of failure, chain depth, critical paths and blast
/// radius.
#[derive(Parser, Debug)]
#[command(name = "depmap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// YAML configuration file with mapper limits
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSONL edge list to analyze
    #[arg(long, global = true, value_name = "PATH")]
    pub edges: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the dependency graph and print a full report
    ///
    /// Includes health, structural findings, edge distributions by type and
    /// criticality, and recommendations.
    Report,

    /// Show circular dependencies
    Cycles,

    /// Show single points of failure
    ///
    /// Services with many callers, or terminal services shared by several
    /// callers.
    Spof,

    /// Show the longest dependency chain length
    Depth,

    /// Follow the critical path from a service
    ///
    /// Prefers critical edges, then high, bounded by the configured maximum
    /// chain depth.
    Path(PathArgs),

    /// Show critical paths seeded from every critical or high edge
    Paths,

    /// Show the services affected if a service fails
    ///
    /// Upstream services call it directly or transitively; downstream
    /// services are what it depends on.
    Blast(BlastArgs),

    /// Show edge and service counts
    Stats,

    /// List stored edges
    ///
    /// Shows the most recent matching edges, oldest first.
    List(ListArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        use crate::app::App;
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let Some(command) = &self.command else {
            println!("depmap service dependency topology analysis");
            println!("Use --help for more information");
            return Ok(());
        };

        let edges = self
            .edges
            .as_deref()
            .context("No edge list given; pass --edges <PATH>")?;

        let app = App::load(self.config.as_deref(), Some(edges))
            .await
            .with_context(|| format!("Failed to load {}", edges.display()))?;
        execute::report_import_warnings(&app);

        match command {
            Commands::Report => execute::execute_report(&app, output_mode).await,
            Commands::Cycles => execute::execute_cycles(&app, output_mode).await,
            Commands::Spof => execute::execute_spof(&app, output_mode).await,
            Commands::Depth => execute::execute_depth(&app, output_mode).await,
            Commands::Path(args) => execute::execute_path(&app, args, output_mode).await,
            Commands::Paths => execute::execute_paths(&app, output_mode).await,
            Commands::Blast(args) => execute::execute_blast(&app, args, output_mode).await,
            Commands::Stats => execute::execute_stats(&app, output_mode).await,
            Commands::List(args) => execute::execute_list(&app, args, output_mode).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_LIST_LIMIT;

    // ========== CLI Parsing Tests ==========

    #[test]
    fn test_parse_no_command() {
        let cli = Cli::try_parse_from(["depmap"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
        assert!(cli.edges.is_none());
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "depmap",
            "report",
            "--json",
            "--edges",
            "edges.jsonl",
            "--config",
            "depmap.yaml",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.edges, Some(PathBuf::from("edges.jsonl")));
        assert_eq!(cli.config, Some(PathBuf::from("depmap.yaml")));
        assert!(matches!(cli.command, Some(Commands::Report)));
    }

    #[test]
    fn test_parse_path_trims_service() {
        let cli = Cli::try_parse_from(["depmap", "path", " checkout "]).unwrap();
        match cli.command {
            Some(Commands::Path(args)) => assert_eq!(args.service, "checkout"),
            _ => panic!("Expected Path command"),
        }
    }

    #[test]
    fn test_parse_path_requires_service() {
        assert!(Cli::try_parse_from(["depmap", "path"]).is_err());
    }

    #[test]
    fn test_parse_blast_rejects_empty_service() {
        assert!(Cli::try_parse_from(["depmap", "blast", "  "]).is_err());
    }

    #[test]
    fn test_parse_list_default() {
        let cli = Cli::try_parse_from(["depmap", "list"]).unwrap();
        match cli.command {
            Some(Commands::List(args)) => {
                assert!(args.source.is_none());
                assert!(args.target.is_none());
                assert_eq!(args.limit, DEFAULT_LIST_LIMIT);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_parse_list_with_filters() {
        let cli = Cli::try_parse_from([
            "depmap", "list", "--source", "api", "-t", "db", "-n", "5",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::List(args)) => {
                assert_eq!(args.source.as_deref(), Some("api"));
                assert_eq!(args.target.as_deref(), Some("db"));
                assert_eq!(args.limit, 5);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_parse_list_invalid_limit() {
        assert!(Cli::try_parse_from(["depmap", "list", "-n", "many"]).is_err());
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(Cli::try_parse_from(["depmap", "frobnicate"]).is_err());
    }

    #[tokio::test]
    async fn test_execute_without_edges_fails() {
        let cli = Cli::try_parse_from(["depmap", "cycles"]).unwrap();
        let err = cli.execute().await.unwrap_err();
        assert!(err.to_string().contains("--edges"));
    }
}
