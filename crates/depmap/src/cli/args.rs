//! CLI argument structs for commands that take arguments.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use clap::Parser;

use super::validators::validate_service_name;
use crate::domain::{EdgeFilter, DEFAULT_LIST_LIMIT};

/// Arguments for the `path` command
#[derive(Parser, Debug, Clone)]
pub struct PathArgs {
    /// Service to start the critical path from
    #[arg(value_parser = validate_service_name)]
    pub service: String,
}

/// Arguments for the `blast` command
#[derive(Parser, Debug, Clone)]
pub struct BlastArgs {
    /// Service whose failure is simulated
    #[arg(value_parser = validate_service_name)]
    pub service: String,
}

/// Arguments for the `list` command
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Only edges leaving this service
    #[arg(short, long, value_parser = validate_service_name)]
    pub source: Option<String>,

    /// Only edges entering this service
    #[arg(short, long, value_parser = validate_service_name)]
    pub target: Option<String>,

    /// Maximum number of edges to display (the most recent ones)
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIST_LIMIT, value_parser = clap::value_parser!(usize))]
    pub limit: usize,
}

impl From<&ListArgs> for EdgeFilter {
    fn from(args: &ListArgs) -> Self {
        Self {
            source: args.source.clone(),
            target: args.target.clone(),
            limit: args.limit,
        }
    }
}
