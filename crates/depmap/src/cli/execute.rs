//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands. Each command
//! runs against the edges loaded into the [`App`].

use anyhow::Result;

use super::args::{BlastArgs, ListArgs, PathArgs};
use crate::app::App;
use crate::domain::EdgeFilter;
use crate::output::{self, OutputMode};
use crate::storage::TopologyService;

/// Execute the report command
pub async fn execute_report(app: &App, output_mode: OutputMode) -> Result<()> {
    let report = app.service().generate_map_report().await;
    output::print_report(&report, output_mode)?;
    Ok(())
}

/// Execute the cycles command
pub async fn execute_cycles(app: &App, output_mode: OutputMode) -> Result<()> {
    let cycles = app.service().detect_cycles().await;
    output::print_cycles(&cycles, output_mode)?;
    Ok(())
}

/// Execute the spof command
pub async fn execute_spof(app: &App, output_mode: OutputMode) -> Result<()> {
    let single_points = app.service().identify_single_points().await;
    output::print_single_points(&single_points, output_mode)?;
    Ok(())
}

/// Execute the depth command
pub async fn execute_depth(app: &App, output_mode: OutputMode) -> Result<()> {
    let depth = app.service().max_depth().await;
    output::print_depth(depth, app.config().max_chain_depth, output_mode)?;
    Ok(())
}

/// Execute the path command
pub async fn execute_path(app: &App, args: &PathArgs, output_mode: OutputMode) -> Result<()> {
    let path = app.service().find_critical_path(&args.service).await;
    output::print_path(&path, output_mode)?;
    Ok(())
}

/// Execute the paths command
pub async fn execute_paths(app: &App, output_mode: OutputMode) -> Result<()> {
    let paths = app.service().find_critical_paths().await;
    output::print_paths(&paths, output_mode)?;
    Ok(())
}

/// Execute the blast command
pub async fn execute_blast(app: &App, args: &BlastArgs, output_mode: OutputMode) -> Result<()> {
    let radius = app.service().calculate_blast_radius(&args.service).await;
    output::print_blast_radius(&radius, output_mode)?;
    Ok(())
}

/// Execute the stats command
pub async fn execute_stats(app: &App, output_mode: OutputMode) -> Result<()> {
    let stats = app.service().get_stats().await;
    output::print_stats(&stats, output_mode)?;
    Ok(())
}

/// Execute the list command
pub async fn execute_list(app: &App, args: &ListArgs, output_mode: OutputMode) -> Result<()> {
    let filter = EdgeFilter::from(args);
    let edges = app.service().list_dependencies(&filter).await;
    output::print_edges(&edges, output_mode)?;
    Ok(())
}

/// Report skipped edge list lines on stderr.
///
/// Goes to stderr so `--json` output on stdout stays parseable.
pub fn report_import_warnings(app: &App) {
    let warnings = app.import_warnings();
    if warnings.is_empty() {
        return;
    }

    let config = output::OutputConfig::from_env();
    eprintln!(
        "{}",
        output::warning(
            &format!("Skipped {} invalid edge record(s):", warnings.len()),
            &config
        )
    );
    for warning in warnings {
        eprintln!("  {warning}");
    }
}
