//! Output formatting for CLI commands.
//!
//! Every command prints either human-readable text or pretty JSON of the
//! same value. Text writers take any [`Write`] so they can be tested against
//! an in-memory buffer.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers (semantic colors)

pub mod color;

use crate::domain::{BlastRadius, DependencyEdge, DependencyGraph, MapperStats};
use crate::error::Result;
use crate::report::MapReport;
use serde::Serialize;
use std::env;
use std::io::{self, Write};

pub use color::{error, info, success, warning};

use color::{bold, colorize_criticality, colorize_health, dimmed};

const ARROW: &str = " -> ";

// ============================================================================
// Output Configuration
// ============================================================================

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create an OutputConfig by reading from environment variables.
    ///
    /// Reads:
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `DEPMAP_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        // Respect NO_COLOR standard (https://no-color.org/)
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("DEPMAP_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self { use_colors }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

fn emit<T, F>(value: &T, mode: OutputMode, write_text: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&mut io::StdoutLock<'static>, &OutputConfig) -> io::Result<()>,
{
    let mut handle = io::stdout().lock();
    match mode {
        OutputMode::Text => write_text(&mut handle, &OutputConfig::from_env())?,
        OutputMode::Json => {
            let json = serde_json::to_string_pretty(value)?;
            writeln!(handle, "{}", json)?;
        }
    }
    Ok(())
}

/// Print a topology report
pub fn print_report(report: &MapReport, mode: OutputMode) -> Result<()> {
    emit(report, mode, |w, config| write_report_text(w, report, config))
}

/// Print detected cycles
pub fn print_cycles(cycles: &[Vec<String>], mode: OutputMode) -> Result<()> {
    emit(cycles, mode, |w, config| write_cycles_text(w, cycles, config))
}

/// Print single points of failure
pub fn print_single_points(services: &[String], mode: OutputMode) -> Result<()> {
    emit(services, mode, |w, config| {
        write_service_list_text(w, "Single points of failure", services, config)
    })
}

/// Print one critical path
pub fn print_path(path: &[String], mode: OutputMode) -> Result<()> {
    emit(path, mode, |w, config| {
        writeln!(w, "{}", format_path(path, config))
    })
}

/// Print all critical paths
pub fn print_paths(paths: &[Vec<String>], mode: OutputMode) -> Result<()> {
    emit(paths, mode, |w, config| write_paths_text(w, paths, config))
}

/// Print the maximum chain depth
pub fn print_depth(depth: usize, max_chain_depth: usize, mode: OutputMode) -> Result<()> {
    let value = serde_json::json!({ "depth": depth, "max_chain_depth": max_chain_depth });
    emit(&value, mode, |w, config| {
        let rendered = depth.to_string();
        let rendered = if depth > max_chain_depth {
            warning(&rendered, config)
        } else {
            success(&rendered, config)
        };
        writeln!(
            w,
            "{} {} {}",
            dimmed("Max depth:", config),
            rendered,
            dimmed(&format!("(limit {max_chain_depth})"), config)
        )
    })
}

/// Print a blast radius
pub fn print_blast_radius(radius: &BlastRadius, mode: OutputMode) -> Result<()> {
    emit(radius, mode, |w, config| {
        write_blast_radius_text(w, radius, config)
    })
}

/// Print mapper statistics
pub fn print_stats(stats: &MapperStats, mode: OutputMode) -> Result<()> {
    emit(stats, mode, |w, config| write_stats_text(w, stats, config))
}

/// Print stored edges
pub fn print_edges(edges: &[DependencyEdge], mode: OutputMode) -> Result<()> {
    emit(edges, mode, |w, config| write_edges_text(w, edges, config))
}

// ============================================================================
// Text Formatting
// ============================================================================

fn format_path(path: &[String], config: &OutputConfig) -> String {
    path.iter()
        .map(|service| info(service, config))
        .collect::<Vec<_>>()
        .join(&dimmed(ARROW, config))
}

fn write_graph_text<W: Write>(
    w: &mut W,
    graph: &DependencyGraph,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(
        w,
        "{} {}",
        bold("Health:", config),
        colorize_health(graph.health, config)
    )?;
    writeln!(w, "  {} {}", dimmed("Services:", config), graph.total_services)?;
    writeln!(w, "  {} {}", dimmed("Edges:", config), graph.total_edges)?;
    writeln!(w, "  {} {}", dimmed("Max depth:", config), graph.depth)?;
    writeln!(w, "  {} {}", dimmed("Cycles:", config), graph.cycles.len())?;
    writeln!(
        w,
        "  {} {}",
        dimmed("Single points:", config),
        graph.single_points.len()
    )?;
    writeln!(
        w,
        "  {} {}",
        dimmed("Critical paths:", config),
        graph.critical_paths.len()
    )
}

fn write_distribution<W: Write>(
    w: &mut W,
    title: &str,
    counts: &std::collections::BTreeMap<String, usize>,
    config: &OutputConfig,
) -> io::Result<()> {
    if counts.is_empty() {
        return Ok(());
    }
    writeln!(w)?;
    writeln!(w, "{}", bold(title, config))?;
    for (name, count) in counts {
        writeln!(w, "  {name}: {count}")?;
    }
    Ok(())
}

fn write_report_text<W: Write>(
    w: &mut W,
    report: &MapReport,
    config: &OutputConfig,
) -> io::Result<()> {
    write_graph_text(w, &report.graph, config)?;
    write_distribution(w, "By type:", &report.by_type, config)?;
    write_distribution(w, "By criticality:", &report.by_criticality, config)?;

    if !report.issues.is_empty() {
        writeln!(w)?;
        writeln!(w, "{}", bold("Issues:", config))?;
        for issue in &report.issues {
            writeln!(w, "  - {}", warning(issue, config))?;
        }
    }

    writeln!(w)?;
    writeln!(w, "{}", bold("Recommendations:", config))?;
    for recommendation in &report.recommendations {
        writeln!(w, "  - {recommendation}")?;
    }
    Ok(())
}

fn write_cycles_text<W: Write>(
    w: &mut W,
    cycles: &[Vec<String>],
    config: &OutputConfig,
) -> io::Result<()> {
    if cycles.is_empty() {
        return writeln!(w, "{}", success("No cycles detected", config));
    }
    writeln!(
        w,
        "{}",
        error(&format!("{} cycle(s) detected:", cycles.len()), config)
    )?;
    for cycle in cycles {
        writeln!(w, "  {}", format_path(cycle, config))?;
    }
    Ok(())
}

fn write_service_list_text<W: Write>(
    w: &mut W,
    title: &str,
    services: &[String],
    config: &OutputConfig,
) -> io::Result<()> {
    if services.is_empty() {
        return writeln!(w, "{}", success(&format!("{title}: none"), config));
    }
    writeln!(w, "{} ({}):", bold(title, config), services.len())?;
    for service in services {
        writeln!(w, "  {}", info(service, config))?;
    }
    Ok(())
}

fn write_paths_text<W: Write>(
    w: &mut W,
    paths: &[Vec<String>],
    config: &OutputConfig,
) -> io::Result<()> {
    if paths.is_empty() {
        return writeln!(w, "No critical paths");
    }
    for path in paths {
        writeln!(w, "{}", format_path(path, config))?;
    }
    Ok(())
}

fn write_blast_radius_text<W: Write>(
    w: &mut W,
    radius: &BlastRadius,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(
        w,
        "{} {} ({} affected)",
        bold("Blast radius of", config),
        info(&radius.service, config),
        radius.total_affected
    )?;
    writeln!(w)?;
    write_service_list_text(w, "Upstream (callers)", &radius.upstream_affected, config)?;
    write_service_list_text(
        w,
        "Downstream (dependencies)",
        &radius.downstream_affected,
        config,
    )
}

fn write_stats_text<W: Write>(
    w: &mut W,
    stats: &MapperStats,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w, "{} {}", dimmed("Edges:", config), stats.total_edges)?;
    writeln!(w, "{} {}", dimmed("Services:", config), stats.total_services)?;
    writeln!(w, "{} {}", dimmed("Graphs built:", config), stats.total_graphs)?;
    if !stats.services.is_empty() {
        let names: Vec<String> = stats.services.iter().map(|s| info(s, config)).collect();
        writeln!(w, "{} {}", dimmed("Service names:", config), names.join(", "))?;
    }
    Ok(())
}

fn write_edges_text<W: Write>(
    w: &mut W,
    edges: &[DependencyEdge],
    config: &OutputConfig,
) -> io::Result<()> {
    if edges.is_empty() {
        return writeln!(w, "No dependencies found");
    }
    for edge in edges {
        writeln!(
            w,
            "{} {}{}{} [{}, {}]",
            dimmed(edge.id.as_str(), config),
            info(&edge.source_service, config),
            dimmed(ARROW, config),
            info(&edge.target_service, config),
            edge.dependency_type,
            colorize_criticality(edge.criticality, config)
        )?;
    }
    Ok(())
}
