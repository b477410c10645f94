//! Topology report generation.
//!
//! A report wraps a freshly built [`DependencyGraph`] with distributions over
//! the stored edges and human-readable findings.

use crate::domain::{DependencyEdge, DependencyGraph};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated view of the topology with derived recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapReport {
    /// Structural analysis snapshot
    pub graph: DependencyGraph,

    /// Edge count per dependency type (only observed types)
    pub by_type: BTreeMap<String, usize>,

    /// Edge count per criticality (only observed levels)
    pub by_criticality: BTreeMap<String, usize>,

    /// Problems found in the topology
    pub issues: Vec<String>,

    /// Suggested remediations, one per issue, or a single all-clear
    pub recommendations: Vec<String>,

    /// When the report was generated
    pub generated_at: DateTime<Utc>,
}

impl MapReport {
    /// Assemble a report from a graph snapshot and the edges it was built from.
    pub fn new<'a, I>(graph: DependencyGraph, edges: I, max_chain_depth: usize) -> Self
    where
        I: IntoIterator<Item = &'a DependencyEdge>,
    {
        let mut by_type = BTreeMap::new();
        let mut by_criticality = BTreeMap::new();
        for edge in edges {
            *by_type
                .entry(edge.dependency_type.as_str().to_string())
                .or_insert(0) += 1;
            *by_criticality
                .entry(edge.criticality.as_str().to_string())
                .or_insert(0) += 1;
        }

        let (issues, recommendations) = findings(&graph, max_chain_depth);

        Self {
            graph,
            by_type,
            by_criticality,
            issues,
            recommendations,
            generated_at: Utc::now(),
        }
    }
}

fn findings(graph: &DependencyGraph, max_chain_depth: usize) -> (Vec<String>, Vec<String>) {
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    let cycle_count = graph.cycles.len();
    if cycle_count > 0 {
        issues.push(format!(
            "{} circular {} detected",
            cycle_count,
            if cycle_count == 1 {
                "dependency"
            } else {
                "dependencies"
            }
        ));
        recommendations.push(
            "Break circular dependencies by introducing asynchronous messaging or an intermediary service"
                .to_string(),
        );
    }

    let spof_count = graph.single_points.len();
    if spof_count > 0 {
        let names = graph.single_points.join(", ");
        issues.push(format!(
            "{} single {} of failure: {}",
            spof_count,
            if spof_count == 1 { "point" } else { "points" },
            names
        ));
        recommendations.push(format!("Add redundancy or fallbacks for {}", names));
    }

    if graph.depth > max_chain_depth {
        issues.push(format!(
            "Dependency chain depth {} exceeds limit of {}",
            graph.depth, max_chain_depth
        ));
        recommendations.push(format!(
            "Flatten dependency chains longer than {} hops by caching or aggregating downstream calls",
            max_chain_depth
        ));
    }

    if issues.is_empty() {
        recommendations
            .push("Dependency topology is healthy; no structural changes needed".to_string());
    }

    (issues, recommendations)
}
