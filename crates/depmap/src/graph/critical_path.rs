//! Critical path discovery.
//!
//! A critical path is a greedy forward walk that prefers critical and
//! high-criticality edges. At each step the walk takes the most severe
//! elevated edge leading to a service not yet on the path (critical before
//! high, insertion order breaking ties). If no elevated edge qualifies, it
//! falls back to the first unvisited successor. The walk stops at a dead end
//! or after `max_hops` hops, and never repeats a service.

use super::TopologyGraph;
use petgraph::visit::EdgeRef;
use std::collections::HashSet;

/// Separator used to key paths during deduplication.
const PATH_KEY_SEPARATOR: &str = " -> ";

/// Walk forward from `start`, returning the visited services in order.
///
/// A start service that does not appear in the graph yields `[start]`.
pub fn critical_path(graph: &TopologyGraph, start: &str, max_hops: usize) -> Vec<String> {
    let mut path = vec![start.to_string()];
    let Some(mut current) = graph.index_of(start) else {
        return path;
    };

    let mut on_path = vec![false; graph.node_count()];
    on_path[current.index()] = true;

    for _ in 0..max_hops {
        let successors = graph.successors(current);

        let elevated = successors
            .iter()
            .filter(|(target, criticality)| criticality.is_elevated() && !on_path[target.index()])
            .fold(None, |best, &(target, criticality)| match best {
                Some((_, best_criticality)) if best_criticality >= criticality => best,
                _ => Some((target, criticality)),
            })
            .map(|(target, _)| target);

        let Some(next) = elevated.or_else(|| {
            successors
                .iter()
                .find(|(target, _)| !on_path[target.index()])
                .map(|&(target, _)| target)
        }) else {
            break;
        };

        on_path[next.index()] = true;
        path.push(graph.name(next).to_string());
        current = next;
    }

    path
}

/// Critical paths seeded from the source of every critical/high edge.
///
/// Seeds are taken in edge insertion order. Paths are deduplicated by their
/// full service sequence and single-service paths are dropped.
pub fn all_critical_paths(graph: &TopologyGraph, max_hops: usize) -> Vec<Vec<String>> {
    let inner = graph.inner();
    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    for edge in inner.edge_references() {
        if !edge.weight().is_elevated() {
            continue;
        }
        let path = critical_path(graph, &inner[edge.source()], max_hops);
        if path.len() > 1 && seen.insert(path.join(PATH_KEY_SEPARATOR)) {
            paths.push(path);
        }
    }

    paths
}
