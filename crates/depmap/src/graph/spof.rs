//! Single point of failure detection.
//!
//! A service is flagged when either:
//!
//! 1. at least two distinct services depend on it and it has no outgoing
//!    edges (a terminal that many things lean on), or
//! 2. at least three edges point at it, whatever its outgoing edges.
//!
//! Parallel edges count toward rule 2 but not toward the distinct
//! predecessors of rule 1.

use super::TopologyGraph;
use petgraph::graph::NodeIndex;
use petgraph::Direction;
use std::collections::HashSet;

/// Distinct predecessors required for a terminal service to be flagged
pub const MIN_TERMINAL_PREDECESSORS: usize = 2;

/// Incoming edges at which any service is flagged
pub const MIN_INCOMING_EDGES: usize = 3;

/// Sorted, deduplicated names of services classified as single points of
/// failure.
pub fn single_points(graph: &TopologyGraph) -> Vec<String> {
    let inner = graph.inner();
    let mut flagged: Vec<String> = inner
        .node_indices()
        .filter(|&node| is_single_point(graph, node))
        .map(|node| inner[node].clone())
        .collect();
    flagged.sort();
    flagged.dedup();
    flagged
}

fn is_single_point(graph: &TopologyGraph, node: NodeIndex) -> bool {
    let inner = graph.inner();
    let incoming = inner.edges_directed(node, Direction::Incoming).count();
    if incoming >= MIN_INCOMING_EDGES {
        return true;
    }

    let predecessors: HashSet<NodeIndex> = inner
        .neighbors_directed(node, Direction::Incoming)
        .collect();
    predecessors.len() >= MIN_TERMINAL_PREDECESSORS && graph.successors(node).is_empty()
}
