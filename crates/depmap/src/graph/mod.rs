//! Dependency graph analysis using petgraph.
//!
//! Every analysis starts from a [`TopologyGraph`] rebuilt from the current
//! edge snapshot; nothing is cached between calls. The submodules hold the
//! individual algorithms:
//!
//! - [`cycles`]: iterative three-colour DFS cycle detection
//! - [`spof`]: in/out-degree heuristic for single points of failure
//! - [`depth`]: memoized longest-chain computation
//! - [`critical_path`]: greedy walks biased toward critical/high edges
//! - [`blast_radius`]: upstream and downstream reachability
//! - [`health`]: ordinal classification of the structural findings
//!
//! ## Edge Direction Convention
//!
//! Edges point from **dependent -> dependency**: an edge `checkout -> payments`
//! means checkout calls payments. Outgoing edges therefore lead to the
//! services a node needs, incoming edges come from its callers.
//!
//! ## Ordering
//!
//! Successor lists preserve edge insertion order, and whole-graph traversals
//! visit nodes in ascending name order. Results that depend on traversal order
//! (which cycles are reported, memoized depths inside cycles, fallback hops on
//! critical paths) are therefore deterministic for a given edge sequence.

pub mod blast_radius;
pub mod critical_path;
pub mod cycles;
pub mod depth;
pub mod health;
pub mod spof;

use crate::domain::{Criticality, DependencyEdge};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{BTreeMap, HashMap};

/// Index-based directed view over a snapshot of dependency edges.
///
/// Service names are interned once into petgraph node indices; successor
/// lists are kept as a vector of vectors indexed by node.
#[derive(Debug, Clone, Default)]
pub struct TopologyGraph {
    /// Nodes hold service names, edges hold the edge criticality.
    graph: DiGraph<String, Criticality>,

    /// Service name to node index.
    node_map: HashMap<String, NodeIndex>,

    /// Outgoing neighbours per node, in edge insertion order.
    successors: Vec<Vec<(NodeIndex, Criticality)>>,
}

impl TopologyGraph {
    /// Build the view from edges in insertion order. O(E).
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = &'a DependencyEdge>,
    {
        let mut topology = Self::default();
        for edge in edges {
            let source = topology.intern(&edge.source_service);
            let target = topology.intern(&edge.target_service);
            topology.graph.add_edge(source, target, edge.criticality);
            topology.successors[source.index()].push((target, edge.criticality));
        }
        topology
    }

    fn intern(&mut self, service: &str) -> NodeIndex {
        if let Some(&node) = self.node_map.get(service) {
            return node;
        }
        let node = self.graph.add_node(service.to_string());
        self.node_map.insert(service.to_string(), node);
        self.successors.push(Vec::new());
        node
    }

    /// Distinct services across all sources and targets.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Edges in the snapshot, parallel edges and self-loops included.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The underlying petgraph graph.
    pub fn inner(&self) -> &DiGraph<String, Criticality> {
        &self.graph
    }

    /// Node index of a service, if it appears in any edge.
    pub fn index_of(&self, service: &str) -> Option<NodeIndex> {
        self.node_map.get(service).copied()
    }

    /// Service name of a node.
    pub fn name(&self, node: NodeIndex) -> &str {
        &self.graph[node]
    }

    /// Outgoing neighbours of a node, in edge insertion order.
    pub fn successors(&self, node: NodeIndex) -> &[(NodeIndex, Criticality)] {
        self.successors
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The full node universe, sorted by service name.
    pub fn nodes_by_name(&self) -> Vec<NodeIndex> {
        let mut nodes: Vec<NodeIndex> = self.graph.node_indices().collect();
        nodes.sort_by(|a, b| self.graph[*a].cmp(&self.graph[*b]));
        nodes
    }

    /// Sorted service names.
    pub fn service_names(&self) -> Vec<String> {
        self.nodes_by_name()
            .into_iter()
            .map(|node| self.graph[node].clone())
            .collect()
    }

    /// Source-to-targets mapping.
    ///
    /// Only services with at least one outgoing edge get a key; targets keep
    /// insertion order and repeat for parallel edges.
    pub fn adjacency(&self) -> BTreeMap<String, Vec<String>> {
        self.graph
            .node_indices()
            .filter(|node| !self.successors(*node).is_empty())
            .map(|node| {
                let targets = self
                    .successors(node)
                    .iter()
                    .map(|(target, _)| self.graph[*target].clone())
                    .collect();
                (self.graph[node].clone(), targets)
            })
            .collect()
    }
}
