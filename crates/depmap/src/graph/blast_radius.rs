//! Blast radius computation via bidirectional BFS.
//!
//! Upstream: every service that directly or indirectly depends on the target
//! (BFS over reversed edges). Downstream: every service the target directly or
//! indirectly depends on (BFS over forward edges). The two traversals are
//! independent, so in a cyclic graph a service may appear in both sets.

use super::TopologyGraph;
use crate::domain::BlastRadius;
use petgraph::graph::NodeIndex;
use petgraph::visit::{Bfs, IntoNeighbors, Reversed, Visitable};

/// Services affected by a failure of `service`.
///
/// Neither set contains `service` itself. An unknown service has an empty
/// blast radius.
pub fn blast_radius(graph: &TopologyGraph, service: &str) -> BlastRadius {
    let Some(start) = graph.index_of(service) else {
        return BlastRadius {
            service: service.to_string(),
            upstream_affected: Vec::new(),
            downstream_affected: Vec::new(),
            total_affected: 0,
        };
    };

    let inner = graph.inner();
    let upstream_affected = reachable(graph, Reversed(inner), start);
    let downstream_affected = reachable(graph, inner, start);
    let total_affected = upstream_affected.len() + downstream_affected.len();

    BlastRadius {
        service: service.to_string(),
        upstream_affected,
        downstream_affected,
        total_affected,
    }
}

/// Sorted names of every node reachable from `start`, excluding `start`.
fn reachable<G>(graph: &TopologyGraph, view: G, start: NodeIndex) -> Vec<String>
where
    G: IntoNeighbors<NodeId = NodeIndex> + Visitable,
{
    let mut bfs = Bfs::new(view, start);
    let mut names = Vec::new();
    while let Some(node) = bfs.next(view) {
        if node != start {
            names.push(graph.name(node).to_string());
        }
    }
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::super::test_support::edges;
    use super::*;

    fn radius_of(pairs: &[(&str, &str)], service: &str) -> BlastRadius {
        blast_radius(&TopologyGraph::from_edges(&edges(pairs)), service)
    }

    #[test]
    fn upstream_and_downstream_are_transitive() {
        let radius = radius_of(
            &[("web", "api"), ("mobile", "api"), ("api", "db"), ("db", "disk"), ("cron", "web")],
            "api",
        );

        assert_eq!(radius.upstream_affected, ["cron", "mobile", "web"]);
        assert_eq!(radius.downstream_affected, ["db", "disk"]);
        assert_eq!(radius.total_affected, 5);
    }

    #[test]
    fn leaf_has_no_downstream() {
        let radius = radius_of(&[("a", "b"), ("b", "c")], "c");
        assert_eq!(radius.upstream_affected, ["a", "b"]);
        assert!(radius.downstream_affected.is_empty());
    }

    #[test]
    fn unknown_service_is_empty() {
        let radius = radius_of(&[("a", "b")], "ghost");
        assert_eq!(radius.service, "ghost");
        assert!(radius.upstream_affected.is_empty());
        assert!(radius.downstream_affected.is_empty());
        assert_eq!(radius.total_affected, 0);
    }

    #[test]
    fn cycle_excludes_self_but_overlaps() {
        let radius = radius_of(&[("a", "b"), ("b", "a")], "a");
        assert_eq!(radius.upstream_affected, ["b"]);
        assert_eq!(radius.downstream_affected, ["b"]);
        assert_eq!(radius.total_affected, 2);
    }

    #[test]
    fn self_loop_excludes_self() {
        let radius = radius_of(&[("x", "x")], "x");
        assert_eq!(radius.total_affected, 0);
    }
}
