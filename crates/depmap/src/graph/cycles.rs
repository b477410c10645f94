//! Cycle detection.
//!
//! Three-colour depth-first search driven by an explicit work stack, so deep
//! or adversarial graphs cannot exhaust the call stack. A node is either
//! unvisited, on the current path, or finished. Reaching a node that is on
//! the current path closes a cycle: the path suffix starting at that node is
//! recorded, with the node appended again.
//!
//! Finished nodes are never re-entered from a later root, so each back edge
//! is reported exactly once. Overlapping cycles sharing nodes may all appear;
//! no deduplication is performed.

use super::TopologyGraph;
use petgraph::graph::NodeIndex;

/// Find cycles in the graph.
///
/// Roots are taken in ascending service-name order and successors in edge
/// insertion order. Each returned cycle starts and ends with the same
/// service; a self-loop `x -> x` yields `[x, x]`.
pub fn detect_cycles(graph: &TopologyGraph) -> Vec<Vec<String>> {
    let node_count = graph.node_count();
    let mut visited = vec![false; node_count];
    // Position of each node in `path` while it is on the current path.
    let mut path_pos: Vec<Option<usize>> = vec![None; node_count];
    let mut path: Vec<NodeIndex> = Vec::new();
    let mut stack: Vec<(NodeIndex, usize)> = Vec::new();
    let mut cycles = Vec::new();

    for root in graph.nodes_by_name() {
        if visited[root.index()] {
            continue;
        }

        visited[root.index()] = true;
        path_pos[root.index()] = Some(path.len());
        path.push(root);
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (node, cursor) = *frame;

            let Some(&(next, _)) = graph.successors(node).get(cursor) else {
                stack.pop();
                path.pop();
                path_pos[node.index()] = None;
                continue;
            };
            frame.1 += 1;

            if let Some(start) = path_pos[next.index()] {
                let mut cycle: Vec<String> = path[start..]
                    .iter()
                    .map(|&member| graph.name(member).to_string())
                    .collect();
                cycle.push(graph.name(next).to_string());
                cycles.push(cycle);
            } else if !visited[next.index()] {
                visited[next.index()] = true;
                path_pos[next.index()] = Some(path.len());
                path.push(next);
                stack.push((next, 0));
            }
        }
    }

    cycles
}
