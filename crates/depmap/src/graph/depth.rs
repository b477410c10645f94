//! Longest dependency chain computation.
//!
//! The depth of a service is the number of hops in the longest chain of
//! dependencies starting at it. Depths are memoized per node; the traversal
//! uses an explicit stack of frames instead of recursion.
//!
//! Cycles are cut by a path guard: a successor that is already on the current
//! path contributes no hop. The memoized value of a node inside a cycle
//! therefore depends on where the traversal entered the cycle. Roots are
//! visited in ascending name order, which makes the result deterministic:
//! for `a -> b -> c -> a` the depths are `a = 2`, `b = 1`, `c = 0`.

use super::TopologyGraph;
use petgraph::graph::NodeIndex;

struct Frame {
    node: NodeIndex,
    cursor: usize,
    best: usize,
}

impl Frame {
    fn new(node: NodeIndex) -> Self {
        Self {
            node,
            cursor: 0,
            best: 0,
        }
    }
}

/// Memoized depth of every node, indexed by `NodeIndex::index()`.
pub fn node_depths(graph: &TopologyGraph) -> Vec<usize> {
    let node_count = graph.node_count();
    let mut memo: Vec<Option<usize>> = vec![None; node_count];
    let mut on_path = vec![false; node_count];
    let mut stack: Vec<Frame> = Vec::new();

    for root in graph.nodes_by_name() {
        if memo[root.index()].is_some() {
            continue;
        }

        on_path[root.index()] = true;
        stack.push(Frame::new(root));

        while let Some(frame) = stack.last_mut() {
            if let Some(&(next, _)) = graph.successors(frame.node).get(frame.cursor) {
                frame.cursor += 1;
                if on_path[next.index()] {
                    continue;
                }
                if let Some(depth) = memo[next.index()] {
                    frame.best = frame.best.max(depth + 1);
                    continue;
                }
                on_path[next.index()] = true;
                stack.push(Frame::new(next));
                continue;
            }

            let Some(done) = stack.pop() else { break };
            on_path[done.node.index()] = false;
            memo[done.node.index()] = Some(done.best);
            if let Some(parent) = stack.last_mut() {
                parent.best = parent.best.max(done.best + 1);
            }
        }
    }

    memo.into_iter().map(Option::unwrap_or_default).collect()
}

/// Longest chain across the whole graph; 0 for an empty graph.
pub fn max_depth(graph: &TopologyGraph) -> usize {
    node_depths(graph).into_iter().max().unwrap_or(0)
}
