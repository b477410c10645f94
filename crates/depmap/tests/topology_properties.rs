//! Property tests for the topology analyses.
//!
//! Random graphs are generated as `(source, target)` index pairs over a small
//! node universe. DAG strategies orient every edge from the lower to the
//! higher index, which rules out cycles by construction.

mod common;

use common::{edge, mapper};
use depmap::domain::{Criticality, EdgeFilter};
use depmap::mapper::DependencyMapper;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

const NODES: usize = 12;

fn name(index: usize) -> String {
    format!("svc{index:02}")
}

fn criticality_strategy() -> impl Strategy<Value = Criticality> {
    prop::sample::select(Criticality::ALL.to_vec())
}

// Strategy to generate arbitrary edges, self-loops and parallel edges included.
fn edge_strategy() -> impl Strategy<Value = Vec<(usize, usize, Criticality)>> {
    prop::collection::vec((0..NODES, 0..NODES, criticality_strategy()), 0..NODES * 3)
}

// Strategy to generate edges that always point from a lower to a higher index.
fn dag_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..NODES, 0..NODES), 0..NODES * 3).prop_map(|pairs| {
        pairs
            .into_iter()
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect()
    })
}

fn build(edges: &[(usize, usize, Criticality)]) -> DependencyMapper {
    let mut mapper = mapper(10_000, 5);
    for &(source, target, criticality) in edges {
        mapper.register_dependency(edge(&name(source), &name(target), criticality));
    }
    mapper
}

fn build_dag(pairs: &[(usize, usize)]) -> DependencyMapper {
    let edges: Vec<_> = pairs
        .iter()
        .map(|&(s, t)| (s, t, Criticality::Medium))
        .collect();
    build(&edges)
}

fn edge_set(mapper: &DependencyMapper) -> HashSet<(String, String)> {
    mapper
        .list_dependencies(&EdgeFilter {
            limit: usize::MAX,
            ..Default::default()
        })
        .into_iter()
        .map(|e| (e.source_service, e.target_service))
        .collect()
}

/// Forward reachability computed without the library.
fn reachable_from(pairs: &[(usize, usize)], start: usize) -> BTreeSet<String> {
    let mut adjacency: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for &(s, t) in pairs {
        adjacency.entry(s).or_default().push(t);
    }

    let mut seen = BTreeSet::new();
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        for &next in adjacency.get(&node).into_iter().flatten() {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen.remove(&start);
    seen.into_iter().map(name).collect()
}

/// Longest path in hops, by dynamic programming over the index order.
fn longest_chain(pairs: &[(usize, usize)]) -> usize {
    let mut longest = [0usize; NODES];
    for node in (0..NODES).rev() {
        for &(s, t) in pairs {
            if s == node {
                longest[node] = longest[node].max(longest[t] + 1);
            }
        }
    }
    longest.into_iter().max().unwrap_or(0)
}

proptest! {
    #[test]
    fn dag_has_no_cycles(pairs in dag_strategy()) {
        let mapper = build_dag(&pairs);
        prop_assert!(mapper.detect_cycles().is_empty());
    }

    #[test]
    fn cycles_are_closed_walks_over_real_edges(edges in edge_strategy()) {
        let mapper = build(&edges);
        let known = edge_set(&mapper);

        for cycle in mapper.detect_cycles() {
            prop_assert!(cycle.len() >= 2);
            prop_assert_eq!(cycle.first(), cycle.last());
            for pair in cycle.windows(2) {
                prop_assert!(
                    known.contains(&(pair[0].clone(), pair[1].clone())),
                    "{} -> {} is not an edge",
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn self_loops_are_always_reported(edges in edge_strategy(), looped in 0..NODES) {
        let mut mapper = build(&edges);
        mapper.register_dependency(edge(&name(looped), &name(looped), Criticality::Low));

        let expected = vec![name(looped), name(looped)];
        prop_assert!(mapper.detect_cycles().contains(&expected));
    }

    #[test]
    fn single_points_satisfy_a_rule(edges in edge_strategy()) {
        let mapper = build(&edges);
        let all = mapper.list_dependencies(&EdgeFilter {
            limit: usize::MAX,
            ..Default::default()
        });

        for service in mapper.identify_single_points() {
            let incoming = all.iter().filter(|e| e.target_service == service).count();
            let predecessors: HashSet<&str> = all
                .iter()
                .filter(|e| e.target_service == service)
                .map(|e| e.source_service.as_str())
                .collect();
            let outgoing = all.iter().filter(|e| e.source_service == service).count();

            prop_assert!(incoming > 0);
            prop_assert!(incoming >= 3 || (predecessors.len() >= 2 && outgoing == 0));
        }
    }

    #[test]
    fn blast_radius_never_contains_the_service(edges in edge_strategy(), picked in 0..NODES) {
        let mapper = build(&edges);
        let service = name(picked);
        let radius = mapper.calculate_blast_radius(&service);

        prop_assert!(!radius.upstream_affected.contains(&service));
        prop_assert!(!radius.downstream_affected.contains(&service));
        prop_assert_eq!(
            radius.total_affected,
            radius.upstream_affected.len() + radius.downstream_affected.len()
        );
    }

    #[test]
    fn downstream_matches_independent_bfs_on_dags(pairs in dag_strategy(), picked in 0..NODES) {
        let mapper = build_dag(&pairs);
        let radius = mapper.calculate_blast_radius(&name(picked));

        let downstream: BTreeSet<String> = radius.downstream_affected.into_iter().collect();
        prop_assert_eq!(downstream, reachable_from(&pairs, picked));
    }

    #[test]
    fn depth_on_dags_is_the_longest_chain(pairs in dag_strategy()) {
        let mapper = build_dag(&pairs);
        prop_assert_eq!(mapper.max_depth(), longest_chain(&pairs));
    }

    #[test]
    fn critical_paths_never_revisit_and_respect_the_hop_limit(edges in edge_strategy()) {
        let mapper = build(&edges);

        for path in mapper.find_critical_paths() {
            prop_assert!(path.len() >= 2);
            prop_assert!(path.len() <= 5 + 1);
            let distinct: HashSet<&String> = path.iter().collect();
            prop_assert_eq!(distinct.len(), path.len());
        }
    }

    #[test]
    fn eviction_keeps_exactly_the_most_recent(max_edges in 1_usize..20, extra in 0_usize..20) {
        let mut mapper = mapper(max_edges, 5);
        let ids: Vec<_> = (0..max_edges + extra)
            .map(|i| mapper.register_dependency(edge(&name(i % NODES), "sink", Criticality::Low)).id)
            .collect();

        prop_assert_eq!(mapper.get_stats().total_edges, max_edges);
        for (position, id) in ids.iter().enumerate() {
            prop_assert_eq!(mapper.get_dependency(id).is_some(), position >= extra);
        }
    }
}
