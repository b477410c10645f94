//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use depmap::config::MapperConfig;
use depmap::domain::{Criticality, DependencyType, NewEdge};
use depmap::mapper::DependencyMapper;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path of the depmap binary built by cargo for this test run
pub fn depmap_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_depmap"))
}

/// Run the depmap binary with colors disabled
pub fn run_depmap(args: &[&str]) -> Output {
    run_depmap_with_env(args, &[])
}

/// Run the depmap binary with extra environment variables set for the child
/// process only
pub fn run_depmap_with_env(args: &[&str], vars: &[(&str, &str)]) -> Output {
    Command::new(depmap_binary())
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("DEPMAP_MAX_EDGES")
        .env_remove("DEPMAP_MAX_CHAIN_DEPTH")
        .env_remove("DEPMAP_MAX_HISTORY")
        .envs(vars.iter().copied())
        .output()
        .expect("Failed to execute depmap binary")
}

/// A synchronous HTTP edge with the given criticality
pub fn edge(source: &str, target: &str, criticality: Criticality) -> NewEdge {
    NewEdge::new(source, target, DependencyType::SynchronousHttp, criticality)
}

/// Mapper with the given limits and a small history
pub fn mapper(max_edges: usize, max_chain_depth: usize) -> DependencyMapper {
    DependencyMapper::new(MapperConfig {
        max_edges,
        max_chain_depth,
        max_history: 10,
    })
    .unwrap()
}

/// Register medium-criticality edges for every `(source, target)` pair
pub fn register_all(mapper: &mut DependencyMapper, pairs: &[(&str, &str)]) {
    for (source, target) in pairs {
        mapper.register_dependency(edge(source, target, Criticality::Medium));
    }
}

/// Write an edge list as JSONL
pub fn write_edge_list(path: &Path, edges: &[NewEdge]) {
    let body: String = edges
        .iter()
        .map(|edge| serde_json::to_string(edge).unwrap() + "\n")
        .collect();
    std::fs::write(path, body).unwrap();
}
