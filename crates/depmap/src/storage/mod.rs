//! Storage and access layer for dependency edges.
//!
//! - [`edge_store`]: the bounded, insertion-ordered edge collection
//! - [`import`]: JSONL edge list ingestion
//! - [`TopologyService`]: async, lock-guarded access for concurrent hosts
//!
//! # Thread Safety
//!
//! [`DependencyMapper`] is single-threaded. Hosts that serve requests
//! concurrently wrap it in [`SharedMapper`] (`Arc<Mutex<DependencyMapper>>`);
//! every trait method acquires the lock once, so each call sees and produces
//! a consistent snapshot.
//!
//! # Example
//!
//! ```
//! use depmap::config::MapperConfig;
//! use depmap::domain::{Criticality, DependencyType, NewEdge};
//! use depmap::storage::{new_shared_mapper, TopologyService};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let service = new_shared_mapper(MapperConfig::default())?;
//!
//!     service
//!         .register_dependency(NewEdge::new(
//!             "orders",
//!             "inventory",
//!             DependencyType::AsynchronousMessage,
//!             Criticality::High,
//!         ))
//!         .await;
//!
//!     let radius = service.calculate_blast_radius("inventory").await;
//!     assert_eq!(radius.upstream_affected, ["orders"]);
//!     Ok(())
//! }
//! ```

pub mod edge_store;
pub mod import;
mod service;

use crate::config::MapperConfig;
use crate::domain::{
    BlastRadius, DependencyEdge, DependencyGraph, EdgeFilter, EdgeId, MapperStats, NewEdge,
};
use crate::error::Result;
use crate::mapper::DependencyMapper;
use crate::report::MapReport;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Lock-guarded mapper handle. Clone it to share between tasks.
pub type SharedMapper = Arc<Mutex<DependencyMapper>>;

/// Create a shared mapper with the given limits.
///
/// # Errors
///
/// Returns `Error::Config` if the configuration fails validation.
pub fn new_shared_mapper(config: MapperConfig) -> Result<SharedMapper> {
    Ok(Arc::new(Mutex::new(DependencyMapper::new(config)?)))
}

/// Async access to the topology engine.
///
/// Mirrors the [`DependencyMapper`] surface. Implementations must be
/// `Send + Sync` so a handle can be used from any task.
///
/// # Method Categories
///
/// - **Edges**: `register_dependency`, `register_dependencies`, `get_dependency`, `list_dependencies`
/// - **Analysis**: `build_graph`, `detect_cycles`, `identify_single_points`, `max_depth`,
///   `find_critical_path`, `find_critical_paths`, `calculate_blast_radius`
/// - **Reporting**: `generate_map_report`, `graph_history`, `get_stats`
/// - **Maintenance**: `clear_data`
#[async_trait]
pub trait TopologyService: Send + Sync {
    // ========== Edges ==========

    /// Register one dependency edge.
    async fn register_dependency(&self, new_edge: NewEdge) -> DependencyEdge;

    /// Register a batch of edges under a single lock acquisition, in order.
    async fn register_dependencies(&self, new_edges: Vec<NewEdge>) -> Vec<DependencyEdge>;

    /// Look up an edge by ID. Returns `None` for unknown or evicted IDs.
    async fn get_dependency(&self, id: &EdgeId) -> Option<DependencyEdge>;

    /// The most recent matching edges, oldest first.
    async fn list_dependencies(&self, filter: &EdgeFilter) -> Vec<DependencyEdge>;

    // ========== Analysis ==========

    /// Run every analysis and record the snapshot.
    async fn build_graph(&self) -> DependencyGraph;

    /// Cycles in the current topology.
    async fn detect_cycles(&self) -> Vec<Vec<String>>;

    /// Sorted single points of failure.
    async fn identify_single_points(&self) -> Vec<String>;

    /// Longest dependency chain, in hops.
    async fn max_depth(&self) -> usize;

    /// Critical path starting at `start`.
    async fn find_critical_path(&self, start: &str) -> Vec<String>;

    /// Critical paths seeded from every critical/high edge.
    async fn find_critical_paths(&self) -> Vec<Vec<String>>;

    /// Blast radius of `service`.
    async fn calculate_blast_radius(&self, service: &str) -> BlastRadius;

    // ========== Reporting ==========

    /// Build a snapshot and wrap it in a report.
    async fn generate_map_report(&self) -> MapReport;

    /// Retained snapshots, oldest first.
    async fn graph_history(&self) -> Vec<DependencyGraph>;

    /// Summary counters.
    async fn get_stats(&self) -> MapperStats;

    // ========== Maintenance ==========

    /// Drop all edges and snapshots.
    async fn clear_data(&self);
}
