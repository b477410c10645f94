//! The dependency mapper facade.
//!
//! [`DependencyMapper`] owns the edge store, the graph snapshot history and
//! the configured limits. Registration is the only way to change the
//! topology; every analytical call rebuilds a [`TopologyGraph`] from the
//! current edges and runs the relevant algorithm on it.
//!
//! # Example
//!
//! ```
//! use depmap::config::MapperConfig;
//! use depmap::domain::{Criticality, DependencyType, HealthStatus, NewEdge};
//! use depmap::mapper::DependencyMapper;
//!
//! let mut mapper = DependencyMapper::new(MapperConfig::default()).unwrap();
//! mapper.register_dependency(NewEdge::new(
//!     "checkout",
//!     "payments",
//!     DependencyType::SynchronousHttp,
//!     Criticality::Critical,
//! ));
//!
//! let graph = mapper.build_graph();
//! assert_eq!(graph.total_services, 2);
//! assert_eq!(graph.health, HealthStatus::Healthy);
//! ```

use crate::config::MapperConfig;
use crate::domain::{
    BlastRadius, DependencyEdge, DependencyGraph, EdgeFilter, EdgeId, MapperStats, NewEdge,
};
use crate::error::Result;
use crate::graph::{
    blast_radius, critical_path, cycles, depth, health, spof, TopologyGraph,
};
use crate::report::MapReport;
use crate::storage::edge_store::EdgeStore;
use chrono::Utc;
use std::collections::{BTreeMap, VecDeque};
use tracing::{debug, info};

/// Service dependency topology engine.
///
/// Not thread-safe on its own; see [`crate::storage::SharedMapper`] for a
/// lock-guarded handle.
#[derive(Debug)]
pub struct DependencyMapper {
    config: MapperConfig,
    store: EdgeStore,
    history: VecDeque<DependencyGraph>,
    graphs_computed: usize,
}

impl DependencyMapper {
    /// Create an empty mapper.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the configuration fails validation.
    pub fn new(config: MapperConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store: EdgeStore::new(config.max_edges),
            history: VecDeque::with_capacity(config.max_history.min(64)),
            graphs_computed: 0,
            config,
        })
    }

    /// The limits this mapper was created with.
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Register a dependency edge.
    ///
    /// Always succeeds. When the store is full the oldest edges are evicted.
    pub fn register_dependency(&mut self, new_edge: NewEdge) -> DependencyEdge {
        let (edge, evicted) = self.store.register(new_edge);

        debug!(
            edge_id = %edge.id,
            source = %edge.source_service,
            target = %edge.target_service,
            dependency_type = %edge.dependency_type,
            criticality = %edge.criticality,
            "Registered dependency"
        );
        if evicted > 0 {
            debug!(
                evicted,
                max_edges = self.store.capacity(),
                "Evicted oldest dependencies"
            );
        }

        edge
    }

    /// Look up an edge by ID.
    pub fn get_dependency(&self, id: &EdgeId) -> Option<DependencyEdge> {
        self.store.get(id).cloned()
    }

    /// The most recent matching edges, oldest first.
    pub fn list_dependencies(&self, filter: &EdgeFilter) -> Vec<DependencyEdge> {
        self.store.list(filter)
    }

    fn topology(&self) -> TopologyGraph {
        TopologyGraph::from_edges(self.store.iter())
    }

    /// Source-to-targets mapping of the current edges.
    pub fn adjacency(&self) -> BTreeMap<String, Vec<String>> {
        self.topology().adjacency()
    }

    /// Run every structural analysis and record the snapshot in the history.
    pub fn build_graph(&mut self) -> DependencyGraph {
        let topology = self.topology();

        let cycles = cycles::detect_cycles(&topology);
        let single_points = spof::single_points(&topology);
        let depth = depth::max_depth(&topology);
        let critical_paths =
            critical_path::all_critical_paths(&topology, self.config.max_chain_depth);
        let health = health::assess_health(
            &cycles,
            &single_points,
            depth,
            self.config.max_chain_depth,
        );

        let graph = DependencyGraph {
            total_services: topology.node_count(),
            total_edges: topology.edge_count(),
            depth,
            cycles,
            single_points,
            critical_paths,
            health,
            created_at: Utc::now(),
        };

        if self.history.len() >= self.config.max_history {
            self.history.pop_front();
        }
        self.history.push_back(graph.clone());
        self.graphs_computed += 1;

        info!(
            services = graph.total_services,
            edges = graph.total_edges,
            depth = graph.depth,
            cycles = graph.cycles.len(),
            single_points = graph.single_points.len(),
            health = %graph.health,
            "Built dependency graph"
        );

        graph
    }

    /// Cycles in the current topology.
    pub fn detect_cycles(&self) -> Vec<Vec<String>> {
        cycles::detect_cycles(&self.topology())
    }

    /// Sorted single points of failure.
    pub fn identify_single_points(&self) -> Vec<String> {
        spof::single_points(&self.topology())
    }

    /// Longest dependency chain, in hops.
    pub fn max_depth(&self) -> usize {
        depth::max_depth(&self.topology())
    }

    /// Critical path starting at `start`, bounded by `max_chain_depth` hops.
    pub fn find_critical_path(&self, start: &str) -> Vec<String> {
        critical_path::critical_path(&self.topology(), start, self.config.max_chain_depth)
    }

    /// Critical paths seeded from every critical/high edge.
    pub fn find_critical_paths(&self) -> Vec<Vec<String>> {
        critical_path::all_critical_paths(&self.topology(), self.config.max_chain_depth)
    }

    /// Upstream and downstream services affected by a failure of `service`.
    pub fn calculate_blast_radius(&self, service: &str) -> BlastRadius {
        blast_radius::blast_radius(&self.topology(), service)
    }

    /// Build a graph snapshot and wrap it in a report with edge distributions
    /// and recommendations.
    pub fn generate_map_report(&mut self) -> MapReport {
        let graph = self.build_graph();
        MapReport::new(graph, self.store.iter(), self.config.max_chain_depth)
    }

    /// Snapshots from previous `build_graph` calls, oldest first.
    pub fn graph_history(&self) -> impl ExactSizeIterator<Item = &DependencyGraph> {
        self.history.iter()
    }

    /// Drop every edge and every recorded snapshot.
    pub fn clear_data(&mut self) {
        let edges = self.store.len();
        self.store.clear();
        self.history.clear();
        self.graphs_computed = 0;
        info!(edges, "Cleared dependency data");
    }

    /// Summary counters.
    pub fn get_stats(&self) -> MapperStats {
        let topology = self.topology();
        MapperStats {
            total_edges: self.store.len(),
            total_services: topology.node_count(),
            total_graphs: self.graphs_computed,
            services: topology.service_names(),
        }
    }
}

impl Default for DependencyMapper {
    fn default() -> Self {
        let config = MapperConfig::default();
        Self {
            store: EdgeStore::new(config.max_edges),
            history: VecDeque::new(),
            graphs_computed: 0,
            config,
        }
    }
}
