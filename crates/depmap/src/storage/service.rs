//! TopologyService trait implementation for the shared mapper.

use super::{SharedMapper, TopologyService};
use crate::domain::{
    BlastRadius, DependencyEdge, DependencyGraph, EdgeFilter, EdgeId, MapperStats, NewEdge,
};
use crate::report::MapReport;
use async_trait::async_trait;

#[async_trait]
impl TopologyService for SharedMapper {
    async fn register_dependency(&self, new_edge: NewEdge) -> DependencyEdge {
        self.lock().await.register_dependency(new_edge)
    }

    async fn register_dependencies(&self, new_edges: Vec<NewEdge>) -> Vec<DependencyEdge> {
        let mut inner = self.lock().await;
        new_edges
            .into_iter()
            .map(|new_edge| inner.register_dependency(new_edge))
            .collect()
    }

    async fn get_dependency(&self, id: &EdgeId) -> Option<DependencyEdge> {
        self.lock().await.get_dependency(id)
    }

    async fn list_dependencies(&self, filter: &EdgeFilter) -> Vec<DependencyEdge> {
        self.lock().await.list_dependencies(filter)
    }

    async fn build_graph(&self) -> DependencyGraph {
        self.lock().await.build_graph()
    }

    async fn detect_cycles(&self) -> Vec<Vec<String>> {
        self.lock().await.detect_cycles()
    }

    async fn identify_single_points(&self) -> Vec<String> {
        self.lock().await.identify_single_points()
    }

    async fn max_depth(&self) -> usize {
        self.lock().await.max_depth()
    }

    async fn find_critical_path(&self, start: &str) -> Vec<String> {
        self.lock().await.find_critical_path(start)
    }

    async fn find_critical_paths(&self) -> Vec<Vec<String>> {
        self.lock().await.find_critical_paths()
    }

    async fn calculate_blast_radius(&self, service: &str) -> BlastRadius {
        self.lock().await.calculate_blast_radius(service)
    }

    async fn generate_map_report(&self) -> MapReport {
        self.lock().await.generate_map_report()
    }

    async fn graph_history(&self) -> Vec<DependencyGraph> {
        self.lock().await.graph_history().cloned().collect()
    }

    async fn get_stats(&self) -> MapperStats {
        self.lock().await.get_stats()
    }

    async fn clear_data(&self) {
        self.lock().await.clear_data();
    }
}
