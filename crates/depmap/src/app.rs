//! Application context for CLI command execution.
//!
//! [`App`] resolves the mapper limits (config file, then environment
//! overrides), creates the shared mapper and loads the edge list the
//! analysis commands run against.
//!
//! # Example
//!
//! ```no_run
//! use depmap::app::App;
//! use depmap::storage::TopologyService;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let app = App::load(None, Some(Path::new("edges.jsonl"))).await?;
//!     let graph = app.service().build_graph().await;
//!     println!("{}", graph.health);
//!     Ok(())
//! }
//! ```

use crate::config::MapperConfig;
use crate::error::Result;
use crate::storage::import::{load_edges_from_jsonl, ImportWarning};
use crate::storage::{new_shared_mapper, SharedMapper, TopologyService};
use std::path::Path;
use tracing::info;

/// Application context for CLI operations.
#[derive(Debug)]
pub struct App {
    service: SharedMapper,
    config: MapperConfig,
    import_warnings: Vec<ImportWarning>,
}

impl App {
    /// Build the context from an optional config file and an optional edge list.
    ///
    /// Without a config file the defaults apply. Environment overrides are
    /// applied on top either way.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read, parsed or validated
    /// - The edge list cannot be opened
    pub async fn load(config_path: Option<&Path>, edges_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => MapperConfig::load(path).await?,
            None => MapperConfig::default(),
        }
        .with_env_overrides();

        let service = new_shared_mapper(config.clone())?;

        let mut import_warnings = Vec::new();
        if let Some(path) = edges_path {
            let (edges, warnings) = load_edges_from_jsonl(path).await?;
            info!(
                path = %path.display(),
                edges = edges.len(),
                skipped = warnings.len(),
                "Loaded edge list"
            );
            service.register_dependencies(edges).await;
            import_warnings = warnings;
        }

        Ok(Self {
            service,
            config,
            import_warnings,
        })
    }

    /// The shared mapper handle.
    pub fn service(&self) -> &SharedMapper {
        &self.service
    }

    /// The effective limits.
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Lines of the edge list that were skipped.
    pub fn import_warnings(&self) -> &[ImportWarning] {
        &self.import_warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_app_without_inputs_is_empty() {
        let app = App::load(None, None).await.unwrap();

        assert_eq!(app.service().get_stats().await.total_edges, 0);
        assert!(app.import_warnings().is_empty());
    }

    #[tokio::test]
    async fn test_app_loads_config_and_edges() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("depmap.yaml");
        let edges_path = temp_dir.path().join("edges.jsonl");

        tokio::fs::write(&config_path, "max-chain-depth: 2\n")
            .await
            .unwrap();
        tokio::fs::write(
            &edges_path,
            concat!(
                r#"{"source_service":"web","target_service":"api","dependency_type":"synchronous-http","criticality":"critical"}"#,
                "\n",
                "garbage\n",
                r#"{"source_service":"api","target_service":"db","dependency_type":"database","criticality":"high"}"#,
                "\n",
            ),
        )
        .await
        .unwrap();

        let app = App::load(Some(&config_path), Some(&edges_path))
            .await
            .unwrap();

        assert_eq!(app.config().max_chain_depth, 2);
        assert_eq!(app.service().get_stats().await.total_edges, 2);
        assert_eq!(app.import_warnings().len(), 1);
        assert_eq!(app.import_warnings()[0].line_number, 2);
    }

    #[tokio::test]
    async fn test_app_missing_edge_list_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = App::load(None, Some(&temp_dir.path().join("missing.jsonl"))).await;
        assert!(result.is_err());
    }
}
