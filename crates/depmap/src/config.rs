//! Configuration management for depmap.
//!
//! Limits are read from a YAML file and may be overridden from the
//! environment:
//!
//! ```yaml
//! max-edges: 10000
//! max-chain-depth: 5
//! max-history: 100
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tokio::fs;

/// Environment variable overriding `max-edges`
pub const ENV_MAX_EDGES: &str = "DEPMAP_MAX_EDGES";

/// Environment variable overriding `max-chain-depth`
pub const ENV_MAX_CHAIN_DEPTH: &str = "DEPMAP_MAX_CHAIN_DEPTH";

/// Environment variable overriding `max-history`
pub const ENV_MAX_HISTORY: &str = "DEPMAP_MAX_HISTORY";

/// Default capacity of the edge store
pub const DEFAULT_MAX_EDGES: usize = 10_000;

/// Default longest acceptable dependency chain, in hops
pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 5;

/// Default number of graph snapshots retained
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Limits governing a dependency mapper
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct MapperConfig {
    /// Edges retained before the oldest are evicted
    pub max_edges: usize,

    /// Chain depth above which the topology counts as too deep; also bounds
    /// critical-path walks
    pub max_chain_depth: usize,

    /// Graph snapshots retained in the history list
    pub max_history: usize,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            max_edges: DEFAULT_MAX_EDGES,
            max_chain_depth: DEFAULT_MAX_CHAIN_DEPTH,
            max_history: DEFAULT_MAX_HISTORY,
        }
    }
}

impl MapperConfig {
    /// Load configuration from a YAML file.
    ///
    /// Keys missing from the file take their default values. The result is
    /// validated before it is returned.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {}", e)))?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Reject limits that would make the mapper unusable.
    pub fn validate(&self) -> Result<()> {
        if self.max_edges == 0 {
            return Err(Error::Config("max-edges must be at least 1".to_string()));
        }
        if self.max_chain_depth == 0 {
            return Err(Error::Config(
                "max-chain-depth must be at least 1".to_string(),
            ));
        }
        if self.max_history == 0 {
            return Err(Error::Config("max-history must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Apply `DEPMAP_MAX_EDGES`, `DEPMAP_MAX_CHAIN_DEPTH` and
    /// `DEPMAP_MAX_HISTORY` overrides.
    ///
    /// Values that do not parse as a positive integer are logged and ignored.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|name| env::var(name).ok())
    }

    /// Apply overrides read through `lookup`, keyed by environment variable
    /// name.
    #[must_use]
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = read_limit(&lookup, ENV_MAX_EDGES) {
            self.max_edges = value;
        }
        if let Some(value) = read_limit(&lookup, ENV_MAX_CHAIN_DEPTH) {
            self.max_chain_depth = value;
        }
        if let Some(value) = read_limit(&lookup, ENV_MAX_HISTORY) {
            self.max_history = value;
        }
        self
    }
}

fn read_limit<F>(lookup: &F, name: &str) -> Option<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name).filter(|v| !v.is_empty())?;
    match raw.parse::<usize>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            tracing::warn!(
                env_var = name,
                value = %raw,
                "Invalid value (expected a positive integer), ignoring override"
            );
            None
        }
    }
}
