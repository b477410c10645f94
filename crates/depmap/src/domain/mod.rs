//! Domain types for the service dependency topology.
//!
//! This module contains the core value types: dependency edges between
//! services, the categorical fields that describe them, and the derived
//! snapshots produced by graph analysis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default maximum number of edges returned by a listing.
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Opaque unique identifier for a dependency edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub String);

impl EdgeId {
    /// Create a new edge ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EdgeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EdgeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Transport or coupling kind of a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyType {
    /// Blocking request/response over HTTP
    SynchronousHttp,

    /// Queue or event-bus message
    AsynchronousMessage,

    /// Database access
    Database,

    /// Cache lookup
    Cache,

    /// Shared file or object storage
    SharedStorage,
}

impl DependencyType {
    /// All dependency types, in declaration order.
    pub const ALL: [DependencyType; 5] = [
        DependencyType::SynchronousHttp,
        DependencyType::AsynchronousMessage,
        DependencyType::Database,
        DependencyType::Cache,
        DependencyType::SharedStorage,
    ];

    /// Wire name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            DependencyType::SynchronousHttp => "synchronous-http",
            DependencyType::AsynchronousMessage => "asynchronous-message",
            DependencyType::Database => "database",
            DependencyType::Cache => "cache",
            DependencyType::SharedStorage => "shared-storage",
        }
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How badly a caller suffers when the dependency fails.
///
/// Variants are declared from least to most severe, so the derived `Ord`
/// ranks `Critical` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    /// Caller degrades gracefully without it
    Optional,

    /// Minor impact
    Low,

    /// Noticeable impact
    Medium,

    /// Major impact
    High,

    /// Caller cannot function without it
    Critical,
}

impl Criticality {
    /// All criticality levels, most severe first.
    pub const ALL: [Criticality; 5] = [
        Criticality::Critical,
        Criticality::High,
        Criticality::Medium,
        Criticality::Low,
        Criticality::Optional,
    ];

    /// Whether critical-path seeding and hop preference apply to this level.
    pub fn is_elevated(self) -> bool {
        matches!(self, Criticality::Critical | Criticality::High)
    }

    /// Wire name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Criticality::Critical => "critical",
            Criticality::High => "high",
            Criticality::Medium => "medium",
            Criticality::Low => "low",
            Criticality::Optional => "optional",
        }
    }
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed "source depends on target" relationship.
///
/// Created once by registration and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// Unique identifier assigned at registration
    pub id: EdgeId,

    /// The dependent service
    pub source_service: String,

    /// The service being depended upon
    pub target_service: String,

    /// Coupling kind
    pub dependency_type: DependencyType,

    /// Severity of the dependency
    pub criticality: Criticality,

    /// Observed latency, informational only
    pub latency_ms: f64,

    /// Observed failure rate, informational only
    pub failure_rate_pct: f64,

    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

/// Data for registering a new dependency edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEdge {
    /// The dependent service
    pub source_service: String,

    /// The service being depended upon
    pub target_service: String,

    /// Coupling kind
    pub dependency_type: DependencyType,

    /// Severity of the dependency
    pub criticality: Criticality,

    /// Observed latency in milliseconds
    #[serde(default)]
    pub latency_ms: f64,

    /// Observed failure rate in percent
    #[serde(default)]
    pub failure_rate_pct: f64,
}

impl NewEdge {
    /// Create edge data with zeroed latency and failure rate.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        dependency_type: DependencyType,
        criticality: Criticality,
    ) -> Self {
        Self {
            source_service: source.into(),
            target_service: target.into(),
            dependency_type,
            criticality,
            latency_ms: 0.0,
            failure_rate_pct: 0.0,
        }
    }

    /// Set the observed latency.
    #[must_use]
    pub fn with_latency(mut self, latency_ms: f64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Set the observed failure rate.
    #[must_use]
    pub fn with_failure_rate(mut self, failure_rate_pct: f64) -> Self {
        self.failure_rate_pct = failure_rate_pct;
        self
    }

    /// Check the informational metrics.
    ///
    /// Registration itself accepts anything; this is used by the import path
    /// to reject records that could not have come from a real measurement.
    pub fn validate(&self) -> Result<(), String> {
        if !self.latency_ms.is_finite() || self.latency_ms < 0.0 {
            return Err(format!(
                "latency_ms must be a non-negative number, got {}",
                self.latency_ms
            ));
        }
        if !self.failure_rate_pct.is_finite() || self.failure_rate_pct < 0.0 {
            return Err(format!(
                "failure_rate_pct must be a non-negative number, got {}",
                self.failure_rate_pct
            ));
        }
        Ok(())
    }
}

/// Filter for listing stored edges
#[derive(Debug, Clone)]
pub struct EdgeFilter {
    /// Exact match on the source service
    pub source: Option<String>,

    /// Exact match on the target service
    pub target: Option<String>,

    /// Keep at most this many of the most recent matches
    pub limit: usize,
}

impl Default for EdgeFilter {
    fn default() -> Self {
        Self {
            source: None,
            target: None,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl EdgeFilter {
    /// Whether an edge passes the source/target filters.
    pub fn matches(&self, edge: &DependencyEdge) -> bool {
        self.source
            .as_deref()
            .is_none_or(|s| s == edge.source_service)
            && self
                .target
                .as_deref()
                .is_none_or(|t| t == edge.target_service)
    }
}

/// Ordinal structural health of the topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStatus {
    /// No structural issues
    Healthy,

    /// At least one dependency cycle
    HasCycles,

    /// At least one single point of failure
    SinglePoints,

    /// Longest chain exceeds the configured limit
    DeepChains,

    /// A combination of issues
    Fragile,
}

impl HealthStatus {
    /// Wire name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "HEALTHY",
            HealthStatus::HasCycles => "HAS_CYCLES",
            HealthStatus::SinglePoints => "SINGLE_POINTS",
            HealthStatus::DeepChains => "DEEP_CHAINS",
            HealthStatus::Fragile => "FRAGILE",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the topology's structural analysis.
///
/// Recomputed from scratch on every build and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyGraph {
    /// Distinct services across sources and targets
    pub total_services: usize,

    /// Stored edges, parallel edges included
    pub total_edges: usize,

    /// Longest simple dependency chain, in hops
    pub depth: usize,

    /// Detected cycles; each repeats its first service at the end
    pub cycles: Vec<Vec<String>>,

    /// Single points of failure, sorted
    pub single_points: Vec<String>,

    /// Walks seeded from critical/high edges
    pub critical_paths: Vec<Vec<String>>,

    /// Overall classification
    pub health: HealthStatus,

    /// When the snapshot was computed
    pub created_at: DateTime<Utc>,
}

/// Services transitively affected by a failure of one service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlastRadius {
    /// The failing service
    pub service: String,

    /// Services that directly or indirectly depend on it, sorted
    pub upstream_affected: Vec<String>,

    /// Services it directly or indirectly depends on, sorted
    pub downstream_affected: Vec<String>,

    /// Combined size of both sets
    pub total_affected: usize,
}

/// Summary counters for a mapper instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperStats {
    /// Stored edges
    pub total_edges: usize,

    /// Distinct services across stored edges
    pub total_services: usize,

    /// Graph snapshots computed since the last clear
    pub total_graphs: usize,

    /// Sorted service names
    pub services: Vec<String>,
}
