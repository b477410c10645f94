//! Bounded, insertion-ordered edge storage.
//!
//! Edges live in a fixed-capacity `VecDeque` used as a ring buffer. Once the
//! store is full, each registration evicts the oldest edge, so survivors keep
//! their chronological order.
//!
//! Every edge is tagged with a monotonically increasing sequence number. The
//! ID index maps to that sequence, which turns an ID lookup into a constant
//! time offset from the front of the deque.

use crate::domain::{DependencyEdge, EdgeFilter, EdgeId, NewEdge};
use crate::id_generation::EdgeIdGenerator;
use chrono::Utc;
use std::collections::{HashMap, VecDeque};

/// Stored edge together with its insertion sequence number
#[derive(Debug, Clone)]
struct Slot {
    seq: u64,
    edge: DependencyEdge,
}

/// Ordered collection of dependency edges with FIFO eviction.
#[derive(Debug)]
pub struct EdgeStore {
    slots: VecDeque<Slot>,
    index: HashMap<EdgeId, u64>,
    capacity: usize,
    next_seq: u64,
    id_generator: EdgeIdGenerator,
}

impl EdgeStore {
    /// Create an empty store holding at most `capacity` edges.
    ///
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: VecDeque::with_capacity(capacity),
            index: HashMap::new(),
            capacity,
            next_seq: 0,
            id_generator: EdgeIdGenerator::default(),
        }
    }

    /// Maximum number of retained edges.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored edges.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the store holds no edges.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Append a new edge, evicting the oldest ones if over capacity.
    ///
    /// Always succeeds. Returns the stored edge and the number of evicted
    /// edges.
    pub fn register(&mut self, new_edge: NewEdge) -> (DependencyEdge, usize) {
        let index = &self.index;
        let id = self.id_generator.generate(
            &new_edge.source_service,
            &new_edge.target_service,
            |candidate| index.contains_key(&EdgeId::from(candidate)),
        );

        let edge = DependencyEdge {
            id,
            source_service: new_edge.source_service,
            target_service: new_edge.target_service,
            dependency_type: new_edge.dependency_type,
            criticality: new_edge.criticality,
            latency_ms: new_edge.latency_ms,
            failure_rate_pct: new_edge.failure_rate_pct,
            created_at: Utc::now(),
        };

        let mut evicted = 0;
        while self.slots.len() >= self.capacity {
            if let Some(oldest) = self.slots.pop_front() {
                self.index.remove(&oldest.edge.id);
                evicted += 1;
            }
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(edge.id.clone(), seq);
        self.slots.push_back(Slot {
            seq,
            edge: edge.clone(),
        });

        (edge, evicted)
    }

    /// Look up an edge by ID.
    pub fn get(&self, id: &EdgeId) -> Option<&DependencyEdge> {
        let seq = *self.index.get(id)?;
        let front = self.slots.front()?.seq;
        let offset = usize::try_from(seq.checked_sub(front)?).ok()?;
        self.slots.get(offset).map(|slot| &slot.edge)
    }

    /// The last `filter.limit` matching edges, in insertion order.
    pub fn list(&self, filter: &EdgeFilter) -> Vec<DependencyEdge> {
        let mut matched: Vec<DependencyEdge> = self
            .slots
            .iter()
            .rev()
            .map(|slot| &slot.edge)
            .filter(|edge| filter.matches(edge))
            .take(filter.limit)
            .cloned()
            .collect();
        matched.reverse();
        matched
    }

    /// Iterate over all edges, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DependencyEdge> {
        self.slots.iter().map(|slot| &slot.edge)
    }

    /// Remove every edge. Sequence numbers and ID generation keep advancing.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Criticality, DependencyType};

    fn edge(source: &str, target: &str) -> NewEdge {
        NewEdge::new(source, target, DependencyType::SynchronousHttp, Criticality::Medium)
    }

    #[test]
    fn register_assigns_id_and_timestamp() {
        let mut store = EdgeStore::new(10);
        let before = Utc::now();
        let (stored, evicted) = store.register(edge("api", "db").with_latency(12.5));

        assert_eq!(evicted, 0);
        assert!(stored.id.as_str().starts_with("dep-"));
        assert!(stored.created_at >= before);
        assert_eq!(stored.latency_ms, 12.5);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_finds_stored_edge_and_misses_unknown() {
        let mut store = EdgeStore::new(10);
        let (first, _) = store.register(edge("a", "b"));
        let (second, _) = store.register(edge("b", "c"));

        assert_eq!(store.get(&first.id), Some(&first));
        assert_eq!(store.get(&second.id), Some(&second));
        assert!(store.get(&EdgeId::new("dep-missing")).is_none());
    }

    #[test]
    fn eviction_drops_oldest_and_keeps_order() {
        let mut store = EdgeStore::new(3);
        let ids: Vec<EdgeId> = (0..5)
            .map(|i| store.register(edge(&format!("s{i}"), "t")).0.id)
            .collect();

        assert_eq!(store.len(), 3);
        assert!(store.get(&ids[0]).is_none());
        assert!(store.get(&ids[1]).is_none());

        let sources: Vec<&str> = store.iter().map(|e| e.source_service.as_str()).collect();
        assert_eq!(sources, ["s2", "s3", "s4"]);

        // Lookups must still resolve after the front has moved.
        for id in &ids[2..] {
            assert_eq!(store.get(id).map(|e| &e.id), Some(id));
        }
    }

    #[test]
    fn register_reports_eviction_count() {
        let mut store = EdgeStore::new(1);
        assert_eq!(store.register(edge("a", "b")).1, 0);
        assert_eq!(store.register(edge("b", "c")).1, 1);
    }

    #[test]
    fn list_truncates_from_the_tail_in_chronological_order() {
        let mut store = EdgeStore::new(10);
        for i in 0..6 {
            store.register(edge("api", &format!("t{i}")));
        }
        store.register(edge("web", "t9"));

        let filter = EdgeFilter {
            source: Some("api".to_string()),
            limit: 3,
            ..Default::default()
        };
        let targets: Vec<String> = store
            .list(&filter)
            .into_iter()
            .map(|e| e.target_service)
            .collect();
        assert_eq!(targets, ["t3", "t4", "t5"]);
    }

    #[test]
    fn list_with_no_match_is_empty() {
        let mut store = EdgeStore::new(10);
        store.register(edge("a", "b"));

        let filter = EdgeFilter {
            target: Some("zzz".to_string()),
            ..Default::default()
        };
        assert!(store.list(&filter).is_empty());
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut store = EdgeStore::new(10);
        store.register(edge("a", "b"));
        store.register(edge("a", "b"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn clear_empties_store() {
        let mut store = EdgeStore::new(10);
        let (stored, _) = store.register(edge("a", "b"));
        store.clear();

        assert!(store.is_empty());
        assert!(store.get(&stored.id).is_none());

        let (after, _) = store.register(edge("c", "d"));
        assert_eq!(store.get(&after.id), Some(&after));
    }
}
