//! Hash-based edge ID generation.
//!
//! Edge IDs are opaque strings of the form `{prefix}-{hash}` (e.g. `dep-k3f9x0qa`),
//! where the hash is a base36 rendering of a SHA256 digest over the edge's
//! endpoints, a registration sequence number, the current timestamp and a nonce.
//!
//! # Example
//!
//! ```
//! use depmap::id_generation::EdgeIdGenerator;
//!
//! let mut generator = EdgeIdGenerator::new("dep");
//! let id = generator.generate("checkout", "payments", |_| false);
//! assert!(id.as_str().starts_with("dep-"));
//! ```

use crate::domain::EdgeId;
use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

/// Default prefix for edge IDs.
pub const DEFAULT_EDGE_PREFIX: &str = "dep";

const BASE36_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const HASH_LENGTH: usize = 8;
const MAX_NONCE: u32 = 100;

/// Hash-based edge ID generator.
///
/// The generator does not remember the IDs it hands out. Callers pass an
/// `is_taken` predicate so collisions are checked against the edges that are
/// still live; evicted IDs simply stop being reserved.
#[derive(Debug, Clone)]
pub struct EdgeIdGenerator {
    prefix: String,
    sequence: u64,
}

impl EdgeIdGenerator {
    /// Create a generator producing IDs with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            sequence: 0,
        }
    }

    /// Generate a fresh ID for an edge between `source` and `target`.
    ///
    /// Retries with increasing nonces while `is_taken` reports a collision.
    /// If every nonce collides, the sequence number is appended, which is
    /// unique for the lifetime of the generator.
    pub fn generate(
        &mut self,
        source: &str,
        target: &str,
        is_taken: impl Fn(&str) -> bool,
    ) -> EdgeId {
        self.sequence += 1;

        for nonce in 0..MAX_NONCE {
            let id = self.hash_id(source, target, nonce);
            if !is_taken(&id) {
                if nonce > 0 {
                    debug!(nonce, "Generated unique edge ID after {} collision retries", nonce);
                }
                return EdgeId::new(id);
            }
        }

        warn!(
            max_nonce = MAX_NONCE,
            sequence = self.sequence,
            "All nonces exhausted, falling back to sequence-suffixed edge ID"
        );
        EdgeId::new(format!("{}.{}", self.hash_id(source, target, 0), self.sequence))
    }

    fn hash_id(&self, source: &str, target: &str, nonce: u32) -> String {
        let timestamp = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let content = format!(
            "{}|{}|{}|{}|{}",
            source, target, self.sequence, timestamp, nonce
        );

        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        let hash_bytes = hasher.finalize();

        format!("{}-{}", self.prefix, encode_base36(&hash_bytes[..8], HASH_LENGTH))
    }
}

impl Default for EdgeIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_EDGE_PREFIX)
    }
}

/// Encode up to eight bytes as a fixed-length base36 string.
///
/// Wrapping arithmetic keeps the conversion total for any input; the caller
/// only ever passes the first eight digest bytes.
fn encode_base36(bytes: &[u8], length: usize) -> String {
    let mut num: u64 = 0;
    for &byte in bytes {
        num = num.wrapping_shl(8).wrapping_add(u64::from(byte));
    }

    let mut result = Vec::with_capacity(length);
    while result.len() < length {
        let remainder = (num % 36) as usize;
        result.push(char::from(BASE36_CHARS[remainder]));
        num /= 36;
    }

    result.iter().rev().collect()
}
