//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A cached payload together with the moment it was stored.
///
/// Entries are never mutated in place; re-adding a key replaces the whole entry.
/// The payload is a refcounted `Bytes`, so cloning it never copies the body.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub payload: Bytes,
    /// Insertion time
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(payload: Bytes) -> Self {
        Self::with_created_at(payload, Instant::now())
    }

    /// Creates an entry with an explicit creation time.
    pub fn with_created_at(payload: Bytes, created_at: Instant) -> Self {
        Self {
            payload,
            created_at,
        }
    }

    // == Age ==
    /// Age of the entry as seen at `now`. Saturates to zero if `now` is earlier.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `interval` at `now`.
    ///
    /// Boundary condition: an entry whose age equals `interval` exactly is
    /// still live. Only a strictly greater age expires it.
    pub fn is_expired_at(&self, now: Instant, interval: Duration) -> bool {
        self.age_at(now) > interval
    }
}
