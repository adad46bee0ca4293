//! Cache Store Module
//!
//! The unsynchronized key/value map behind the shared cache handle.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Maps keys to payloads and removes entries older than `interval` on sweep.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Time-to-live, also the sweep period
    interval: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store with the given TTL.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            interval,
        }
    }

    // == Add ==
    /// Inserts or overwrites `key`, stamping it with the current time.
    pub fn add(&mut self, key: String, payload: Bytes) {
        self.entries.insert(key, CacheEntry::new(payload));
    }

    // == Get ==
    /// Returns a handle to the payload for `key` if present.
    ///
    /// Only the refcount is bumped; the body is never copied. Age is not
    /// checked here; expiry is the sweep's job.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.entries.get(key).map(|entry| entry.payload.clone())
    }

    // == Sweep ==
    /// Removes every entry older than the interval as of `now`.
    ///
    /// Keys are collected first and deleted in a second pass.
    /// Returns the number of entries removed.
    pub fn sweep(&mut self, now: Instant) -> usize {
        let interval = self.interval;
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now, interval))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        count
    }

    /// Returns the configured interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn insert_entry(&mut self, key: &str, entry: CacheEntry) {
        self.entries.insert(key.to_string(), entry);
    }
}
