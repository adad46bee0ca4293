//! Shared TTL Cache
//!
//! Thread-safe handle over a `CacheStore`, paired with the background sweep
//! that prunes it.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::cache::CacheStore;
use crate::error::{CacheError, Result};
use crate::tasks::spawn_sweep_task;

// == Cache ==
/// Self-pruning cache of byte payloads keyed by strings.
///
/// Cloning is cheap and every clone shares the same entries. Entries older
/// than the interval are removed by a background sweep that ticks once per
/// interval, so a `get` may still return an entry that is past its TTL until
/// the next tick.
///
/// After [`Cache::shutdown`], `add` and `get` fail with [`CacheError::Closed`].
/// Dropping the last clone also stops the sweep.
#[derive(Debug, Clone)]
pub struct Cache {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    store: Arc<Mutex<CacheStore>>,
    closed: watch::Sender<bool>,
    sweeper: Mutex<Option<JoinHandle<()>>>,
    interval: Duration,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweep task.
    ///
    /// Must be called from within a tokio runtime with timers enabled, which
    /// hosts the sweep.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `interval` is zero, no runtime is available or
    /// the runtime has no time driver.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(CacheError::InvalidConfiguration(
                "interval must be greater than zero".to_string(),
            ));
        }
        if Handle::try_current().is_err() {
            return Err(CacheError::InvalidConfiguration(
                "no tokio runtime available to run the sweep".to_string(),
            ));
        }

        let store = Arc::new(Mutex::new(CacheStore::new(interval)));
        let (closed, closed_rx) = watch::channel(false);
        let sweeper = spawn_sweep_task(store.clone(), interval, closed_rx)?;

        Ok(Self {
            inner: Arc::new(Inner {
                store,
                closed,
                sweeper: Mutex::new(Some(sweeper)),
                interval,
            }),
        })
    }

    // == Add ==
    /// Inserts or overwrites `key` with `payload`, stamped with the current time.
    ///
    /// Key and payload are converted before the lock is taken.
    pub fn add(&self, key: impl Into<String>, payload: impl Into<Bytes>) -> Result<()> {
        let key = key.into();
        let payload = payload.into();

        let mut store = self.inner.store.lock();
        if self.is_closed() {
            return Err(CacheError::Closed);
        }
        store.add(key, payload);
        Ok(())
    }

    // == Get ==
    /// Returns the payload stored under `key`, or `None` on a miss.
    ///
    /// The returned `Bytes` shares the cached buffer.
    pub fn get(&self, key: &str) -> Result<Option<Bytes>> {
        let store = self.inner.store.lock();
        if self.is_closed() {
            return Err(CacheError::Closed);
        }
        Ok(store.get(key))
    }

    // == Shutdown ==
    /// Stops the sweep and closes the cache.
    ///
    /// The first call returns the sweep task's handle so callers can await its
    /// exit. Subsequent calls do nothing and return `None`.
    pub fn shutdown(&self) -> Option<JoinHandle<()>> {
        let handle = self.inner.sweeper.lock().take()?;
        // Flip the flag under the store lock so it orders against add/get
        let _store = self.inner.store.lock();
        self.inner.closed.send_replace(true);
        Some(handle)
    }

    /// Returns true once `shutdown` has been called.
    pub fn is_closed(&self) -> bool {
        *self.inner.closed.borrow()
    }

    /// Time-to-live and sweep period.
    pub fn interval(&self) -> Duration {
        self.inner.interval
    }

    /// Number of entries currently held, expired or not.
    pub fn len(&self) -> usize {
        self.inner.store.lock().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.store.lock().is_empty()
    }
}
