//! Cache Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::cache::CacheStore;
use crate::error::{CacheError, Result};

/// Spawns a background task that sweeps `store` once per `interval`.
///
/// The first sweep runs one full interval after this call. Each pass takes the
/// store lock, reads the clock and drops every entry older than the interval.
///
/// The task exits when `shutdown` turns `true` or its sender is dropped.
///
/// The ticker is built on the caller's thread, so a runtime without a time
/// driver is reported here instead of killing the task after it starts.
///
/// # Arguments
/// * `store` - Shared store to prune
/// * `interval` - Tick period, equal to the entry TTL
/// * `shutdown` - Receiver that flips to `true` on shutdown
///
/// # Returns
/// A JoinHandle for the spawned task, resolved once the loop has exited.
///
/// # Errors
/// `InvalidConfiguration` if the current runtime has timers disabled.
pub fn spawn_sweep_task(
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> Result<JoinHandle<()>> {
    let start = Instant::now() + interval;

    // tokio offers no query for the time driver; building a timer panics without one
    let mut ticker = panic::catch_unwind(AssertUnwindSafe(|| time::interval_at(start, interval)))
        .map_err(|_| {
            CacheError::InvalidConfiguration(
                "the tokio runtime has timers disabled".to_string(),
            )
        })?;
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    Ok(tokio::spawn(async move {
        debug!("Starting cache sweep task with interval of {:?}", interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = {
                        let mut guard = store.lock();
                        guard.sweep(Instant::now())
                    };

                    if removed > 0 {
                        debug!("Cache sweep: removed {} expired entries", removed);
                    } else {
                        trace!("Cache sweep: no expired entries found");
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        debug!("Cache sweep task stopped");
    }))
}
