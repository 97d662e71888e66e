//! Periodic Sweep Task
//!
//! Background task that fires the cache sweep once per TTL interval.

use std::hash::Hash;
use std::sync::Weak;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::TtlMap;
use crate::error::{CacheError, Result};

/// Spawns the periodic sweeper for an auto-clearing cache.
///
/// The task sleeps for one full `period` before its first sweep, then
/// fires once per period for as long as the cache is alive. It holds only
/// a `Weak` reference to the shared map, so it never keeps a dropped cache
/// alive; once the last strong reference goes away the task exits on its
/// next tick.
///
/// Fails with [`CacheError::RuntimeUnavailable`] when no tokio runtime is
/// available to host the task, so a cache that cannot sweep proactively is
/// rejected at construction instead of degrading silently.
///
/// # Arguments
/// * `shared` - Weak back-reference to the locked map state
/// * `period` - Interval between sweeps (the cache's TTL)
pub fn spawn_sweep_task<K, V>(
    shared: Weak<Mutex<TtlMap<K, V>>>,
    period: Duration,
) -> Result<JoinHandle<()>>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    let runtime = Handle::try_current().map_err(|err| {
        CacheError::RuntimeUnavailable(format!("auto_clear needs a tokio runtime: {}", err))
    })?;

    Ok(runtime.spawn(async move {
        info!("Starting periodic sweep task with period {:?}", period);

        loop {
            tokio::time::sleep(period).await;

            let map = match shared.upgrade() {
                Some(map) => map,
                None => {
                    debug!("Cache dropped, stopping periodic sweep task");
                    break;
                }
            };

            let removed = map.lock().await.sweep();
            if removed > 0 {
                info!("Periodic sweep: removed {} entries", removed);
            } else {
                debug!("Periodic sweep: nothing to remove");
            }
        }
    }))
}
