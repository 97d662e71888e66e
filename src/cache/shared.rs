//! Shared Cache Handle
//!
//! Wraps the map core behind a single exclusive lock and manages the
//! lifecycle of the optional periodic sweeper.

use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::cache::{CacheStats, TtlMap};
use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::tasks::spawn_sweep_task;

// == TTL Cache ==
/// Thread-safe expiring cache.
///
/// All operations serialize through one exclusive lock: at most one of
/// get/put/clear/size/sweep runs at a time, so no caller ever observes a
/// partially updated map. Lock hold times are bounded by the map size
/// during a sweep; no operation blocks on I/O.
///
/// The handle owns the sweeper task and aborts it on drop; share the cache
/// between callers with `Arc<TtlCache<K, V>>`.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    /// Map state shared with the sweeper task
    shared: Arc<Mutex<TtlMap<K, V>>>,
    /// Periodic sweeper, present when `auto_clear` is enabled
    sweeper: Option<JoinHandle<()>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    // == Constructors ==
    /// Creates a cache using the system wall clock.
    ///
    /// With `auto_clear` enabled this spawns a sweep task firing every
    /// `ttl`; see [`TtlCache::with_clock`] for the runtime requirement.
    pub fn new(config: CacheConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a cache with an injected time source.
    ///
    /// When `auto_clear` is set, an ambient tokio runtime must be available
    /// to host the sweeper; its absence is reported here as a
    /// construction-time error rather than silently degrading later
    /// `get`/`put` behavior (lazy expiry on read remains correct either
    /// way).
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let shared = Arc::new(Mutex::new(TtlMap::with_clock(&config, clock)));

        let sweeper = if config.auto_clear {
            Some(spawn_sweep_task(Arc::downgrade(&shared), config.ttl)?)
        } else {
            None
        };

        Ok(Self { shared, sweeper })
    }

    // == Get ==
    /// Looks up a key, lazily removing it if its TTL has elapsed.
    ///
    /// May sweep unrelated keys first when the cache is over its soft size
    /// bound.
    pub async fn get(&self, key: &K) -> Option<V> {
        self.shared.lock().await.get(key)
    }

    // == Put ==
    /// Stores a value under `key`, resetting its TTL, and returns the
    /// value just stored.
    pub async fn put(&self, key: K, value: V) -> V {
        self.shared.lock().await.put(key, value)
    }

    // == Clear ==
    /// Atomically empties the cache.
    pub async fn clear(&self) {
        self.shared.lock().await.clear();
    }

    // == Size ==
    /// Raw entry count, including expired entries not yet swept.
    pub async fn size(&self) -> usize {
        self.shared.lock().await.size()
    }

    // == Sweep ==
    /// Runs one sweep pass immediately; returns the number of entries
    /// removed.
    pub async fn sweep(&self) -> usize {
        self.shared.lock().await.sweep()
    }

    // == Stats ==
    /// Returns a snapshot of the performance counters.
    pub async fn stats(&self) -> CacheStats {
        self.shared.lock().await.stats()
    }
}

impl<K, V> Drop for TtlCache<K, V> {
    fn drop(&mut self) {
        // Stop the sweeper with the cache; the task also exits on its own
        // once its Weak reference goes dead.
        if let Some(handle) = self.sweeper.take() {
            handle.abort();
        }
    }
}
