//! Cache Map Module
//!
//! Core cache engine: HashMap storage with lazy TTL expiry and oldest-first
//! sweeps enforcing a soft size bound.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats};
use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;

// == TTL Map ==
/// Expiring key-value map with a soft size bound.
///
/// Entries become invalid `ttl` after insertion and are removed lazily on
/// read or in bulk by [`sweep`](TtlMap::sweep). The size bound is soft: a
/// put never blocks, and the count may transiently exceed `max_size` until
/// the next sweep-triggering operation.
///
/// Not internally synchronized; [`TtlCache`](crate::cache::TtlCache) wraps
/// it behind a single exclusive lock for concurrent use.
#[derive(Debug)]
pub struct TtlMap<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Entry lifetime measured from insertion
    ttl: Duration,
    /// Soft capacity: sweeps trigger once the count exceeds this
    max_size: usize,
    /// Time source (swappable for tests)
    clock: Arc<dyn Clock>,
}

impl<K, V> TtlMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructors ==
    /// Creates a new TtlMap using the system wall clock.
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a new TtlMap with an injected time source.
    pub fn with_clock(config: &CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl: config.ttl,
            max_size: config.max_size,
            clock,
        }
    }

    fn ttl_millis(&self) -> u64 {
        self.ttl.as_millis() as u64
    }

    // == Get ==
    /// Looks up a key, lazily removing it if its TTL has elapsed.
    ///
    /// Runs a sweep first when the entry count exceeds `max_size`
    /// (strictly), so a lookup may mutate unrelated keys. Reads do not
    /// extend an entry's lifetime.
    pub fn get(&mut self, key: &K) -> Option<V> {
        if self.entries.len() > self.max_size {
            self.sweep();
        }

        let now = self.clock.now_millis();
        let ttl = self.ttl_millis();

        match self.entries.get(key) {
            None => {
                self.stats.record_miss();
                None
            }
            Some(entry) if !entry.is_expired(now, ttl) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            Some(_) => {
                // Lazy expiry: the entry outlasted its TTL, drop it now.
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                None
            }
        }
    }

    // == Put ==
    /// Stores a value under `key` and returns the value for chaining.
    ///
    /// Unconditionally overwrites any prior entry, stamping a fresh
    /// insertion time; this is the only way a key's TTL is reset. Runs a
    /// sweep first when the entry count exceeds `max_size`.
    pub fn put(&mut self, key: K, value: V) -> V {
        if self.entries.len() > self.max_size {
            self.sweep();
        }

        let entry = CacheEntry::new(value.clone(), self.clock.now_millis());
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
        value
    }

    // == Clear ==
    /// Atomically empties the map.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Size ==
    /// Raw structural entry count.
    ///
    /// Expired entries that have not been read or swept yet are still
    /// counted.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Sweep ==
    /// Removes expired and excess entries; returns the number removed.
    ///
    /// Snapshots every (key, insertion time) pair and processes the
    /// snapshot oldest-first: an entry is removed if its age strictly
    /// exceeds the TTL, or if the map still holds more than `max_size`
    /// entries when it is reached. Oldest-first order guarantees that
    /// size-pressure removals always hit the oldest entries. Entries
    /// inserted after the snapshot was taken are never removed by this
    /// pass.
    pub fn sweep(&mut self) -> usize {
        let now = self.clock.now_millis();
        let ttl = self.ttl_millis();

        let mut snapshot: Vec<(K, u64)> = self
            .entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.inserted_at))
            .collect();
        snapshot.sort_by_key(|&(_, inserted_at)| inserted_at);

        let mut expired: u64 = 0;
        let mut evicted: u64 = 0;
        for (key, _) in snapshot {
            let outlived = match self.entries.get(&key) {
                Some(entry) => entry.outlived(now, ttl),
                None => continue,
            };

            if outlived {
                self.entries.remove(&key);
                expired += 1;
            } else if self.entries.len() > self.max_size {
                self.entries.remove(&key);
                evicted += 1;
            }
        }

        self.stats.record_expirations(expired);
        self.stats.record_evictions(evicted);
        self.stats.set_total_entries(self.entries.len());

        let removed = (expired + evicted) as usize;
        if removed > 0 {
            debug!(
                "Sweep removed {} entries ({} expired, {} evicted)",
                removed, expired, evicted
            );
        }
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the performance counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }
}
