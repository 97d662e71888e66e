//! TTL Cache Map - a bounded in-memory expiring key-value cache
//!
//! Provides a thread-safe map whose entries become invalid a fixed duration
//! after insertion, with a soft size bound enforced by oldest-first sweeps.
//! Expiry is lazy on read, backed by an optional periodic sweep task.

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{CacheEntry, CacheStats, TtlCache, TtlMap};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use tasks::spawn_sweep_task;
