//! Cache Module
//!
//! In-memory key-value caching with TTL expiry and a soft size bound.

mod entry;
mod map;
mod shared;
mod stats;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use map::TtlMap;
pub use shared::TtlCache;
pub use stats::CacheStats;
