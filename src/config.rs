//! Configuration Module
//!
//! Construction parameters for a cache, validated up front so the runtime
//! operations never have to fail.

use std::time::Duration;

use crate::error::{CacheError, Result};

/// Cache construction parameters.
///
/// All values are fixed for the lifetime of the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Entry lifetime, measured from insertion
    pub ttl: Duration,
    /// Whether a background sweep runs every `ttl`
    pub auto_clear: bool,
    /// Soft capacity: sweeps trigger once the entry count exceeds this
    pub max_size: usize,
}

impl CacheConfig {
    /// Creates a validated configuration.
    ///
    /// # Arguments
    /// * `ttl_millis` - Entry lifetime in milliseconds (must be > 0)
    /// * `auto_clear` - Whether the cache sweeps itself every `ttl_millis`
    /// * `max_size` - Soft entry bound (must be > 0)
    pub fn new(ttl_millis: u64, auto_clear: bool, max_size: usize) -> Result<Self> {
        if ttl_millis == 0 {
            return Err(CacheError::InvalidConfig(
                "ttl must be greater than zero".to_string(),
            ));
        }
        if max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "max_size must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            ttl: Duration::from_millis(ttl_millis),
            auto_clear,
            max_size,
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10),
            auto_clear: false,
            max_size: 1000,
        }
    }
}
