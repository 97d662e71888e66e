//! Error types for the cache
//!
//! Provides unified error handling using thiserror.
//!
//! The four public operations (`get`, `put`, `clear`, `size`) are total
//! functions and never fail for valid inputs; an absent key is a normal
//! `None` outcome. Only construction can report an error.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache construction.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Rejected configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No async runtime available to host the periodic sweeper
    #[error("Runtime unavailable: {0}")]
    RuntimeUnavailable(String),
}

// == Result Type Alias ==
/// Convenience Result type for cache construction.
pub type Result<T> = std::result::Result<T, CacheError>;
