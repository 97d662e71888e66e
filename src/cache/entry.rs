//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

// == Cache Entry ==
/// A stored value together with its insertion timestamp.
///
/// Entries are immutable once created; overwriting a key replaces the whole
/// entry, which is how a put refreshes the TTL. Reads never touch the
/// timestamp.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the given instant.
    pub fn new(value: V, now_millis: u64) -> Self {
        Self {
            value,
            inserted_at: now_millis,
        }
    }

    // == Is Expired ==
    /// Age check used on the read path.
    ///
    /// Boundary condition: an entry is expired once its age reaches the TTL
    /// (`now - inserted_at >= ttl`), so a value is never served at or past
    /// the expiry instant.
    pub fn is_expired(&self, now_millis: u64, ttl_millis: u64) -> bool {
        now_millis.saturating_sub(self.inserted_at) >= ttl_millis
    }

    // == Outlived ==
    /// Strict age check used by the sweep.
    ///
    /// The sweep only removes entries whose age strictly exceeds the TTL;
    /// an entry exactly at the boundary survives the sweep but still misses
    /// on its next read.
    pub fn outlived(&self, now_millis: u64, ttl_millis: u64) -> bool {
        now_millis.saturating_sub(self.inserted_at) > ttl_millis
    }

    // == Time To Live ==
    /// Returns remaining lifetime in milliseconds (0 once expired).
    pub fn ttl_remaining_ms(&self, now_millis: u64, ttl_millis: u64) -> u64 {
        (self.inserted_at + ttl_millis).saturating_sub(now_millis)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: u64 = 1_000;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value", 5_000);
        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.inserted_at, 5_000);
    }

    #[test]
    fn test_entry_fresh_is_not_expired() {
        let entry = CacheEntry::new(42, 5_000);
        assert!(!entry.is_expired(5_000, TTL));
        assert!(!entry.is_expired(5_999, TTL));
    }

    #[test]
    fn test_entry_expires_at_boundary() {
        // Read-path expiry is inclusive: age == ttl already misses.
        let entry = CacheEntry::new(42, 5_000);
        assert!(entry.is_expired(6_000, TTL));
        assert!(entry.is_expired(7_000, TTL));
    }

    #[test]
    fn test_outlived_is_strict() {
        // The sweep keeps an entry whose age equals the TTL exactly.
        let entry = CacheEntry::new(42, 5_000);
        assert!(!entry.outlived(6_000, TTL));
        assert!(entry.outlived(6_001, TTL));
    }

    #[test]
    fn test_entry_clock_skew_does_not_underflow() {
        // A clock reading before the insertion timestamp reads as age zero.
        let entry = CacheEntry::new(42, 5_000);
        assert!(!entry.is_expired(4_000, TTL));
        assert!(!entry.outlived(4_000, TTL));
    }

    #[test]
    fn test_ttl_remaining() {
        let entry = CacheEntry::new(42, 5_000);
        assert_eq!(entry.ttl_remaining_ms(5_000, TTL), 1_000);
        assert_eq!(entry.ttl_remaining_ms(5_600, TTL), 400);
        assert_eq!(entry.ttl_remaining_ms(6_000, TTL), 0);
        assert_eq!(entry.ttl_remaining_ms(9_000, TTL), 0);
    }
}
