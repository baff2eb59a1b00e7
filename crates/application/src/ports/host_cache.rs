use namecache_domain::CacheStats;
use std::sync::Arc;

/// Shared name-to-address cache.
///
/// Both operations promote the touched entry to most-recently-used, so the
/// eviction order reflects every access, reads included. Implementations
/// must be safe to call from many threads on one shared instance.
pub trait HostCache: Send + Sync {
    /// Insert `name -> ip`, or overwrite the address in place when the name
    /// is already cached. Inserting a new name at capacity evicts the least
    /// recently used entry first. Never fails; empty strings are ordinary
    /// values.
    fn update(&self, name: &str, ip: &str);

    /// Look up `name`. `None` means not cached — a normal outcome, not an
    /// error. A hit returns the address current at the moment of lookup.
    fn resolve(&self, name: &str) -> Option<Arc<str>>;

    /// Number of live entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the access counters.
    fn stats(&self) -> CacheStats;
}
