use serde::Serialize;

/// Point-in-time snapshot of the cache counters.
///
/// Counters are monotonic over the cache lifetime; `entries` is the live
/// entry count at snapshot time and never exceeds the configured capacity.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub updates: u64,
    pub evictions: u64,
    pub hit_rate: f64,
}

impl CacheStats {
    /// Hit rate over `hits + misses`, or 0.0 before any lookup.
    pub fn hit_rate_of(hits: u64, misses: u64) -> f64 {
        let total = hits + misses;
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }
}
