use super::list::RecencyList;
use super::metrics::CacheMetrics;
use namecache_application::ports::HostCache;
use namecache_domain::{CacheStats, DomainError};
use rustc_hash::FxBuildHasher;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use tracing::{debug, info};

type Index = HashMap<Arc<str>, usize, FxBuildHasher>;

/// Index and recency list, mutated together so they never disagree.
///
/// The index key and the slot's `domain` are clones of the same `Arc<str>`,
/// so the character data is stored once and stays alive as long as either
/// side holds it. Both sides are removed in the same critical section.
#[derive(Debug)]
struct CacheState {
    index: Index,
    list: RecencyList,
}

/// Fixed-capacity LRU cache of domain-name-to-address entries.
///
/// Two-tier locking:
/// - `update` holds the `state` write guard for its whole duration, so no
///   other call observes a half-applied insert or eviction.
/// - `resolve` holds the read guard, letting lookups run concurrently, and
///   takes the inner `recency` mutex only around the splice that promotes
///   the entry. Concurrent readers therefore cannot corrupt the links, and
///   a reader can never hold a handle a writer has evicted — eviction
///   needs the write guard the reader excludes.
#[derive(Debug)]
pub struct LruHostCache {
    state: RwLock<CacheState>,
    recency: Mutex<()>,
    capacity: usize,
    metrics: CacheMetrics,
}

impl LruHostCache {
    /// Create an empty cache holding at most `max_entries` entries.
    pub fn new(max_entries: usize) -> Result<Self, DomainError> {
        if max_entries == 0 {
            return Err(DomainError::InvalidConfiguration(
                "cache capacity must be greater than zero".to_string(),
            ));
        }

        info!(max_entries, "initializing host cache");

        Ok(Self {
            state: RwLock::new(CacheState {
                index: HashMap::with_capacity_and_hasher(max_entries, FxBuildHasher::default()),
                list: RecencyList::with_capacity(max_entries),
            }),
            recency: Mutex::new(()),
            capacity: max_entries,
            metrics: CacheMetrics::default(),
        })
    }

    /// Insert `name -> ip`, or refresh the address in place. Either way the
    /// entry becomes the most recently used. Inserting a new name at
    /// capacity evicts the least recently used entry first; refreshing an
    /// existing name never evicts.
    pub fn update(&self, name: &str, ip: &str) {
        let mut guard = self.state.write().unwrap();
        let state = &mut *guard;

        if let Some(&idx) = state.index.get(name) {
            state.list.set_ip(idx, Arc::from(ip));
            state.list.move_to_front(idx);
            self.metrics.record_update();
            debug!(domain = name, ip, "refreshed cache entry");
            return;
        }

        if state.list.len() == self.capacity {
            if let Some((_, evicted)) = state.list.pop_back() {
                state.index.remove(evicted.as_ref());
                self.metrics.record_eviction();
                debug!(domain = %evicted, "evicted least recently used entry");
            }
        }

        let domain: Arc<str> = Arc::from(name);
        let idx = state.list.push_front(Arc::clone(&domain), Arc::from(ip));
        state.index.insert(domain, idx);
        self.metrics.record_insertion();
        debug!(domain = name, ip, entries = state.list.len(), "inserted cache entry");
    }

    /// Look up `name`, promoting it to most recently used on a hit.
    ///
    /// The returned address is the one current at the moment of lookup; a
    /// concurrent `update` may overwrite it before the caller reads the
    /// result.
    pub fn resolve(&self, name: &str) -> Option<Arc<str>> {
        let state = self.state.read().unwrap();

        let idx = match state.index.get(name) {
            Some(&idx) => idx,
            None => {
                self.metrics.record_miss();
                return None;
            }
        };

        {
            // Concurrent readers must not race each other splicing links.
            let _recency = self.recency.lock().unwrap();
            state.list.move_to_front(idx);
        }

        self.metrics.record_hit();
        // Still under the read guard: no writer can evict the slot or
        // replace the value before this clone completes.
        Some(state.list.ip(idx))
    }

    pub fn len(&self) -> usize {
        self.state.read().unwrap().list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.len();
        self.metrics.snapshot(entries)
    }
}

impl HostCache for LruHostCache {
    fn update(&self, name: &str, ip: &str) {
        LruHostCache::update(self, name, ip);
    }

    fn resolve(&self, name: &str) -> Option<Arc<str>> {
        LruHostCache::resolve(self, name)
    }

    fn len(&self) -> usize {
        LruHostCache::len(self)
    }

    fn stats(&self) -> CacheStats {
        LruHostCache::stats(self)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
