//! Multi-thread stress tests for the cache engine, mirroring the shapes a
//! resolver fleet produces: disjoint writers, concurrent readers, and mixed
//! reader/writer storms on overlapping keys.

use namecache_infrastructure::LruHostCache;
use std::sync::Arc;
use std::thread;

const NUM_THREADS: usize = 8;
const KEYS_PER_THREAD: usize = 500;

fn domain(i: usize) -> String {
    format!("example{i}.com")
}

#[test]
fn test_concurrent_updates_all_land() {
    let total = NUM_THREADS * KEYS_PER_THREAD;
    let cache = Arc::new(LruHostCache::new(total).unwrap());

    let mut threads = Vec::new();
    for t in 0..NUM_THREADS {
        let cache = Arc::clone(&cache);
        threads.push(thread::spawn(move || {
            for i in t * KEYS_PER_THREAD..(t + 1) * KEYS_PER_THREAD {
                cache.update(&domain(i), &format!("1.2.3.{i}"));
            }
        }));
    }
    for t in threads {
        t.join().unwrap();
    }

    assert_eq!(cache.len(), total);
    for i in 0..total {
        assert_eq!(
            cache.resolve(&domain(i)).unwrap().as_ref(),
            format!("1.2.3.{i}")
        );
    }
}

#[test]
fn test_concurrent_resolves_return_exact_values() {
    let total = NUM_THREADS * KEYS_PER_THREAD;
    let cache = Arc::new(LruHostCache::new(total).unwrap());
    for i in 0..total {
        cache.update(&domain(i), &format!("1.2.3.{i}"));
    }

    let mut threads = Vec::new();
    for t in 0..NUM_THREADS {
        let cache = Arc::clone(&cache);
        threads.push(thread::spawn(move || {
            for i in t * KEYS_PER_THREAD..(t + 1) * KEYS_PER_THREAD {
                let ip = cache.resolve(&domain(i)).expect("populated key must hit");
                assert_eq!(ip.as_ref(), format!("1.2.3.{i}"));
            }
        }));
    }
    for t in threads {
        t.join().unwrap();
    }

    let stats = cache.stats();
    assert_eq!(stats.hits, total as u64);
    assert_eq!(stats.misses, 0);
}

#[test]
fn test_mixed_updates_and_resolves_never_tear() {
    let total = NUM_THREADS * KEYS_PER_THREAD;
    let cache = Arc::new(LruHostCache::new(total).unwrap());
    for i in 0..total {
        cache.update(&domain(i), &format!("1.2.3.{i}"));
    }

    let mut threads = Vec::new();
    for t in 0..NUM_THREADS {
        let cache = Arc::clone(&cache);
        threads.push(thread::spawn(move || {
            for i in t * KEYS_PER_THREAD..(t + 1) * KEYS_PER_THREAD {
                cache.update(&domain(i), &format!("4.5.6.{i}"));
            }
        }));
    }
    for t in 0..NUM_THREADS {
        let cache = Arc::clone(&cache);
        threads.push(thread::spawn(move || {
            for i in t * KEYS_PER_THREAD..(t + 1) * KEYS_PER_THREAD {
                let ip = cache.resolve(&domain(i)).expect("key is never evicted");
                // Every observed value is one some update wrote for this key
                let old = format!("1.2.3.{i}");
                let new = format!("4.5.6.{i}");
                assert!(
                    ip.as_ref() == old || ip.as_ref() == new,
                    "torn value for {}: {ip}",
                    domain(i)
                );
            }
        }));
    }
    for t in threads {
        t.join().unwrap();
    }

    assert_eq!(cache.len(), total);
}

#[test]
fn test_overlapping_key_storm_preserves_structure() {
    // Far more distinct keys than capacity, touched from every thread, so
    // eviction and promotion race constantly.
    let capacity = 64;
    let keyspace = 512;
    let cache = Arc::new(LruHostCache::new(capacity).unwrap());

    let mut threads = Vec::new();
    for t in 0..NUM_THREADS {
        let cache = Arc::clone(&cache);
        threads.push(thread::spawn(move || {
            for round in 0..KEYS_PER_THREAD {
                let i = (t * 31 + round * 7) % keyspace;
                if round % 3 == 0 {
                    if let Some(ip) = cache.resolve(&domain(i)) {
                        assert_eq!(ip.as_ref(), format!("1.2.3.{i}"));
                    }
                } else {
                    cache.update(&domain(i), &format!("1.2.3.{i}"));
                }
            }
        }));
    }
    for t in threads {
        t.join().unwrap();
    }

    assert!(cache.len() <= capacity);

    // Whatever survived still resolves to the value written for its key
    let mut survivors = 0;
    for i in 0..keyspace {
        if let Some(ip) = cache.resolve(&domain(i)) {
            assert_eq!(ip.as_ref(), format!("1.2.3.{i}"));
            survivors += 1;
        }
    }
    assert_eq!(survivors, cache.len());
}
