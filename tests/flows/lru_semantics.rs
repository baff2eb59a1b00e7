//! End-to-end LRU semantics through the application ports.

use namecache_application::{ResolveHostUseCase, UpstreamResolver};
use namecache_domain::DomainError;
use namecache_infrastructure::LruHostCache;
use std::sync::Arc;

struct TableUpstream(Vec<(String, String)>);

#[async_trait::async_trait]
impl UpstreamResolver for TableUpstream {
    async fn lookup(&self, name: &str) -> Result<Option<String>, DomainError> {
        Ok(self
            .0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, ip)| ip.clone()))
    }
}

#[tokio::test]
async fn test_cache_aside_flow_promotes_and_evicts() {
    let cache = Arc::new(LruHostCache::new(3).unwrap());
    let upstream = Arc::new(TableUpstream(
        ["a", "b", "c", "d"]
            .iter()
            .enumerate()
            .map(|(i, n)| (format!("{n}.com"), format!("10.0.0.{i}")))
            .collect(),
    ));
    let resolver = ResolveHostUseCase::new(cache.clone(), upstream);

    // Fill to capacity through misses
    for name in ["a.com", "b.com", "c.com"] {
        let r = resolver.execute(name).await.unwrap().unwrap();
        assert!(!r.cache_hit);
    }

    // Touch a.com so b.com is now the LRU entry
    let r = resolver.execute("a.com").await.unwrap().unwrap();
    assert!(r.cache_hit);

    // d.com misses, goes upstream, and its insertion evicts b.com
    let r = resolver.execute("d.com").await.unwrap().unwrap();
    assert!(!r.cache_hit);

    assert_eq!(cache.len(), 3);
    assert!(cache.resolve("b.com").is_none());
    assert!(cache.resolve("a.com").is_some());
    assert!(cache.resolve("c.com").is_some());
    assert!(cache.resolve("d.com").is_some());

    // b.com is re-fetched from upstream on its next resolution
    let r = resolver.execute("b.com").await.unwrap().unwrap();
    assert!(!r.cache_hit);
    assert_eq!(r.ip.as_ref(), "10.0.0.1");
}

#[tokio::test]
async fn test_unknown_names_stay_unknown_across_calls() {
    let cache = Arc::new(LruHostCache::new(2).unwrap());
    let resolver = ResolveHostUseCase::new(cache.clone(), Arc::new(TableUpstream(vec![])));

    for _ in 0..3 {
        assert!(resolver.execute("ghost.com").await.unwrap().is_none());
    }
    assert_eq!(cache.len(), 0);
}
