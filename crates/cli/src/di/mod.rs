use namecache_application::ports::{HostCache, UpstreamResolver};
use namecache_application::{GetCacheStatsUseCase, ResolveHostUseCase};
use namecache_domain::{Config, DomainError};
use namecache_infrastructure::{LruHostCache, StaticUpstreamResolver};
use std::sync::Arc;

/// Wired use cases sharing the single cache instance.
///
/// The cache is constructed exactly once here and handed to every
/// collaborator as an `Arc` — the process-wide-singleton pattern expressed
/// as dependency injection instead of global state.
pub struct Services {
    pub resolve_host: ResolveHostUseCase,
    pub cache_stats: GetCacheStatsUseCase,
}

impl Services {
    pub fn build(config: &Config) -> Result<Self, DomainError> {
        let cache: Arc<dyn HostCache> = Arc::new(LruHostCache::new(config.cache.max_entries)?);
        let upstream: Arc<dyn UpstreamResolver> =
            Arc::new(StaticUpstreamResolver::new(&config.static_hosts));

        Ok(Self {
            resolve_host: ResolveHostUseCase::new(Arc::clone(&cache), upstream),
            cache_stats: GetCacheStatsUseCase::new(cache),
        })
    }
}
