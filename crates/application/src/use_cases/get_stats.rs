use crate::ports::HostCache;
use namecache_domain::CacheStats;
use std::sync::Arc;

pub struct GetCacheStatsUseCase {
    cache: Arc<dyn HostCache>,
}

impl GetCacheStatsUseCase {
    pub fn new(cache: Arc<dyn HostCache>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> CacheStats {
        self.cache.stats()
    }
}
