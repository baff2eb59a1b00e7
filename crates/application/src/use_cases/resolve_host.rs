use crate::ports::{HostCache, UpstreamResolver};
use namecache_domain::DomainError;
use std::sync::Arc;
use tracing::debug;

/// Outcome of a resolution, with provenance.
#[derive(Debug, Clone)]
pub struct HostResolution {
    pub ip: Arc<str>,
    pub cache_hit: bool,
}

/// Cache-aside resolution flow.
///
/// Consults the cache first; on a miss, asks the upstream resolver and
/// inserts the answer so the next lookup for the same name is a hit.
pub struct ResolveHostUseCase {
    cache: Arc<dyn HostCache>,
    upstream: Arc<dyn UpstreamResolver>,
}

impl ResolveHostUseCase {
    pub fn new(cache: Arc<dyn HostCache>, upstream: Arc<dyn UpstreamResolver>) -> Self {
        Self { cache, upstream }
    }

    /// Resolve `name`. `Ok(None)` means neither the cache nor the upstream
    /// knows the name; nothing is cached in that case.
    pub async fn execute(&self, name: &str) -> Result<Option<HostResolution>, DomainError> {
        if let Some(ip) = self.cache.resolve(name) {
            debug!(domain = name, ip = %ip, "cache hit");
            return Ok(Some(HostResolution {
                ip,
                cache_hit: true,
            }));
        }

        debug!(domain = name, "cache miss, consulting upstream");
        match self.upstream.lookup(name).await? {
            Some(ip) => {
                self.cache.update(name, &ip);
                Ok(Some(HostResolution {
                    ip: Arc::from(ip.as_str()),
                    cache_hit: false,
                }))
            }
            None => Ok(None),
        }
    }
}
