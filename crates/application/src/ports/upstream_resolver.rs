use async_trait::async_trait;
use namecache_domain::DomainError;

/// External name-resolution mechanism consulted on a cache miss.
///
/// `Ok(None)` means the upstream answered authoritatively that the name is
/// unknown; `Err` means the upstream could not be consulted at all.
#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    async fn lookup(&self, name: &str) -> Result<Option<String>, DomainError>;
}
