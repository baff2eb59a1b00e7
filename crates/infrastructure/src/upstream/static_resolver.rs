use async_trait::async_trait;
use namecache_application::ports::UpstreamResolver;
use namecache_domain::{DomainError, HostRecord};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Upstream resolver backed by the `static_hosts` configuration table.
///
/// Stands in for the real resolution mechanism so the demo binary can
/// drive the cache end to end. The table is immutable after construction.
pub struct StaticUpstreamResolver {
    records: FxHashMap<String, String>,
}

impl StaticUpstreamResolver {
    pub fn new(records: &[HostRecord]) -> Self {
        let records = records
            .iter()
            .map(|r| (r.name.clone(), r.ip.clone()))
            .collect();
        Self { records }
    }
}

#[async_trait]
impl UpstreamResolver for StaticUpstreamResolver {
    async fn lookup(&self, name: &str) -> Result<Option<String>, DomainError> {
        let answer = self.records.get(name).cloned();
        debug!(domain = name, found = answer.is_some(), "static upstream lookup");
        Ok(answer)
    }
}
