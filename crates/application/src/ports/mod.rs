pub mod host_cache;
pub mod upstream_resolver;

pub use host_cache::HostCache;
pub use upstream_resolver::UpstreamResolver;
