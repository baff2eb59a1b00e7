pub mod get_stats;
pub mod resolve_host;

pub use get_stats::GetCacheStatsUseCase;
pub use resolve_host::{HostResolution, ResolveHostUseCase};
