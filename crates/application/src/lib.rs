//! Namecache Application Layer
//!
//! Ports (trait seams) and use cases. The cache engine and the upstream
//! resolution mechanism live behind traits so collaborators depend on the
//! contract, not the implementation.
pub mod ports;
pub mod use_cases;

pub use ports::{HostCache, UpstreamResolver};
pub use use_cases::{GetCacheStatsUseCase, HostResolution, ResolveHostUseCase};
