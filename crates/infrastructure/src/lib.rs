//! Namecache Infrastructure Layer
//!
//! Concrete implementations behind the application ports: the LRU host
//! cache engine and the static-table upstream resolver used by the demo
//! binary.
pub mod cache;
pub mod upstream;

pub use cache::LruHostCache;
pub use upstream::StaticUpstreamResolver;
