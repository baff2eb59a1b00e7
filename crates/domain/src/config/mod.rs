//! Configuration module for Namecache
//!
//! Configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `cache`: Cache capacity settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod errors;
pub mod logging;
pub mod root;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
