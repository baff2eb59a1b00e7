//! # Namecache
//!
//! Demo entry point for the LRU host cache: loads configuration, wires the
//! cache behind its ports, then resolves the requested names through the
//! cache-aside flow. Repeated names show up as cache hits.

mod bootstrap;
mod di;

use clap::Parser;
use namecache_domain::CliOverrides;
use tracing::info;

#[derive(Parser)]
#[command(name = "namecache")]
#[command(version)]
#[command(about = "Fixed-capacity LRU cache for host name lookups")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override the configured cache capacity
    #[arg(short, long)]
    max_entries: Option<usize>,

    /// Names to resolve, in order; a repeated name is served from cache
    names: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(
        cli.config.as_deref(),
        CliOverrides {
            max_entries: cli.max_entries,
        },
    )?;
    bootstrap::init_logging(&config);

    let services = di::Services::build(&config)?;

    let names = if cli.names.is_empty() {
        demo_names(&config)
    } else {
        cli.names
    };

    for name in &names {
        match services.resolve_host.execute(name).await? {
            Some(resolution) => {
                let source = if resolution.cache_hit { "cache" } else { "upstream" };
                println!("{name} -> {} ({source})", resolution.ip);
            }
            None => println!("{name} ->"),
        }
    }

    let stats = services.cache_stats.execute();
    info!(
        entries = stats.entries,
        hits = stats.hits,
        misses = stats.misses,
        evictions = stats.evictions,
        hit_rate = format!("{:.2}", stats.hit_rate),
        "Cache statistics"
    );

    Ok(())
}

/// With no names on the command line, resolve each configured static host
/// twice: the first pass fills the cache, the second is all hits.
fn demo_names(config: &namecache_domain::Config) -> Vec<String> {
    let mut names: Vec<String> = config.static_hosts.iter().map(|r| r.name.clone()).collect();
    if names.is_empty() {
        names = vec![
            "example.com".to_string(),
            "example2.com".to_string(),
            "example3.com".to_string(),
        ];
    }
    let first_pass = names.clone();
    names.extend(first_pass);
    names
}
