use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use cachedns_application::ResolveQueryUseCase;
use cachedns_domain::CliOverrides;
use cachedns_infrastructure::{
    DnsRequestHandler, InMemoryCacheStore, JsonSnapshotStore, UdpUpstreamGateway,
};
use tracing::{error, info};

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "cachedns")]
#[command(version)]
#[command(about = "Local caching DNS proxy with persisted positive and negative caches")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Upstream resolver address (e.g. 8.8.8.8:53)
    #[arg(short = 'u', long)]
    upstream: Option<String>,

    /// Listen address
    #[arg(short = 'l', long)]
    listen: Option<String>,

    /// Directory for the cache snapshot files
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Answer from cache only, never forward upstream
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        upstream_address: cli.upstream.clone(),
        listen_address: cli.listen.clone(),
        data_dir: cli.data_dir.clone(),
        log_level: cli.log_level.clone(),
        offline: cli.offline,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);
    info!("Starting CacheDNS v{}", env!("CARGO_PKG_VERSION"));

    let upstream_addr: SocketAddr = config
        .upstream
        .address
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid upstream address '{}': {}", config.upstream.address, e))?;
    let upstream = Arc::new(
        UdpUpstreamGateway::connect(upstream_addr, Duration::from_millis(config.upstream.timeout_ms))
            .await?,
    );

    let cache = Arc::new(InMemoryCacheStore::new());
    let snapshots = Arc::new(JsonSnapshotStore::new(&config.cache.data_dir));
    let use_case = Arc::new(
        ResolveQueryUseCase::new(cache, upstream, snapshots)
            .with_forwarding_enabled(config.upstream.enabled),
    );

    let handler = Arc::new(DnsRequestHandler::new(use_case));
    handler.hydrate();

    if !config.upstream.enabled {
        info!("Running offline: unresolved queries will be refused");
    }

    tokio::select! {
        result = server::start_dns_server(&config.server.listen_address, handler.clone()) => {
            if let Err(e) = result {
                error!(error = %e, "DNS server stopped");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown requested");
        }
    }

    // Both termination paths end here: flush before the sockets go away.
    handler.flush();
    info!("Cache flushed, shutting down");
    Ok(())
}
