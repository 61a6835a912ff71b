//! Entry point for the public resource proxy service.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use edge_gateway::config::{loader, AssetProxyConfig};
use edge_gateway::http::AssetProxyServer;
use edge_gateway::lifecycle::Shutdown;
use edge_gateway::observability;

#[derive(Parser)]
#[command(name = "asset-proxy")]
#[command(about = "Proxies a single external text resource", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults are used when absent.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port. Overrides the config file and the PORT environment
    /// variable.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => loader::load_asset_proxy_config(path)?,
        None => AssetProxyConfig::default(),
    };

    let bind_address = loader::resolve_bind_address(&config.bind_address, cli.port);
    tracing::info!(
        bind_address = %bind_address,
        upstream_url = %config.upstream_url,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&bind_address).await?;
    let shutdown = Shutdown::new();
    let server = AssetProxyServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
