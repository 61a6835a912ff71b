//! Entry point for the static/bot-service gateway.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use edge_gateway::config::{loader, GatewayConfig};
use edge_gateway::http::GatewayServer;
use edge_gateway::lifecycle::Shutdown;
use edge_gateway::observability;

#[derive(Parser)]
#[command(name = "gateway")]
#[command(
    about = "Serves static files and forwards /bot-service to an internal host",
    long_about = None
)]
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
        Some(path) => loader::load_gateway_config(path)?,
        None => GatewayConfig::default(),
    };

    let bind_address = loader::resolve_bind_address(&config.bind_address, cli.port);
    tracing::info!(
        bind_address = %bind_address,
        static_root = %config.static_root,
        bot_service_url = %config.bot_service_url,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&bind_address).await?;
    let shutdown = Shutdown::new();
    let server = GatewayServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
