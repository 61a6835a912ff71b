//! Minimal HTTP edge services: a public resource proxy (`asset-proxy`)
//! and a static/bot-service gateway (`gateway`).

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::{AssetProxyConfig, GatewayConfig};
pub use http::{AssetProxyServer, GatewayServer};
pub use lifecycle::Shutdown;
