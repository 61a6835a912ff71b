//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → asset_proxy.rs or gateway.rs (Axum setup, routing)
//!     → middleware/ (access log, CORS, OPTIONS short-circuit)
//!     → handler (upstream fetch / forward / static file)
//!     → Send to client
//! ```

pub mod asset_proxy;
pub mod gateway;
pub mod middleware;

pub use asset_proxy::AssetProxyServer;
pub use gateway::{GatewayInitError, GatewayServer};
