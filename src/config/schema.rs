//! Configuration schema definitions.
//!
//! One config struct per service binary. All types derive Serde traits for
//! deserialization from TOML config files, and every field has a default so
//! both services run with no config file at all.

use serde::{Deserialize, Serialize};

/// Configuration for the public resource proxy service (`asset-proxy`).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetProxyConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,

    /// Upstream URL fetched on every `GET /proxy`.
    pub upstream_url: String,
}

impl Default for AssetProxyConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            upstream_url: "https://elm-lang.org/assets/public-opinion.txt".to_string(),
        }
    }
}

/// Configuration for the static/bot-service gateway (`gateway`).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,

    /// Directory served for requests not claimed by the bot-service prefix.
    pub static_root: String,

    /// Path prefix forwarded to the bot service. Stripped before forwarding.
    pub bot_service_prefix: String,

    /// Base URL of the internal bot service.
    pub bot_service_url: String,

    /// Fixed CORS response headers.
    pub cors: CorsConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            static_root: "./public".to_string(),
            bot_service_prefix: "/bot-service".to_string(),
            bot_service_url: "http://localhost:4081".to_string(),
            cors: CorsConfig::default(),
        }
    }
}

/// Fixed CORS header values attached to every gateway response, regardless
/// of the request's Origin.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allow_origin: String,
    pub allow_methods: String,
    pub allow_headers: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: "*".to_string(),
            allow_methods: "OPTIONS, GET, PUT, POST, DELETE".to_string(),
            // "Allow-Method" (singular) is what production clients send; kept verbatim.
            allow_headers: "Access-Control-Allow-Headers, Access-Control-Allow-Method, \
                            Access-Control-Allow-Origin, hedvig.token"
                .to_string(),
        }
    }
}
