//! Static/bot-service gateway.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → access log (TraceLayer)
//!     → CORS headers + OPTIONS short-circuit (204)
//!     → /bot-service/* → strip prefix, forward to bot service, relay
//!     → anything else  → static file under the configured root, else 404
//! ```
//!
//! # Design Decisions
//! - The upstream response is relayed verbatim: status, headers, body
//! - Forward failures map to 502; there is no retry or health tracking
//! - Static misses produce the router's plain 404, not an error

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{services::ServeDir, trace::TraceLayer};
use url::Url;

use crate::config::GatewayConfig;
use crate::http::middleware::cors::{cors_middleware, CorsHeaders};
use crate::lifecycle::shutdown;
use crate::routing::rewrite;

/// Error constructing a gateway from its configuration.
#[derive(Debug, Error)]
pub enum GatewayInitError {
    #[error("invalid bot_service_url `{url}`: {source}")]
    BotServiceUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("CORS value is not a valid HTTP header: {0}")]
    CorsHeader(#[from] axum::http::header::InvalidHeaderValue),
}

/// Application state injected into the forwarding handler.
#[derive(Clone)]
struct AppState {
    client: Client<HttpConnector, Body>,
    bot_service_url: Url,
    bot_service_prefix: String,
}

/// HTTP server for the static/bot-service gateway.
pub struct GatewayServer {
    router: Router,
    config: GatewayConfig,
}

impl GatewayServer {
    /// Create a new server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayInitError> {
        let bot_service_url =
            Url::parse(&config.bot_service_url).map_err(|source| GatewayInitError::BotServiceUrl {
                url: config.bot_service_url.clone(),
                source,
            })?;
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        let state = AppState {
            client,
            bot_service_url,
            // Normalized so routing and stripping agree on the boundary.
            bot_service_prefix: config.bot_service_prefix.trim_end_matches('/').to_string(),
        };

        let router = Self::build_router(&config, state)?;
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers run outside-in: access log first, then CORS (which also
    /// short-circuits OPTIONS), then the bot-service routes, with static
    /// files as the fallback for everything else.
    fn build_router(config: &GatewayConfig, state: AppState) -> Result<Router, GatewayInitError> {
        let cors = CorsHeaders::from_config(&config.cors)?;
        let prefix = state.bot_service_prefix.clone();

        Ok(Router::new()
            .route(&prefix, any(forward_handler))
            .route(&format!("{prefix}/{{*path}}"), any(forward_handler))
            .fallback_service(ServeDir::new(&config.static_root))
            .with_state(state)
            .layer(middleware::from_fn_with_state(cors, cors_middleware))
            .layer(TraceLayer::new_for_http()))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            static_root = %self.config.static_root,
            bot_service_url = %self.config.bot_service_url,
            "Gateway listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("Gateway stopped");
        Ok(())
    }
}

/// Forward a bot-service request upstream and relay the response verbatim.
async fn forward_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_owned);

    let Some(stripped) = rewrite::strip_prefix(&path, &state.bot_service_prefix) else {
        // Routing only sends prefixed paths here.
        return StatusCode::NOT_FOUND.into_response();
    };

    let uri = match rewrite::upstream_uri(&state.bot_service_url, stripped, query.as_deref()) {
        Ok(uri) => uri,
        Err(e) => {
            tracing::error!(path = %path, error = %e, "Failed to build upstream URI");
            return (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response();
        }
    };

    // Method, headers, and body carry over untouched; only the URI changes.
    let (mut parts, body) = request.into_parts();
    parts.uri = uri;
    let outbound = Request::from_parts(parts, body);

    tracing::debug!(path = %path, upstream = %outbound.uri(), "Forwarding bot-service request");

    match state.client.request(outbound).await {
        Ok(response) => {
            let (parts, body) = response.into_parts();
            Response::from_parts(parts, Body::new(body))
        }
        Err(e) => {
            tracing::error!(path = %path, error = %e, "Bot service request failed");
            (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
        }
    }
}
