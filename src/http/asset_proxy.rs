//! Public resource proxy service.
//!
//! # Responsibilities
//! - Serve `GET /proxy` by fetching the configured upstream resource
//! - Relay body and Content-Type verbatim on success
//! - Map any upstream failure to a generic 500
//!
//! One outbound call per inbound request: no cache, no retry, no client
//! timeout. The upstream resource is fixed, so a failed fetch has nothing
//! useful to tell the caller beyond "try again".

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::config::AssetProxyConfig;
use crate::lifecycle::shutdown;

/// Application state injected into handlers.
#[derive(Clone)]
struct AppState {
    client: reqwest::Client,
    upstream_url: String,
}

/// HTTP server for the public resource proxy.
pub struct AssetProxyServer {
    router: Router,
    config: AssetProxyConfig,
}

impl AssetProxyServer {
    /// Create a new server with the given configuration.
    pub fn new(config: AssetProxyConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        let state = AppState {
            client,
            upstream_url: config.upstream_url.clone(),
        };
        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/proxy", get(proxy_handler))
            .with_state(state)
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ))
            .layer(TraceLayer::new_for_http())
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
            upstream_url = %self.config.upstream_url,
            "Asset proxy listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("Asset proxy stopped");
        Ok(())
    }
}

/// Handler for `GET /proxy`. Query and body are ignored.
async fn proxy_handler(State(state): State<AppState>) -> Response {
    match fetch_upstream(&state).await {
        Ok((content_type, body)) => {
            let mut response = body.into_response();
            if let Some(content_type) = content_type {
                response.headers_mut().insert(header::CONTENT_TYPE, content_type);
            }
            response
        }
        Err(e) => {
            tracing::error!(
                upstream_url = %state.upstream_url,
                error = %e,
                "Upstream fetch failed"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// One round-trip to the upstream resource.
///
/// A non-2xx upstream status is a failure: the resource is fixed and the
/// caller has no use for the upstream's error pages.
async fn fetch_upstream(
    state: &AppState,
) -> Result<(Option<HeaderValue>, Bytes), reqwest::Error> {
    let response = state
        .client
        .get(&state.upstream_url)
        .send()
        .await?
        .error_for_status()?;
    let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
    let body = response.bytes().await?;
    Ok((content_type, body))
}
