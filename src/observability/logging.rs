//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per service binary
//! - Default to a useful filter when `RUST_LOG` is unset
//!
//! # Design Decisions
//! - The per-request access log comes from `tower_http::trace::TraceLayer`,
//!   so its target is enabled by default alongside the crate's own events

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set; otherwise crate events and
/// the tower-http access log are logged at info level.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "edge_gateway=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
