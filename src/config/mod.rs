//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AssetProxyConfig / GatewayConfig (validated, immutable)
//!     → passed to the service constructor at startup
//!
//! Port resolution:
//!     --port flag → PORT env var → configured bind address
//! ```
//!
//! # Design Decisions
//! - Each service takes an explicit config struct at initialization;
//!   there are no module-level constants to patch
//! - All fields have defaults so both binaries run with no config file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::{AssetProxyConfig, CorsConfig, GatewayConfig};
