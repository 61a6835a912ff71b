//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check bind addresses parse as socket addresses
//! - Check upstream URLs parse and carry a host
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: config → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::{AssetProxyConfig, GatewayConfig};

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("bind_address `{0}` is not a valid socket address")]
    BindAddress(String),

    #[error("{field} `{value}` is not a valid URL: {reason}")]
    Url {
        field: &'static str,
        value: String,
        reason: url::ParseError,
    },

    #[error("{field} `{value}` has no host")]
    MissingHost { field: &'static str, value: String },

    #[error("bot_service_prefix `{0}` must start with `/` and name a path segment")]
    PrefixShape(String),

    #[error("static_root must not be empty")]
    EmptyStaticRoot,
}

/// Validate the asset proxy configuration.
pub fn validate_asset_proxy(config: &AssetProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    check_bind_address(&config.bind_address, &mut errors);
    check_url("upstream_url", &config.upstream_url, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate the gateway configuration.
pub fn validate_gateway(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    check_bind_address(&config.bind_address, &mut errors);
    check_url("bot_service_url", &config.bot_service_url, &mut errors);
    let prefix = &config.bot_service_prefix;
    if !prefix.starts_with('/') || prefix.trim_end_matches('/').is_empty() {
        errors.push(ValidationError::PrefixShape(prefix.clone()));
    }
    if config.static_root.is_empty() {
        errors.push(ValidationError::EmptyStaticRoot);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_bind_address(address: &str, errors: &mut Vec<ValidationError>) {
    if address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(address.to_string()));
    }
}

fn check_url(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    match Url::parse(value) {
        Ok(url) => {
            if url.host_str().is_none() {
                errors.push(ValidationError::MissingHost {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Err(reason) => errors.push(ValidationError::Url {
            field,
            value: value.to_string(),
            reason,
        }),
    }
}
