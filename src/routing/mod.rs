//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → rewrite.rs (strip bot-service prefix)
//!     → matched: forward to bot service with rewritten URI
//!     → not matched: static file lookup, then 404
//! ```
//!
//! # Design Decisions
//! - Prefix matching only, no regex in the hot path
//! - Rewriting is a pure function so it can be tested without a server
//! - Deterministic: same input always produces the same rewrite

pub mod rewrite;
