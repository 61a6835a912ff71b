//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate; no metrics endpoint
//! - Per-request access logging is a tower-http layer on each router,
//!   not hand-rolled middleware

pub mod logging;
