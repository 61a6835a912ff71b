//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Construct server → Bind listener → Serve
//!
//! Shutdown:
//!     Ctrl+C or Shutdown::trigger() → stop accepting → drain → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Shutdown is cooperative; in-flight requests are allowed to finish

pub mod shutdown;

pub use shutdown::Shutdown;
