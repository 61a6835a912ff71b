//! Request middleware shared by the service routers.

pub mod cors;

pub use cors::{cors_middleware, CorsHeaders};
