//! Path-prefix rewriting for the reverse-proxy hop.
//!
//! # Responsibilities
//! - Strip the bot-service prefix from a request path
//! - Build the absolute upstream URI from the rewritten path
//!
//! # Design Decisions
//! - Pure functions, independent of any HTTP handler
//! - Prefix matches only at segment boundaries (`/bot-servicex` is not
//!   a prefix match for `/bot-service`)
//! - The bare prefix rewrites to `/`

use axum::http::uri::InvalidUri;
use axum::http::Uri;
use url::{Position, Url};

/// Strip `prefix` from `path` at a segment boundary.
///
/// Returns the remainder starting with `/`, or `None` when the path does
/// not live under the prefix.
pub fn strip_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?;
    match rest {
        "" => Some("/"),
        _ if rest.starts_with('/') => Some(rest),
        _ => None,
    }
}

/// Join a rewritten path (and the original query string, if any) onto the
/// upstream base URL, producing an absolute request URI.
pub fn upstream_uri(base: &Url, path: &str, query: Option<&str>) -> Result<Uri, InvalidUri> {
    // scheme://host[:port] of the base, with any path on it ignored.
    let origin = &base[..Position::BeforePath];
    let target = match query {
        Some(query) => format!("{origin}{path}?{query}"),
        None => format!("{origin}{path}"),
    };
    target.parse()
}
