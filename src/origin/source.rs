//! Client source address resolution.

use axum::http::HeaderName;

use crate::forwarded::{find_directive_value, normalize_address, split_host_port, ForwardedKey};
use crate::origin::error::SourceError;
use crate::origin::request::{header_value, OriginRequest};
use crate::origin::FORWARDED;

/// `X-Forwarded-For`, see <https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/X-Forwarded-For>.
pub const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

/// Resolve the address of the client that sent the request.
///
/// Priority:
/// 1. `Forwarded: for=...`, quotes stripped, port and IPv6 brackets removed.
/// 2. `X-Forwarded-For`, taken whole (no walking of comma-separated hops).
/// 3. The connection's remote address, which must be `host:port`.
///
/// Only the last tier can fail.
pub fn resolve_source<R: OriginRequest + ?Sized>(request: &R) -> Result<String, SourceError> {
    if let Some(node) = header_value(request, &FORWARDED)
        .and_then(|forwarded| find_directive_value(&forwarded, ForwardedKey::For))
    {
        let source = normalize_address(node.trim_matches('"')).to_string();
        tracing::trace!(source_addr = %source, source = "forwarded", "Resolved source");
        return Ok(source);
    }

    if let Some(forwarded_for) = header_value(request, &X_FORWARDED_FOR) {
        let source = normalize_address(&forwarded_for).to_string();
        tracing::trace!(source_addr = %source, source = "x-forwarded-for", "Resolved source");
        return Ok(source);
    }

    let remote_addr = request.remote_addr();
    split_host_port(&remote_addr)
        .map(|(host, _)| host.to_string())
        .ok_or_else(|| SourceError::UnparsableRemoteAddr(remote_addr.to_string()))
}
