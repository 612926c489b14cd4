//! Client-facing host resolution.

use axum::http::HeaderName;

use crate::forwarded::{find_directive_value, ForwardedKey};
use crate::origin::request::{header_value, OriginRequest};
use crate::origin::FORWARDED;

/// `X-Forwarded-Host`, see <https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/X-Forwarded-Host>.
pub const X_FORWARDED_HOST: HeaderName = HeaderName::from_static("x-forwarded-host");

/// Resolve the host the client originally asked for.
///
/// `Forwarded: host=...` wins, then a non-empty `X-Forwarded-Host`, then the
/// connection-level host.
pub fn resolve_host<R: OriginRequest + ?Sized>(request: &R) -> String {
    if let Some(host) = header_value(request, &FORWARDED)
        .and_then(|forwarded| find_directive_value(&forwarded, ForwardedKey::Host))
    {
        tracing::trace!(host = %host, source = "forwarded", "Resolved host");
        return host;
    }

    if let Some(host) = header_value(request, &X_FORWARDED_HOST) {
        tracing::trace!(host = %host, source = "x-forwarded-host", "Resolved host");
        return host.into_owned();
    }

    request.host().into_owned()
}
