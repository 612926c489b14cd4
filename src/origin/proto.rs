//! Client-facing scheme resolution.

use axum::http::HeaderName;

use crate::forwarded::{find_directive_value, ForwardedKey};
use crate::origin::request::{header_value, OriginRequest};
use crate::origin::FORWARDED;

/// `X-Forwarded-Proto`, see <https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/X-Forwarded-Proto>.
pub const X_FORWARDED_PROTO: HeaderName = HeaderName::from_static("x-forwarded-proto");

/// Resolve the scheme the client originally used.
///
/// `Forwarded: proto=...` wins, then a non-empty `X-Forwarded-Proto`, then
/// `https` or `http` depending on whether this connection is encrypted.
/// Header-provided values are returned as given, not restricted to http(s).
pub fn resolve_proto<R: OriginRequest + ?Sized>(request: &R) -> String {
    if let Some(proto) = header_value(request, &FORWARDED)
        .and_then(|forwarded| find_directive_value(&forwarded, ForwardedKey::Proto))
    {
        tracing::trace!(proto = %proto, source = "forwarded", "Resolved proto");
        return proto;
    }

    if let Some(proto) = header_value(request, &X_FORWARDED_PROTO) {
        tracing::trace!(proto = %proto, source = "x-forwarded-proto", "Resolved proto");
        return proto.into_owned();
    }

    let scheme = if request.is_tls() { "https" } else { "http" };
    scheme.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::origin::RequestSnapshot;
    use axum::http::{HeaderMap, HeaderValue};

    #[test]
    fn no_forwarding_headers() {
        assert_eq!(resolve_proto(&RequestSnapshot::new()), "http");
    }

    #[test]
    fn no_forwarding_headers_with_tls() {
        let req = RequestSnapshot::new().with_tls(true);
        assert_eq!(resolve_proto(&req), "https");
    }

    #[test]
    fn x_forwarded_proto_set() {
        let req = RequestSnapshot::new().with_header("X-Forwarded-Proto", "x-proto");
        assert_eq!(resolve_proto(&req), "x-proto");
    }

    #[test]
    fn x_forwarded_proto_empty() {
        let req = RequestSnapshot::new().with_header("X-Forwarded-Proto", "");
        assert_eq!(resolve_proto(&req), "http");
    }

    #[test]
    fn forwarded_without_proto() {
        let req = RequestSnapshot::new().with_header("Forwarded", "for=somebody");
        assert_eq!(resolve_proto(&req), "http");
    }

    #[test]
    fn forwarded_proto_empty() {
        let req = RequestSnapshot::new().with_header("Forwarded", "for=somebody;proto=");
        assert_eq!(resolve_proto(&req), "http");
    }

    #[test]
    fn forwarded_proto() {
        let req = RequestSnapshot::new().with_header("Forwarded", "for=somebody;proto=f-proto");
        assert_eq!(resolve_proto(&req), "f-proto");
    }

    #[test]
    fn forwarded_has_highest_priority() {
        let req = RequestSnapshot::new()
            .with_tls(true)
            .with_header("X-Forwarded-Proto", "x-proto")
            .with_header("Forwarded", "for=somebody;proto=f-proto");
        assert_eq!(resolve_proto(&req), "f-proto");
    }

    #[test]
    fn header_overrides_tls() {
        let req = RequestSnapshot::new()
            .with_tls(true)
            .with_header("X-Forwarded-Proto", "http");
        assert_eq!(resolve_proto(&req), "http");
    }

    #[test]
    fn forwarded_with_non_ascii_pair_still_matches() {
        let mut headers = HeaderMap::new();
        headers.insert(
            FORWARDED,
            HeaderValue::from_bytes("by=\"né\";proto=https".as_bytes()).unwrap(),
        );
        let req = RequestSnapshot::new().with_headers(headers);
        assert_eq!(resolve_proto(&req), "https");
    }
}
