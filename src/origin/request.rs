//! Request abstraction consumed by the resolvers.
//!
//! # Responsibilities
//! - Expose headers, connection host, remote address and TLS state
//! - Adapt `http` requests (with axum's `ConnectInfo`) to that view
//! - Provide an owned snapshot for callers outside an HTTP stack

use std::borrow::Cow;
use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::http::{header, request::Parts, uri::Scheme, Extensions, HeaderMap, HeaderName, HeaderValue, Request, Uri};

/// Marker extension for encrypted connections.
///
/// Nothing in this crate terminates TLS. A TLS acceptor placed in front of
/// the router must insert it into each request's extensions; without it only
/// an `https` URI scheme marks a request as encrypted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TlsConnection;

/// Read-only view of the request fields the resolvers consult.
pub trait OriginRequest {
    /// Request headers. Names are matched case-insensitively.
    fn headers(&self) -> &HeaderMap;

    /// Host the connection was addressed to, empty if unknown.
    fn host(&self) -> Cow<'_, str>;

    /// Peer address as `ip:port` or `[ipv6]:port`, empty if unknown.
    fn remote_addr(&self) -> Cow<'_, str>;

    /// Whether the connection to this server is encrypted.
    fn is_tls(&self) -> bool;
}

/// Header bytes as text. Invalid UTF-8 is replaced, never rejected.
fn decode(value: &HeaderValue) -> Cow<'_, str> {
    String::from_utf8_lossy(value.as_bytes())
}

/// First value of `name`, if present and non-empty.
pub(crate) fn header_value<'a, R>(request: &'a R, name: &HeaderName) -> Option<Cow<'a, str>>
where
    R: OriginRequest + ?Sized,
{
    request
        .headers()
        .get(name)
        .map(decode)
        .filter(|value| !value.is_empty())
}

/// Owned request fields, for callers that do not hold an `http` request.
#[derive(Debug, Clone, Default)]
pub struct RequestSnapshot {
    headers: HeaderMap,
    host: String,
    remote_addr: String,
    tls: bool,
}

impl RequestSnapshot {
    /// Create an empty snapshot: no headers, no host, no peer, plaintext.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header value. Invalid names or values are ignored.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.append(name, value);
        }
        self
    }

    /// Replace all headers.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_remote_addr(mut self, remote_addr: impl Into<String>) -> Self {
        self.remote_addr = remote_addr.into();
        self
    }

    pub fn with_tls(mut self, tls: bool) -> Self {
        self.tls = tls;
        self
    }
}

impl OriginRequest for RequestSnapshot {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn host(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.host)
    }

    fn remote_addr(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.remote_addr)
    }

    fn is_tls(&self) -> bool {
        self.tls
    }
}

/// Absolute-form or HTTP/2 authority first, then the `Host` header.
fn connection_host<'a>(uri: &'a Uri, headers: &'a HeaderMap) -> Cow<'a, str> {
    if let Some(authority) = uri.authority() {
        return Cow::Borrowed(authority.as_str());
    }
    headers
        .get(header::HOST)
        .map(decode)
        .unwrap_or(Cow::Borrowed(""))
}

fn connection_remote_addr(extensions: &Extensions) -> Cow<'static, str> {
    extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| Cow::Owned(addr.to_string()))
        .unwrap_or(Cow::Borrowed(""))
}

fn connection_is_tls(uri: &Uri, extensions: &Extensions) -> bool {
    uri.scheme() == Some(&Scheme::HTTPS) || extensions.get::<TlsConnection>().is_some()
}

impl OriginRequest for Parts {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn host(&self) -> Cow<'_, str> {
        connection_host(&self.uri, &self.headers)
    }

    fn remote_addr(&self) -> Cow<'_, str> {
        connection_remote_addr(&self.extensions)
    }

    fn is_tls(&self) -> bool {
        connection_is_tls(&self.uri, &self.extensions)
    }
}

impl<B> OriginRequest for Request<B> {
    fn headers(&self) -> &HeaderMap {
        Request::headers(self)
    }

    fn host(&self) -> Cow<'_, str> {
        connection_host(self.uri(), Request::headers(self))
    }

    fn remote_addr(&self) -> Cow<'_, str> {
        connection_remote_addr(self.extensions())
    }

    fn is_tls(&self) -> bool {
        connection_is_tls(self.uri(), self.extensions())
    }
}
