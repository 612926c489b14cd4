//! Request origin resolution subsystem.
//!
//! # Data Flow
//! ```text
//! request (OriginRequest)
//!     → host.rs    Forwarded host  → X-Forwarded-Host  → connection host
//!     → proto.rs   Forwarded proto → X-Forwarded-Proto → TLS ? https : http
//!     → source.rs  Forwarded for   → X-Forwarded-For   → remote address
//!     → Origin { host, proto, source }
//! ```
//!
//! # Design Decisions
//! - Stateless pure functions; safe to call from any number of tasks
//! - Empty header values never count as a match
//! - Only the source resolver can fail, and only on its last fallback

pub mod error;
pub mod host;
pub mod proto;
pub mod request;
pub mod source;

use axum::http::HeaderName;
use serde::Serialize;

pub use error::SourceError;
pub use host::{resolve_host, X_FORWARDED_HOST};
pub use proto::{resolve_proto, X_FORWARDED_PROTO};
pub use request::{OriginRequest, RequestSnapshot, TlsConnection};
pub use source::{resolve_source, X_FORWARDED_FOR};

/// `Forwarded`, see <https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Forwarded>.
pub const FORWARDED: HeaderName = HeaderName::from_static("forwarded");

/// Everything the client originally saw: host, scheme and its own address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Origin {
    pub host: String,
    pub proto: String,
    pub source: String,
}

/// Resolve host, proto and source in one go.
pub fn resolve_origin<R: OriginRequest + ?Sized>(request: &R) -> Result<Origin, SourceError> {
    Ok(Origin {
        host: resolve_host(request),
        proto: resolve_proto(request),
        source: resolve_source(request)?,
    })
}
