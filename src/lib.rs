//! Client-facing request origin resolution behind reverse proxies.
//!
//! Recovers the host, scheme and source address the client actually used
//! from `Forwarded`, then `X-Forwarded-*`, then the connection itself.
//!
//! ```
//! use forwarded_origin::origin::{resolve_host, resolve_source, RequestSnapshot};
//!
//! let request = RequestSnapshot::new()
//!     .with_host("10.0.0.5:8080")
//!     .with_remote_addr("10.0.0.1:41000")
//!     .with_header("Forwarded", "for=\"192.0.2.1:4000\";host=example.com");
//!
//! assert_eq!(resolve_host(&request), "example.com");
//! assert_eq!(resolve_source(&request).unwrap(), "192.0.2.1");
//! ```

// Core
pub mod forwarded;
pub mod origin;

// Service
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::EchoConfig;
pub use http::{ClientOrigin, EchoServer};
pub use lifecycle::Shutdown;
pub use origin::{
    resolve_host, resolve_origin, resolve_proto, resolve_source, Origin, OriginRequest,
    RequestSnapshot, SourceError,
};
