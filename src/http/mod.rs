//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (with peer SocketAddr)
//!     → server.rs (Axum setup, trace + timeout layers)
//!     → extract.rs (ClientOrigin: Forwarded → X-Forwarded-* → connection)
//!     → handler (JSON echo of the resolved origin)
//! ```

pub mod extract;
pub mod server;

pub use extract::{ClientOrigin, OriginRejection};
pub use server::EchoServer;
