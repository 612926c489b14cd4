//! Errors raised while resolving a request's origin.

use thiserror::Error;

/// Failure of the source resolver's last fallback.
///
/// Forwarding headers never produce this: malformed headers fall through to
/// the next tier. Only a connection address that is not `host:port` does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("could not extract the IP portion of {0}")]
    UnparsableRemoteAddr(String),
}
