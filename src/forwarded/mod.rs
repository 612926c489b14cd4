//! Forwarding header parsing.
//!
//! # Data Flow
//! ```text
//! Forwarded: for=192.0.2.60;proto=http;by=203.0.113.43
//!     → directive.rs (lower-case, split directives and pairs, first match)
//!     → addr.rs (host:port split, bracket/quote stripping for `for`)
//!     → resolvers in crate::origin
//! ```
//!
//! # Design Decisions
//! - Permissive: malformed pairs are skipped, never rejected
//! - First non-empty match wins; hop identity is not tracked
//! - The whole header is lower-cased, so values come back lower-cased too

pub mod addr;
pub mod directive;

pub use addr::{normalize_address, split_host_port, strip_brackets};
pub use directive::{find_directive_value, ForwardedKey};
