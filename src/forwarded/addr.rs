//! Address normalization for `for` values and connection addresses.
//!
//! # Responsibilities
//! - Split `host:port` and `[ipv6]:port` into their host part
//! - Strip IPv6 brackets when no port is present
//!
//! # Design Decisions
//! - No IP validation: anything that is not `host:port` is passed through
//! - Unbalanced brackets are accepted as-is

/// Split a `host:port` string into host and port.
///
/// Accepts `host:port`, `[host]:port` and an empty port (`host:`). Returns
/// `None` when the port is missing, when an unbracketed host contains `:`
/// (a bare IPv6 literal), or when brackets are misplaced.
pub fn split_host_port(addr: &str) -> Option<(&str, &str)> {
    let colon = addr.rfind(':')?;

    let (host, inner_start, tail_start) = if addr.starts_with('[') {
        let close = addr.find(']')?;
        // The closing bracket must be immediately followed by the last colon.
        if close + 1 != colon {
            return None;
        }
        (&addr[1..close], 1, close + 1)
    } else {
        let host = &addr[..colon];
        if host.contains(':') {
            return None;
        }
        (host, 0, 0)
    };

    if addr[inner_start..].contains('[') || addr[tail_start..].contains(']') {
        return None;
    }

    Some((host, &addr[colon + 1..]))
}

/// Remove one leading `[` and one trailing `]`, each only if present.
pub fn strip_brackets(addr: &str) -> &str {
    let addr = addr.strip_prefix('[').unwrap_or(addr);
    addr.strip_suffix(']').unwrap_or(addr)
}

/// Reduce a forwarded address to its host part.
///
/// `ip:port` and `[ipv6]:port` yield the host; values without a port only
/// lose their surrounding brackets.
pub fn normalize_address(addr: &str) -> &str {
    match split_host_port(addr) {
        Some((host, _)) => host,
        None => strip_brackets(addr),
    }
}
