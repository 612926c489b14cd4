//! `Forwarded` header directive scanning.
//!
//! See <https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Forwarded>.

/// Keys of the `Forwarded` header that the resolvers look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForwardedKey {
    /// Client address as seen by the first proxy.
    For,
    /// Host requested by the client.
    Host,
    /// Scheme used by the client.
    Proto,
}

impl ForwardedKey {
    /// The lower-case key as it appears in the header.
    pub fn as_str(&self) -> &'static str {
        match self {
            ForwardedKey::For => "for",
            ForwardedKey::Host => "host",
            ForwardedKey::Proto => "proto",
        }
    }
}

/// Find the first non-empty value for `key` in a `Forwarded` header.
///
/// Directives are separated by `;` and each directive may hold several
/// `,`-separated `key=value` pairs. The scan goes directive by directive,
/// pair by pair. A pair without `=` or with an empty value never matches.
///
/// The entire header text is lower-cased before scanning, so the returned
/// value is lower-case as well.
pub fn find_directive_value(header: &str, key: ForwardedKey) -> Option<String> {
    let lowered = header.to_lowercase();
    let target = key.as_str();

    lowered
        .split(';')
        .flat_map(|directive| directive.trim().split(','))
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == target && !value.is_empty()).then(|| value.to_string())
        })
}
