//! Address family classification.
//!
//! Decides whether a textual address literal is IPv4, IPv6 or neither.
//! Both grammars are anchored to the whole string so substrings of longer
//! text are never accepted.

use lazy_static::lazy_static;
use regex::Regex;

/// Address family of a network literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Ipv4,
    Ipv6,
    Invalid,
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Family::Ipv4 => write!(f, "IPv4"),
            Family::Ipv6 => write!(f, "IPv6"),
            Family::Invalid => write!(f, "invalid"),
        }
    }
}

lazy_static! {
    // Four dot-separated decimal octets, each 0-255, no leading zeros.
    static ref IPV4_RE: Regex =
        Regex::new(r"^(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]\d|\d)(?:\.(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]\d|\d)){3}$")
            .expect("Invalid Regex?");
    // RFC 2732 style colon-hex grouping, including the :: elision and the
    // embedded IPv4 tail forms. The grammar accepts the tail forms; the
    // codec rejects them later, at parse time.
    static ref IPV6_RE: Regex =
        Regex::new(r"^(?:(?:(?:[0-9A-Fa-f]{0,4}:){7}[0-9A-Fa-f]{0,4})|(?:(?:[0-9A-Fa-f]{0,4}:){6}:[0-9A-Fa-f]{0,4})|(?:(?:[0-9A-Fa-f]{0,4}:){5}:(?:[0-9A-Fa-f]{0,4}:)?[0-9A-Fa-f]{0,4})|(?:(?:[0-9A-Fa-f]{0,4}:){4}:(?:[0-9A-Fa-f]{0,4}:){0,2}[0-9A-Fa-f]{0,4})|(?:(?:[0-9A-Fa-f]{0,4}:){3}:(?:[0-9A-Fa-f]{0,4}:){0,3}[0-9A-Fa-f]{0,4})|(?:(?:[0-9A-Fa-f]{0,4}:){2}:(?:[0-9A-Fa-f]{0,4}:){0,4}[0-9A-Fa-f]{0,4})|(?:(?:[0-9A-Fa-f]{0,4}:){6}(?:(?:(?:25[0-5])|(?:2[0-4]\d)|(?:1\d{2})|(?:\d{1,2}))\.){3}(?:(?:25[0-5])|(?:2[0-4]\d)|(?:1\d{2})|(?:\d{1,2})))|(?:(?:[0-9A-Fa-f]{0,4}:){0,5}:(?:(?:(?:25[0-5])|(?:2[0-4]\d)|(?:1\d{2})|(?:\d{1,2}))\.){3}(?:(?:25[0-5])|(?:2[0-4]\d)|(?:1\d{2})|(?:\d{1,2})))|(?:::(?:[0-9A-Fa-f]{0,4}:){0,5}(?:(?:(?:25[0-5])|(?:2[0-4]\d)|(?:1\d{2})|(?:\d{1,2}))\.){3}(?:(?:25[0-5])|(?:2[0-4]\d)|(?:1\d{2})|(?:\d{1,2})))|(?:[0-9A-Fa-f]{0,4}::(?:[0-9A-Fa-f]{0,4}:){0,5}[0-9A-Fa-f]{0,4})|(?:::(?:[0-9A-Fa-f]{0,4}:){0,6}[0-9A-Fa-f]{0,4})|(?:(?:[0-9A-Fa-f]{0,4}:){1,7}:))$")
            .expect("Invalid Regex?");
}

/// Whether the literal is a valid IPv4 address.
pub fn is_ipv4(address: &str) -> bool {
    IPV4_RE.is_match(address)
}

/// Whether the literal matches the IPv6 grammar.
pub fn is_ipv6(address: &str) -> bool {
    IPV6_RE.is_match(address)
}

/// Classify a literal as IPv4, IPv6 or invalid.
///
/// IPv4 is tried first; a literal that matches neither grammar is
/// [`Family::Invalid`].
pub fn classify(address: &str) -> Family {
    if is_ipv4(address) {
        Family::Ipv4
    } else if is_ipv6(address) {
        Family::Ipv6
    } else {
        Family::Invalid
    }
}
