//! IPv6 address codec.
//!
//! Conversions between colon-hex literals and their `u128` values. The
//! embedded IPv4 tail notation (`::ffff:1.2.3.4`) is not supported and is
//! rejected at parse time.

use itertools::Itertools;
use std::error::Error;
use std::net::Ipv6Addr;

/// Bit length of an IPv6 address.
pub const IPV6_LENGTH: u8 = 128;

/// Parse a colon-hex literal into its numeric value.
///
/// Accepts the fully expanded 8-group form and the `::` elision (at most
/// one, expanded to exactly 8 groups). Hex digits are case-insensitive.
///
/// # Examples
/// ```
/// use network_whitelist::models::parse_ipv6;
/// assert_eq!(parse_ipv6("::ffff:7f00:1").unwrap(), 281472812449793);
/// ```
pub fn parse_ipv6(address: &str) -> Result<u128, Box<dyn Error>> {
    if address.contains('.') {
        return Err(format!("Embedded IPv4 notation is not supported: '{address}'").into());
    }
    let addr: Ipv6Addr = address
        .parse()
        .map_err(|_| format!("Invalid IPv6 address '{address}'"))?;
    Ok(u128::from(addr))
}

/// Format a numeric value as 8 colon-separated 4-hex-digit groups.
///
/// No `::` zero-compression is performed; compressing is a presentation
/// concern left to callers.
pub fn format_ipv6(value: u128) -> String {
    Ipv6Addr::from(value)
        .segments()
        .iter()
        .map(|group| format!("{group:04x}"))
        .join(":")
}

/// Render a numeric value as uppercase hexadecimal with no leading zeros.
pub fn hex_string(value: u128) -> String {
    format!("{value:X}")
}
