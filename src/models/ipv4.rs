//! IPv4 address codec.
//!
//! Conversions between dotted-quad literals and their big-endian `u32`
//! values.

use std::error::Error;
use std::net::Ipv4Addr;

/// Bit length of an IPv4 address.
pub const IPV4_LENGTH: u8 = 32;

/// Parse a dotted-quad literal into its numeric value.
///
/// Requires exactly four decimal octets, each in `0..=255`. A malformed
/// literal is reported as an error naming the input, never as a sentinel
/// value.
///
/// # Examples
/// ```
/// use network_whitelist::models::parse_ipv4;
/// assert_eq!(parse_ipv4("127.0.0.1").unwrap(), 2130706433);
/// ```
pub fn parse_ipv4(address: &str) -> Result<u32, Box<dyn Error>> {
    let addr: Ipv4Addr = address
        .parse()
        .map_err(|_| format!("Invalid IPv4 address '{address}'"))?;
    Ok(u32::from(addr))
}

/// Format a numeric value as a dotted-quad literal.
pub fn format_ipv4(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}
