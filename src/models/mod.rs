//! Domain models for network whitelist calculation.
//!
//! This module contains the data types and stateless codecs:
//! - [`Network`] - a network block with derived numeric value and family
//! - [`family`] - address family classification
//! - [`ipv4`] / [`ipv6`] - literal/integer codecs per family

mod family;
mod ipv4;
mod ipv6;
mod network;

// Re-export public types
pub use family::{classify, is_ipv4, is_ipv6, Family};
pub use ipv4::{format_ipv4, parse_ipv4, IPV4_LENGTH};
pub use ipv6::{format_ipv6, hex_string, parse_ipv6, IPV6_LENGTH};
pub use network::Network;
