//! Network entity: an address/prefix pair with its derived numeric value
//! and address family.
//!
//! A [`Network`] is built once from a validated literal and never mutated;
//! the numeric value therefore always agrees with the textual address.

use super::{
    classify, format_ipv4, format_ipv6, parse_ipv4, parse_ipv6, Family, IPV4_LENGTH, IPV6_LENGTH,
};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;

/// A network block: textual address, prefix length, and the values derived
/// from them at construction.
#[derive(Debug, Clone, Eq)]
pub struct Network {
    address: String,
    numeric: u128,
    prefix: u8,
    family: Family,
}

impl Network {
    /// Create a [`Network`] from an address literal and a prefix length.
    ///
    /// The literal is classified and parsed up front; a literal that is
    /// neither valid IPv4 nor valid IPv6, or a prefix outside the family's
    /// range, is an error naming the offending input.
    pub fn new(address: &str, prefix: u8) -> Result<Network, Box<dyn Error>> {
        let address = address.trim();
        let family = classify(address);
        let numeric = match family {
            Family::Ipv4 => u128::from(parse_ipv4(address)?),
            Family::Ipv6 => parse_ipv6(address)?,
            Family::Invalid => {
                return Err(
                    format!("Address '{address}' is neither valid IPv4 nor IPv6").into(),
                )
            }
        };
        let length = match family {
            Family::Ipv4 => IPV4_LENGTH,
            _ => IPV6_LENGTH,
        };
        if prefix > length {
            return Err(format!(
                "Prefix /{prefix} is too long for {family} address '{address}'"
            )
            .into());
        }
        Ok(Network {
            address: address.to_string(),
            numeric,
            prefix,
            family,
        })
    }

    /// Create a [`Network`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn from_cidr(cidr: &str) -> Result<Network, Box<dyn Error>> {
        let cidr = cidr.trim();
        let parts: Vec<&str> = cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(format!("Invalid address/prefix '{cidr}'").into());
        }
        let prefix: u8 = parts[1]
            .parse()
            .map_err(|_| format!("Invalid prefix '{}' in '{cidr}'", parts[1]))?;
        Network::new(parts[0], prefix)
    }

    /// The textual address literal.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The numeric address value, widened to `u128` for both families.
    pub fn numeric(&self) -> u128 {
        self.numeric
    }

    /// The prefix length.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// The address family.
    pub fn family(&self) -> Family {
        self.family
    }

    /// Bit length of the family's address space.
    pub fn length(&self) -> u8 {
        match self.family {
            Family::Ipv4 => IPV4_LENGTH,
            Family::Ipv6 => IPV6_LENGTH,
            Family::Invalid => unreachable!("Network cannot hold an invalid family"),
        }
    }

    /// The last address covered by this block,
    /// `numeric + 2^(length - prefix) - 1`, clamped to the end of the
    /// family's address space. The base is not required to be aligned to
    /// the prefix.
    pub fn broadcast(&self) -> u128 {
        let shift = u32::from(self.length()) - u32::from(self.prefix);
        let span = if shift == 128 {
            u128::MAX
        } else {
            (1u128 << shift) - 1
        };
        let space_last = match self.family {
            Family::Ipv4 => u128::from(u32::MAX),
            _ => u128::MAX,
        };
        self.numeric.saturating_add(span).min(space_last)
    }

    /// The broadcast address in the family's textual form.
    pub fn broadcast_address(&self) -> String {
        match self.family {
            Family::Ipv4 => format_ipv4(self.broadcast() as u32),
            _ => format_ipv6(self.broadcast()),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.address, self.prefix);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::from_cidr(&s).map_err(|e| de::Error::custom(e.to_string()))
    }
}

/// Equality by covered range: family, numeric value and prefix. Two
/// differently written literals denoting the same network compare equal.
impl PartialEq for Network {
    fn eq(&self, other: &Network) -> bool {
        self.family == other.family && self.numeric == other.numeric && self.prefix == other.prefix
    }
}

/// Ordering by numeric value, then prefix. Only meaningful between
/// networks of the same family; the calculator never compares across
/// families.
impl Ord for Network {
    fn cmp(&self, other: &Network) -> std::cmp::Ordering {
        self.numeric
            .cmp(&other.numeric)
            .then(self.prefix.cmp(&other.prefix))
    }
}

impl PartialOrd for Network {
    fn partial_cmp(&self, other: &Network) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
