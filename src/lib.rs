//! Inverts a blacklist of IP networks into the whitelist covering the
//! rest of the address space.
//!
//! Given excluded CIDR networks (for example VPN gateway addresses that
//! must stay outside a tunnel), [`compute_complement`] produces the
//! minimal set of non-overlapping CIDR networks covering every other
//! address, independently for IPv4 and IPv6.

pub mod blacklist;
pub mod models;
pub mod output;
pub mod processing;

pub use blacklist::read_blacklist;
pub use models::{Family, Network};
pub use processing::{compute_complement, decompose_range};

use std::error::Error;

/// Invert a blacklist given as `(address, prefix)` literal pairs.
///
/// Each entry is validated up front; the first invalid entry aborts the
/// batch with an error naming it. The result pairs are ordered IPv4
/// first, then IPv6, ascending within each family.
pub fn invert_blacklist(entries: &[(String, u8)]) -> Result<Vec<(String, u8)>, Box<dyn Error>> {
    let blacklist = entries
        .iter()
        .map(|(address, prefix)| Network::new(address, *prefix))
        .collect::<Result<Vec<_>, _>>()?;
    let whitelist = compute_complement(&blacklist)?;
    Ok(whitelist
        .iter()
        .map(|net| (net.address().to_string(), net.prefix()))
        .collect())
}
