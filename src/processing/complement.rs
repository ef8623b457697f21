//! Blacklist inversion.
//!
//! Computes the complement of a blacklist against the full address space
//! of each family: the minimal list of CIDR networks covering every
//! address that is not blacklisted.

use super::decompose::decompose_range;
use crate::models::{
    format_ipv4, format_ipv6, hex_string, Family, Network, IPV4_LENGTH, IPV6_LENGTH,
};
use std::error::Error;

/// Compute the whitelist: all networks not covered by the blacklist.
///
/// IPv4 and IPv6 entries are processed independently; the result holds
/// the IPv4 networks first (ascending), then the IPv6 networks
/// (ascending). A family with no blacklist entries yields its full
/// address space as a single `/0` network.
///
/// Exact duplicates (same numeric value and prefix, however the literal
/// is written) are collapsed. Overlapping-but-distinct exclusions are an
/// input error.
pub fn compute_complement(blacklist: &[Network]) -> Result<Vec<Network>, Box<dyn Error>> {
    log::info!(
        "#Start compute_complement() with {} blacklist entries",
        blacklist.len()
    );
    let mut whitelist =
        family_complement(blacklist, Family::Ipv4, IPV4_LENGTH, "0.0.0.0", format_v4)?;
    whitelist.extend(family_complement(
        blacklist,
        Family::Ipv6,
        IPV6_LENGTH,
        "::",
        format_ipv6,
    )?);
    Ok(whitelist)
}

fn format_v4(value: u128) -> String {
    format_ipv4(value as u32)
}

/// Invert one family's exclusions against its address space.
fn family_complement(
    blacklist: &[Network],
    family: Family,
    bits: u8,
    any_address: &str,
    format_value: fn(u128) -> String,
) -> Result<Vec<Network>, Box<dyn Error>> {
    let mut excluded: Vec<&Network> = blacklist.iter().filter(|n| n.family() == family).collect();

    if excluded.is_empty() {
        log::debug!("No {family} exclusions, whitelisting the whole space");
        return Ok(vec![Network::new(any_address, 0)?]);
    }

    // Dedup by covered range - must be sorted first
    excluded.sort_by_key(|n| (n.numeric(), n.prefix()));
    excluded.dedup_by_key(|n| (n.numeric(), n.prefix()));

    let space_last = if bits == 128 {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    };

    let mut whitelist = Vec::new();
    let mut next_free: u128 = 0;
    let mut exhausted = false;
    let mut previous: Option<&Network> = None;

    for net in excluded.iter().copied() {
        if exhausted || net.numeric() < next_free {
            let prev = previous.expect("first exclusion cannot overlap");
            return Err(format!(
                "Overlapping {family} exclusions: {net} begins inside {prev}"
            )
            .into());
        }
        let gap = net.numeric() - next_free;
        log::trace!(
            "{family} gap at 0x{} len 0x{}",
            hex_string(next_free),
            hex_string(gap)
        );
        push_blocks(&mut whitelist, decompose_range(next_free, gap, bits), format_value)?;

        if net.broadcast() >= space_last {
            exhausted = true;
        } else {
            next_free = net.broadcast() + 1;
        }
        previous = Some(net);
    }

    if !exhausted {
        let tail = space_last - next_free + 1;
        log::trace!(
            "{family} tail gap at 0x{} len 0x{}",
            hex_string(next_free),
            hex_string(tail)
        );
        push_blocks(&mut whitelist, decompose_range(next_free, tail, bits), format_value)?;
    }

    log::debug!(
        "{family}: {} exclusions inverted into {} whitelist networks",
        excluded.len(),
        whitelist.len()
    );
    Ok(whitelist)
}

/// Materialize decomposed blocks as [`Network`] values through the
/// validated constructor, so the textual and numeric forms agree.
fn push_blocks(
    whitelist: &mut Vec<Network>,
    blocks: Vec<(u128, u8)>,
    format_value: fn(u128) -> String,
) -> Result<(), Box<dyn Error>> {
    for (base, prefix) in blocks {
        whitelist.push(Network::new(&format_value(base), prefix)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nets(cidrs: &[&str]) -> Vec<Network> {
        cidrs
            .iter()
            .map(|c| Network::from_cidr(c).expect("test CIDR must parse"))
            .collect()
    }

    fn by_family(whitelist: &[Network], family: Family) -> Vec<&Network> {
        whitelist.iter().filter(|n| n.family() == family).collect()
    }

    /// Sum of block sizes; only valid when every prefix is non-zero.
    fn covered(blocks: &[&Network]) -> u128 {
        blocks
            .iter()
            .map(|n| {
                assert!(n.prefix() > 0, "full-space block in a coverage sum");
                1u128 << (u32::from(n.length()) - u32::from(n.prefix()))
            })
            .sum()
    }

    fn assert_sorted_disjoint(blocks: &[&Network]) {
        for pair in blocks.windows(2) {
            assert!(
                pair[0].broadcast() < pair[1].numeric(),
                "{} overlaps or follows {}",
                pair[0],
                pair[1]
            );
        }
    }

    fn assert_not_covered(blocks: &[&Network], address: u128) {
        for net in blocks {
            assert!(
                address < net.numeric() || address > net.broadcast(),
                "{} covers excluded address {address}",
                net
            );
        }
    }

    #[test]
    fn test_empty_blacklist() {
        let whitelist = compute_complement(&[]).unwrap();
        let cidrs: Vec<String> = whitelist.iter().map(|n| n.to_string()).collect();
        assert_eq!(cidrs, vec!["0.0.0.0/0", "::/0"]);
    }

    #[test]
    fn test_single_host_excluded() {
        let host: u128 = 0x7F000001;
        let whitelist = compute_complement(&nets(&["127.0.0.1/32"])).unwrap();

        let v4 = by_family(&whitelist, Family::Ipv4);
        assert_eq!(v4.len(), 32);
        assert_eq!(v4[0].to_string(), "0.0.0.0/2");
        assert_eq!(covered(&v4), (1u128 << 32) - 1);
        assert_sorted_disjoint(&v4);
        assert_not_covered(&v4, host);

        // The untouched family still gets its full space.
        let v6 = by_family(&whitelist, Family::Ipv6);
        assert_eq!(v6.len(), 1);
        assert_eq!(v6[0].to_string(), "::/0");
    }

    #[test]
    fn test_adjacent_host_exclusions() {
        // Four contiguous /32s; the gap walk must not leave partial
        // coverage between them.
        let blacklist = nets(&[
            "5.9.167.178/32",
            "5.9.167.179/32",
            "5.9.167.180/32",
            "5.9.167.181/32",
        ]);
        let whitelist = compute_complement(&blacklist).unwrap();
        let v4 = by_family(&whitelist, Family::Ipv4);

        assert_eq!(covered(&v4), (1u128 << 32) - 4);
        assert_sorted_disjoint(&v4);
        for offset in 0..4u128 {
            assert_not_covered(&v4, 0x0509A7B2 + offset);
        }
    }

    #[test]
    fn test_duplicates_are_idempotent() {
        let with_duplicates = nets(&[
            "5.9.167.180/32",
            "5.9.167.178/32",
            "5.9.167.179/32",
            "5.9.167.181/32",
            "5.9.167.178/32",
            "5.9.167.179/32",
            "5.9.167.180/32",
            "5.9.167.181/32",
        ]);
        let deduplicated = nets(&[
            "5.9.167.178/32",
            "5.9.167.179/32",
            "5.9.167.180/32",
            "5.9.167.181/32",
        ]);
        assert_eq!(
            compute_complement(&with_duplicates).unwrap(),
            compute_complement(&deduplicated).unwrap()
        );
    }

    #[test]
    fn test_duplicate_literals_written_differently() {
        // Dedup keys on the numeric value, not the raw literal.
        let spelled_twice = nets(&[
            "::1/128",
            "0000:0000:0000:0000:0000:0000:0000:0001/128",
        ]);
        let once = nets(&["::1/128"]);
        assert_eq!(
            compute_complement(&spelled_twice).unwrap(),
            compute_complement(&once).unwrap()
        );
    }

    #[test]
    fn test_ipv6_boundary_hosts() {
        let blacklist = nets(&[
            "0000:0000:0000:0000:0000:0000:0000:0001/128",
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffe/128",
        ]);
        let whitelist = compute_complement(&blacklist).unwrap();
        let v6 = by_family(&whitelist, Family::Ipv6);

        assert_eq!(v6.len(), 254);
        assert_eq!(covered(&v6), u128::MAX - 1);
        assert_sorted_disjoint(&v6);
        assert_not_covered(&v6, 1);
        assert_not_covered(&v6, u128::MAX - 1);
        assert_eq!(
            v6.first().unwrap().to_string(),
            "0000:0000:0000:0000:0000:0000:0000:0000/128"
        );
        assert_eq!(
            v6.last().unwrap().to_string(),
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff/128"
        );
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let shuffled = nets(&["10.3.4.167/32", "5.9.167.178/32", "192.168.1.0/24"]);
        let sorted = nets(&["5.9.167.178/32", "10.3.4.167/32", "192.168.1.0/24"]);
        assert_eq!(
            compute_complement(&shuffled).unwrap(),
            compute_complement(&sorted).unwrap()
        );
    }

    #[test]
    fn test_families_partition_the_result() {
        let blacklist = nets(&["127.0.0.1/32", "::1/128"]);
        let whitelist = compute_complement(&blacklist).unwrap();

        // IPv4 first, then IPv6, each ascending.
        let first_v6 = whitelist
            .iter()
            .position(|n| n.family() == Family::Ipv6)
            .unwrap();
        assert!(whitelist[..first_v6]
            .iter()
            .all(|n| n.family() == Family::Ipv4));
        assert!(whitelist[first_v6..]
            .iter()
            .all(|n| n.family() == Family::Ipv6));
    }

    #[test]
    fn test_overlapping_exclusions_rejected() {
        let blacklist = nets(&["10.0.0.0/8", "10.1.0.0/16"]);
        let err = compute_complement(&blacklist).unwrap_err();
        assert!(err.to_string().contains("Overlapping"), "{err}");

        // Same base, different prefix is an overlap too, not a duplicate.
        let blacklist = nets(&["10.0.0.0/8", "10.0.0.0/16"]);
        assert!(compute_complement(&blacklist).is_err());
    }

    #[test]
    fn test_exclusion_reaching_space_end() {
        let whitelist = compute_complement(&nets(&["128.0.0.0/1"])).unwrap();
        let v4 = by_family(&whitelist, Family::Ipv4);
        assert_eq!(v4.len(), 1);
        assert_eq!(v4[0].to_string(), "0.0.0.0/1");
    }

    #[test]
    fn test_everything_excluded() {
        // A /0 blacklist entry leaves nothing to whitelist for its family.
        let whitelist = compute_complement(&nets(&["0.0.0.0/0"])).unwrap();
        assert!(by_family(&whitelist, Family::Ipv4).is_empty());
        assert_eq!(by_family(&whitelist, Family::Ipv6).len(), 1);
    }
}
