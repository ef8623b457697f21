//! CSV output for the computed whitelist.

use crate::models::Network;
use colored::Colorize;
use std::error::Error;

/// Print the whitelist as CSV to stdout.
///
/// One row per network, plus a summary note. Log output goes to stderr,
/// so stdout stays machine-readable.
pub fn print_whitelist(blacklist: &[Network], whitelist: &[Network]) -> Result<(), Box<dyn Error>> {
    log::info!("#Start print_whitelist() with {} networks", whitelist.len());

    println!(r#" "cnt",                                    "network", "prefix",                                  "broadcast""#);
    for (i, net) in whitelist.iter().enumerate() {
        print_csv_row(i + 1, net);
    }

    println!(
        "#{}# {} blacklist networks inverted into {} whitelist networks",
        "NOTE".on_red(),
        blacklist.len(),
        whitelist.len()
    );
    Ok(())
}

/// Print a single CSV row.
fn print_csv_row(cnt: usize, net: &Network) {
    println!(
        "{cnt},{network},{prefix},{broadcast}",
        cnt = csv_field(cnt, 6),
        network = csv_field(net, 44),
        prefix = csv_field(net.prefix(), 8),
        broadcast = csv_field(format!("{}_br", net.broadcast_address()), 42),
    );
}

/// Quote a value and right-align it to at least `width` characters.
fn csv_field<T: ToString>(value: T, width: usize) -> String {
    format!("{:>width$}", format!("\"{}\"", value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_field_short() {
        assert_eq!(csv_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_csv_field_exact() {
        assert_eq!(csv_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_csv_field_long() {
        assert_eq!(csv_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_csv_field_network() {
        let net = Network::new("10.0.0.0", 8).unwrap();
        assert_eq!(csv_field(&net, 12), "\"10.0.0.0/8\"");
        assert_eq!(csv_field(&net, 14), "  \"10.0.0.0/8\"");
    }
}
