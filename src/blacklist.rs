//! Blacklist file loading.
//!
//! Reads the excluded networks from a JSON file: a flat array of
//! `"address/prefix"` strings.

use crate::models::Network;
use std::error::Error;
use std::path::Path;

/// Read a blacklist file into validated [`Network`] entries.
///
/// # Arguments
/// * `file` - Path to a JSON array of `"address/prefix"` strings
///
/// # Returns
/// * `Ok(Vec<Network>)` - The parsed blacklist, in file order
/// * `Err` - If the file is missing, or any entry fails to parse
pub fn read_blacklist(file: &str) -> Result<Vec<Network>, Box<dyn Error>> {
    if !Path::new(file).exists() {
        return Err(format!("Blacklist file does not exist: {file}").into());
    }
    log::info!("Reading blacklist file: {file}");

    let json = std::fs::read_to_string(file)
        .map_err(|e| format!("Error reading blacklist file {file}: {e}"))?;
    let blacklist: Vec<Network> =
        serde_json::from_str(&json).map_err(|e| format!("Error parsing blacklist JSON: {e}"))?;

    log::info!("Read {} blacklist entries from {file}", blacklist.len());
    Ok(blacklist)
}
