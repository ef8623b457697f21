use network_whitelist::output::print_whitelist;
use network_whitelist::{compute_complement, read_blacklist};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    log::info!("#Start main()");

    let file = std::env::args()
        .nth(1)
        .ok_or("Usage: network-whitelist <blacklist.json>")?;

    let blacklist = read_blacklist(&file)?;
    let whitelist = compute_complement(&blacklist)?;
    print_whitelist(&blacklist, &whitelist)?;

    Ok(())
}
