//! Output formatting for the computed whitelist.

mod csv;

pub use csv::print_whitelist;
