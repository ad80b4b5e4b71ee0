//! CLI subcommand implementations.

pub mod links;
pub mod scrape;
pub mod session;
