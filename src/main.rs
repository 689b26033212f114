//! twicdl - TWIC bundle downloader
//!
//! Downloads weekly PGN zip bundles from The Week In Chess archive, resolving
//! a user-selected id range against the bundle index parsed from the listing
//! page.

use clap::Parser;

mod cli;
mod config;
mod download;
mod error;
mod fetch;
mod index;
mod progress;
mod report;
mod select;

use cli::Cli;
use config::Config;
use report::ConsoleReporter;

fn main() {
    let cli = Cli::parse();
    let config = Config::new(cli.url.clone(), cli.zip_url.clone());
    let reporter = ConsoleReporter;

    if let Err(e) = download::run(&config, &cli, &reporter) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
