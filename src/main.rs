//! ipa-report - size composition of iOS app archives
//!
//! Validates an `.ipa` path, obtains a size tree from an analysis engine and
//! prints it as an indented report, largest artifacts first.

use clap::Parser;

mod analysis;
mod cli;
mod commands;
mod common;
mod domain;
mod error;
mod report;
mod ui;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::analyze::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
