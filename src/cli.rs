//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};

/// ipa-report - size composition of an iOS app archive
///
/// Breaks an .ipa down into its bundles and files, largest first.
#[derive(Parser, Debug)]
#[command(
    name = "ipa-report",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Report the size composition of an iOS app archive",
    long_about = "Reads an .ipa archive and prints its install and download size, followed by \
                  an indented tree of its bundles and files sorted by size. Asset catalogs \
                  (.car) and localization bundles (.lproj) are shown as a single entry.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  ipa-report --path App.ipa               \x1b[90m# Relative to the current directory\x1b[0m\n   \
                  ipa-report --path ~/builds/App.ipa -v   \x1b[90m# Log progress on stderr\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Path to the .ipa archive to analyze
    #[arg(long, short = 'p', value_name = "PATH")]
    pub path: String,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
