//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::Parser;
use std::path::PathBuf;

use crate::config;

/// twicdl - TWIC bundle downloader
///
/// Download weekly PGN zip bundles from The Week In Chess archive.
#[derive(Parser, Debug)]
#[command(
    name = "twicdl",
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Download TWIC PGN zip bundles",
    long_about = "twicdl reads the TWIC listing page, resolves a range of weekly bundle ids \
                  against it, and downloads the matching PGN zip archives to a local directory.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  twicdl --all\n    \
                  twicdl --start 920 --end 1500\n    \
                  twicdl --start 1500                (single bundle)\n    \
                  twicdl --end 400                   (single bundle)\n    \
                  twicdl -a -f -o ./pgn              (redownload everything)"
)]
pub struct Cli {
    /// Download all PGN zip bundles on the listing
    #[arg(short, long, conflicts_with_all = ["start", "end"])]
    pub all: bool,

    /// Start of the range. Without --end, only this one bundle is downloaded
    #[arg(short, long, value_name = "ID")]
    pub start: Option<u32>,

    /// End of the range. Without --start, only this one bundle is downloaded
    #[arg(short, long, value_name = "ID")]
    pub end: Option<u32>,

    /// Overwrite bundles that already exist on disk
    #[arg(short, long)]
    pub force: bool,

    /// Output directory (default: TWIC-<timestamp>-<start>_<end>)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Listing page URL
    #[arg(long, env = "TWIC_URL", default_value = config::TWIC_URL, hide = true)]
    pub url: String,

    /// Bundle URL prefix; <prefix><id>g.zip is a full bundle URL
    #[arg(long, env = "TWIC_ZIP_URL", default_value = config::TWIC_ZIP_URL, hide = true)]
    pub zip_url: String,
}
