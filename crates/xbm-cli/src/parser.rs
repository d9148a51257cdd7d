//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the spreadsheet-backed bookmark store.
#[derive(Parser)]
#[command(name = "xbm")]
#[command(about = "Manage saved posts in a spreadsheet-backed bookmark store")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
