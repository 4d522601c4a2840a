//! Command-line interface definitions.

use clap::Parser;
use std::path::PathBuf;

/// Watch an election results feed and notify a Telegram chat when the
/// tally moves.
#[derive(Parser, Debug)]
#[command(name = "leadwatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Path to the snapshot file from the previous run
    #[arg(short = 'o', long = "snapshot", default_value = "old.json")]
    pub snapshot: PathBuf,
}
