//! `dlcdict` command line

pub mod commands;
pub mod progress;

use clap::Parser;
use commands::Commands;

/// Extract `group -> phrase` listings from DLC dictionary (.pc) containers
#[derive(Parser)]
#[command(name = "dlcdict", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Parse arguments and run the selected subcommand.
///
/// Log output goes to stderr so `show --json` stays clean on stdout.
pub fn run_cli() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    Cli::parse().command.execute()
}
