use clap::Subcommand;
use std::path::PathBuf;

pub mod execute;
pub mod extract;
pub mod info;
pub mod show;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a `<name>_phrases.txt` report for each dictionary
    Extract {
        /// Dictionary file(s), or directories to search for .pc files
        #[arg(required = true)]
        source: Vec<PathBuf>,

        /// Write reports here instead of next to each input
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Suppress progress and per-file output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the entries of a dictionary
    Show {
        /// Dictionary file
        path: PathBuf,

        /// Only entries whose group name contains this text (case-insensitive)
        #[arg(short, long)]
        group: Option<String>,

        /// Maximum number of entries to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show where the phrase table sits inside a dictionary
    Info {
        /// Dictionary file
        path: PathBuf,

        /// Print the layout as JSON
        #[arg(long)]
        json: bool,
    },
}
