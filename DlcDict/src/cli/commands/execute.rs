//! Command execution implementations

use super::Commands;
use super::{extract, info, show};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Extract {
                source,
                output_dir,
                quiet,
            } => extract::execute(source, output_dir.as_deref(), *quiet),
            Commands::Show {
                path,
                group,
                limit,
                json,
            } => show::execute(path, group.as_deref(), *limit, *json),
            Commands::Info { path, json } => info::execute(path, *json),
        }
    }
}
