//! CLI command for printing dictionary entries

use std::path::Path;

use crate::formats::dictionary::{PhraseEntry, read_dictionary};

/// Print entries, optionally filtered by group name
pub fn execute(
    path: &Path,
    group: Option<&str>,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let dictionary = read_dictionary(path)?;

    let entries: Vec<&PhraseEntry> = match group {
        Some(query) => dictionary.entries_in_group(query).collect(),
        None => dictionary.entries.iter().collect(),
    };
    let entries: Vec<&PhraseEntry> = entries
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        match group {
            Some(query) => println!("No entries found in groups matching '{query}'"),
            None => println!("No entries in {}", path.display()),
        }
        return Ok(());
    }

    for entry in &entries {
        println!("{} -> {}", entry.group_name, entry.phrase);
    }

    Ok(())
}
