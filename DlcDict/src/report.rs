//! Plain-text phrase reports
//!
//! One `<stem>_phrases.txt` per dictionary: a three-line header followed by a
//! `group -> phrase` line per entry.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::formats::dictionary::PhraseDictionary;

const RULE: &str = "------------------------------------------";

/// Header lines at the top of every report
pub const REPORT_HEADER: [&str; 3] = [RULE, "Group Name -> Phrase", RULE];

/// Suffix appended to the input stem to name the report
pub const REPORT_SUFFIX: &str = "_phrases.txt";

/// Render the report text. Lines are newline-joined with no trailing newline.
pub fn render_report(dictionary: &PhraseDictionary) -> String {
    let mut lines: Vec<String> = REPORT_HEADER.iter().map(ToString::to_string).collect();
    lines.extend(
        dictionary
            .entries
            .iter()
            .map(|e| format!("{} -> {}", e.group_name, e.phrase)),
    );
    lines.join("\n")
}

/// Where the report for `input` goes.
///
/// Next to the input by default, or inside `output_dir` when one is given.
pub fn report_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let name = format!("{stem}{REPORT_SUFFIX}");
    match output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

/// Write the rendered report as UTF-8.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_report<P: AsRef<Path>>(path: P, dictionary: &PhraseDictionary) -> Result<()> {
    fs::write(path, render_report(dictionary))?;
    Ok(())
}
