//! Dictionary to report extraction
//!
//! Wraps the decoder with the file handling around it: reading the input,
//! writing `<stem>_phrases.txt`, and running many inputs as a batch.

mod batch;
mod options;

use std::fs;
use std::path::{Path, PathBuf};

pub use batch::{
    BatchExtractResult, ExtractProgress, FileOutcome, FileResult, batch_extract,
    expand_inputs, find_dictionary_files,
};
pub use options::ExtractOptions;

use crate::error::Result;
use crate::formats::dictionary::read_dictionary;
use crate::report::{report_path, write_report};

/// File extension of DLC dictionary containers
pub const DICTIONARY_EXTENSION: &str = "pc";

/// A report written for one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    /// Path of the written report
    pub report: PathBuf,
    /// Number of entries in the report
    pub entries: usize,
}

/// Decode one dictionary and write its report.
///
/// Nothing is written if decoding fails.
///
/// # Errors
/// Returns an error if the input cannot be read or decoded, or the report
/// cannot be written.
pub fn extract_file<P: AsRef<Path>>(input: P, options: &ExtractOptions) -> Result<ExtractedFile> {
    let input = input.as_ref();
    let dictionary = read_dictionary(input)?;

    if let Some(dir) = options.output_dir() {
        fs::create_dir_all(dir)?;
    }

    let report = report_path(input, options.output_dir());
    write_report(&report, &dictionary)?;

    tracing::info!(
        "Wrote {} entries from {} to {}",
        dictionary.len(),
        input.display(),
        report.display()
    );

    Ok(ExtractedFile {
        report,
        entries: dictionary.len(),
    })
}
