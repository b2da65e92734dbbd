//! Batch report extraction
//!
//! Every input gets its own decode pipeline, so inputs are processed in
//! parallel and one bad file never affects the others.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use walkdir::WalkDir;

use super::{DICTIONARY_EXTENSION, ExtractOptions, ExtractedFile, extract_file};
use crate::report::report_path;

/// Progress update for a batch extraction
#[derive(Debug, Clone)]
pub struct ExtractProgress {
    /// Current item number (1-indexed)
    pub current: usize,
    /// Total number of items
    pub total: usize,
    /// File being processed
    pub current_file: Option<String>,
}

/// What happened to one input
#[derive(Debug, Clone)]
pub enum FileOutcome {
    /// Report written
    Extracted(ExtractedFile),
    /// Path does not exist or is not a file; never reached the decoder
    Missing,
    /// Decoding or writing failed; no report was written
    Failed(String),
}

/// Outcome for one input path
#[derive(Debug, Clone)]
pub struct FileResult {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl FileResult {
    /// Whether a report was written
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, FileOutcome::Extracted(_))
    }
}

impl fmt::Display for FileResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        match &self.outcome {
            FileOutcome::Extracted(file) => write!(
                f,
                "Extracted: {path} ({} entries -> {})",
                file.entries,
                file.report.display()
            ),
            FileOutcome::Missing => write!(f, "Invalid file path: {path}"),
            FileOutcome::Failed(message) => write!(f, "Failed {path}: {message}"),
        }
    }
}

/// Result of a batch extraction
#[derive(Debug, Clone, Default)]
pub struct BatchExtractResult {
    /// Number of reports written
    pub success_count: usize,
    /// Number of inputs that failed to decode or write
    pub fail_count: usize,
    /// Number of inputs skipped because they do not exist
    pub skipped_count: usize,
    /// Per-input outcomes, in input order
    pub results: Vec<FileResult>,
}

impl BatchExtractResult {
    /// True when there were inputs and none of them produced a report
    #[must_use]
    pub fn all_failed(&self) -> bool {
        !self.results.is_empty() && self.success_count == 0
    }
}

/// Find all .pc files in a directory recursively
///
/// # Returns
/// A sorted list of paths to .pc files found in the directory tree.
pub fn find_dictionary_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| {
            e.path().is_file()
                && e.path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(DICTIONARY_EXTENSION))
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files
}

/// Replace directories with the .pc files beneath them.
///
/// Files and missing paths are passed through unchanged, in order, so that
/// missing ones can be reported by [`batch_extract`].
pub fn expand_inputs(paths: &[PathBuf]) -> Vec<PathBuf> {
    paths
        .iter()
        .flat_map(|path| {
            if path.is_dir() {
                find_dictionary_files(path)
            } else {
                vec![path.clone()]
            }
        })
        .collect()
}

/// For each input, the earlier input whose report would be written to the same
/// path, if any.
///
/// Inputs that share a file stem collide when reports are collected in one
/// output directory. The first one in input order keeps the path.
fn report_collisions<'a>(
    paths: &'a [PathBuf],
    options: &ExtractOptions,
) -> Vec<Option<&'a PathBuf>> {
    let mut owners: HashMap<PathBuf, &PathBuf> = HashMap::new();
    paths
        .iter()
        .map(|path| {
            if !path.is_file() {
                return None;
            }
            match owners.entry(report_path(path, options.output_dir())) {
                Entry::Occupied(owner) => Some(*owner.get()),
                Entry::Vacant(slot) => {
                    slot.insert(path);
                    None
                }
            }
        })
        .collect()
}

/// Extract reports for many dictionaries in parallel
///
/// Paths that are not existing files are reported as [`FileOutcome::Missing`]
/// and skipped before decoding. An input whose report path is already taken by
/// an earlier input fails without being decoded, so no report is overwritten.
pub fn batch_extract<F>(
    paths: &[PathBuf],
    options: &ExtractOptions,
    progress: F,
) -> BatchExtractResult
where
    F: Fn(&ExtractProgress) + Send + Sync,
{
    let success_counter = AtomicUsize::new(0);
    let fail_counter = AtomicUsize::new(0);
    let skipped_counter = AtomicUsize::new(0);
    let processed = AtomicUsize::new(0);
    let total = paths.len();
    let collisions = report_collisions(paths, options);

    let results: Vec<FileResult> = paths
        .par_iter()
        .zip(collisions.par_iter())
        .map(|(path, collision)| {
            let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
            progress(&ExtractProgress {
                current,
                total,
                current_file: Some(path.to_string_lossy().to_string()),
            });

            let outcome = if !path.is_file() {
                tracing::warn!("Invalid file path: {}", path.display());
                skipped_counter.fetch_add(1, Ordering::SeqCst);
                FileOutcome::Missing
            } else if let Some(owner) = collision {
                tracing::warn!(
                    "Skipping {}: report path collides with {}",
                    path.display(),
                    owner.display()
                );
                fail_counter.fetch_add(1, Ordering::SeqCst);
                FileOutcome::Failed(format!("report path collides with {}", owner.display()))
            } else {
                match extract_file(path, options) {
                    Ok(file) => {
                        success_counter.fetch_add(1, Ordering::SeqCst);
                        FileOutcome::Extracted(file)
                    }
                    Err(e) => {
                        tracing::warn!("Failed to extract {}: {}", path.display(), e);
                        fail_counter.fetch_add(1, Ordering::SeqCst);
                        FileOutcome::Failed(e.to_string())
                    }
                }
            };

            FileResult {
                path: path.clone(),
                outcome,
            }
        })
        .collect();

    BatchExtractResult {
        success_count: success_counter.load(Ordering::SeqCst),
        fail_count: fail_counter.load(Ordering::SeqCst),
        skipped_count: skipped_counter.load(Ordering::SeqCst),
        results,
    }
}
