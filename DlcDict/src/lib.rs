//! # dlcdict
//!
//! Extracts group name / phrase pairs from compressed DLC dictionary
//! containers (`.pc` files).
//!
//! ## Quick Start
//!
//! ```no_run
//! use dlcdict::formats::dictionary::read_dictionary;
//!
//! let dictionary = read_dictionary("songs.pc")?;
//! for entry in &dictionary.entries {
//!     println!("{} -> {}", entry.group_name, entry.phrase);
//! }
//! # Ok::<(), dlcdict::Error>(())
//! ```
//!
//! ### Writing Reports
//!
//! ```no_run
//! use dlcdict::extract::{ExtractOptions, extract_file};
//!
//! // Writes songs_phrases.txt next to the input
//! let written = extract_file("songs.pc", &ExtractOptions::new())?;
//! println!("{} entries -> {}", written.entries, written.report.display());
//! # Ok::<(), dlcdict::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `dlcdict` command-line binary

pub mod compression;
pub mod error;
pub mod extract;
pub mod formats;
pub mod report;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::extract::{
        BatchExtractResult, ExtractOptions, batch_extract, extract_file, find_dictionary_files,
    };
    pub use crate::formats::dictionary::{
        DictionaryLayout, PhraseDictionary, PhraseEntry, PhraseRecord, parse_dictionary_bytes,
        read_dictionary,
    };
    pub use crate::report::{render_report, report_path, write_report};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
