//! `.pc` DLC phrase dictionary format
//!
//! A zlib-compressed container holding a table of phrases, each paired with a
//! group name. The layout is only partly self-describing: the phrase table is
//! found by scanning for a `STAB` marker and for a second copy of the
//! dictionary size, and every record offset is relative to a base derived from
//! where that copy sits.
//!
//! Stages, in order:
//!
//! 1. [`inflate_container`](crate::compression::inflate_container)
//! 2. [`scan_layout`] - size fields, `STAB`, size recurrence, phrase count
//! 3. [`read_records`] - fixed-width offset/size/end table
//! 4. [`extract_phrases`] - UTF-16 phrase + Latin-1 group name per record

mod layout;
mod phrases;
mod reader;
mod records;
pub mod text;

use serde::Serialize;

pub use layout::scan_layout;
pub use phrases::extract_phrases;
pub use reader::{
    decode_dictionary, inspect_dictionary_bytes, parse_dictionary_bytes, read_dictionary,
};
pub use records::read_records;

/// Offsets of the two redundant dictionary size fields
pub const SIZE_FIELD_OFFSETS: [u64; 2] = [0x08, 0x58];

/// "STAB" as a big-endian word
pub const STAB_SIGNATURE: u32 = 0x53544142;

/// Distance back from the end of the recurring size word to the offset base
pub const BEGIN_OFFSET_BACKTRACK: u64 = 0x10;

/// Distance from the end of the recurring size word to the phrase count
pub const COUNT_FIELD_DISTANCE: i64 = 0x14;

/// Two 24-byte rows between the phrase count and the first record
pub const TABLE_HEADER_SIZE: i64 = 24 * 2;

/// Unidentified per-record field following `end`
pub const RECORD_ID_SIZE: i64 = 4;

/// Padding after every record but the last
pub const RECORD_PADDING: i64 = 8;

/// Padding after the last record
pub const LAST_RECORD_PADDING: i64 = 4;

/// Where the phrase table lives inside a decompressed dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DictionaryLayout {
    /// Larger of the two size fields
    pub dict_size: u32,
    /// Offset of the `STAB` word
    pub signature_offset: u64,
    /// Offset of the word where `dict_size` recurred
    pub size_field_offset: u64,
    /// Base for every record `start`/`end`
    pub begin_offset: u64,
    /// Phrase count as stored; one more than the number of usable records
    pub count: u32,
}

impl DictionaryLayout {
    /// Number of records the table actually holds.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.count.saturating_sub(1) as usize
    }
}

/// One row of the phrase record table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhraseRecord {
    pub start: u32,
    pub size: u32,
    pub end: u32,
    /// `end - start`, zero if `end` precedes `start`
    pub length: u32,
}

impl PhraseRecord {
    #[must_use]
    pub fn new(start: u32, size: u32, end: u32) -> Self {
        Self {
            start,
            size,
            end,
            length: end.saturating_sub(start),
        }
    }
}

/// A decoded group name / phrase pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseEntry {
    pub group_name: String,
    pub phrase: String,
}

/// A fully decoded dictionary
#[derive(Debug, Clone, Serialize)]
pub struct PhraseDictionary {
    pub layout: DictionaryLayout,
    pub records: Vec<PhraseRecord>,
    pub entries: Vec<PhraseEntry>,
}

impl PhraseDictionary {
    /// Number of extracted entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose group name contains `query`, case-insensitively.
    pub fn entries_in_group<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a PhraseEntry> {
        let query_lower = query.to_lowercase();
        self.entries
            .iter()
            .filter(move |e| e.group_name.to_lowercase().contains(&query_lower))
    }
}
