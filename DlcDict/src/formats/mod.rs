//! File format handlers
//!
//! Only the DLC phrase dictionary (`.pc`) container is supported.

pub mod dictionary;

// Re-export main dictionary types
pub use dictionary::{
    DictionaryLayout, PhraseDictionary, PhraseEntry, PhraseRecord, parse_dictionary_bytes,
    read_dictionary,
};
