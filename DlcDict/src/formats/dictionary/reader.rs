//! `.pc` dictionary reading

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use super::{
    DictionaryLayout, PhraseDictionary, extract_phrases, read_records, scan_layout,
};
use crate::compression::inflate_container;
use crate::error::Result;

/// Read a .pc dictionary from disk
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, otherwise any
/// error from [`parse_dictionary_bytes`].
///
/// [`Error::Io`]: crate::Error::Io
pub fn read_dictionary<P: AsRef<Path>>(path: P) -> Result<PhraseDictionary> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    parse_dictionary_bytes(&buffer)
}

/// Decompress and decode a complete .pc container
///
/// # Errors
///
/// Returns [`Error::Corrupt`] if the container cannot be inflated, otherwise
/// any error from [`decode_dictionary`].
///
/// [`Error::Corrupt`]: crate::Error::Corrupt
pub fn parse_dictionary_bytes(data: &[u8]) -> Result<PhraseDictionary> {
    let decompressed = inflate_container(data)?;
    decode_dictionary(&decompressed)
}

/// Decode an already-inflated dictionary buffer
///
/// # Errors
///
/// Returns [`Error::SignatureNotFound`], [`Error::SizeFieldNotFound`] or
/// [`Error::Corrupt`] if the phrase table cannot be located, and
/// [`Error::Truncated`] if the record table or the final group name runs
/// past the end of the buffer.
///
/// [`Error::SignatureNotFound`]: crate::Error::SignatureNotFound
/// [`Error::SizeFieldNotFound`]: crate::Error::SizeFieldNotFound
/// [`Error::Corrupt`]: crate::Error::Corrupt
/// [`Error::Truncated`]: crate::Error::Truncated
pub fn decode_dictionary(data: &[u8]) -> Result<PhraseDictionary> {
    let mut cursor = Cursor::new(data);

    let layout = scan_layout(&mut cursor)?;
    let records = read_records(&mut cursor, layout.count)?;
    let entries = extract_phrases(data, layout.begin_offset, &records)?;

    Ok(PhraseDictionary {
        layout,
        records,
        entries,
    })
}

/// Decompress a .pc container and locate its phrase table without decoding it
///
/// # Errors
///
/// Same as [`parse_dictionary_bytes`], minus record and phrase failures.
pub fn inspect_dictionary_bytes(data: &[u8]) -> Result<DictionaryLayout> {
    let decompressed = inflate_container(data)?;
    scan_layout(&mut Cursor::new(decompressed.as_slice()))
}
