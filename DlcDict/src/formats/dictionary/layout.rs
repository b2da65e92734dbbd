//! Locating the phrase table inside a decompressed dictionary

use std::io::{Cursor, Seek, SeekFrom};

use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt};

use super::{
    BEGIN_OFFSET_BACKTRACK, COUNT_FIELD_DISTANCE, DictionaryLayout, SIZE_FIELD_OFFSETS,
    STAB_SIGNATURE,
};
use crate::error::{Error, Result};

/// Scan the header and locate the phrase count.
///
/// The `STAB` scan starts wherever the size-field reads leave the cursor
/// (`0x5C`), not at the start of the buffer. On success the cursor sits just
/// after the count field, ready for [`read_records`](super::read_records).
///
/// # Errors
///
/// Returns [`Error::Corrupt`] if the buffer is too short for the size fields.
/// Returns [`Error::SignatureNotFound`] if no `STAB` word follows them.
/// Returns [`Error::SizeFieldNotFound`] if the dictionary size never recurs.
/// Returns [`Error::Truncated`] if the buffer ends before the count field.
pub fn scan_layout(cursor: &mut Cursor<&[u8]>) -> Result<DictionaryLayout> {
    let mut sizes = [0u32; 2];
    for (size, &offset) in sizes.iter_mut().zip(&SIZE_FIELD_OFFSETS) {
        cursor.seek(SeekFrom::Start(offset))?;
        *size = cursor.read_u32::<LittleEndian>().map_err(|_| Error::Corrupt {
            message: format!("buffer ends before size field at {offset:#x}"),
        })?;
    }
    let dict_size = sizes[0].max(sizes[1]);
    tracing::debug!("Size fields {:?}, dictionary size {}", sizes, dict_size);

    let signature_offset =
        scan_for_word::<BigEndian>(cursor, STAB_SIGNATURE).ok_or(Error::SignatureNotFound)?;
    tracing::debug!("Found STAB at {:#x}", signature_offset);

    let size_field_offset = scan_for_word::<LittleEndian>(cursor, dict_size)
        .ok_or(Error::SizeFieldNotFound { dict_size })?;

    // Record offsets are relative to the start of the 16-byte row before this point
    let begin_offset = cursor.position().saturating_sub(BEGIN_OFFSET_BACKTRACK);

    cursor.seek(SeekFrom::Current(COUNT_FIELD_DISTANCE))?;
    let count = cursor
        .read_u32::<LittleEndian>()
        .map_err(|e| Error::from_read(e, "phrase count"))?;

    tracing::debug!(
        "Dictionary size recurs at {:#x}, begin offset {:#x}, count {}",
        size_field_offset,
        begin_offset,
        count
    );

    Ok(DictionaryLayout {
        dict_size,
        signature_offset,
        size_field_offset,
        begin_offset,
        count,
    })
}

/// Step forward one 32-bit word at a time until `target` is read.
///
/// Returns the offset of the matching word, leaving the cursor just past it.
/// Returns `None` once fewer than four bytes remain.
fn scan_for_word<B: ByteOrder>(cursor: &mut Cursor<&[u8]>, target: u32) -> Option<u64> {
    loop {
        let offset = cursor.position();
        match cursor.read_u32::<B>() {
            Ok(word) if word == target => return Some(offset),
            Ok(_) => {}
            Err(_) => return None,
        }
    }
}
