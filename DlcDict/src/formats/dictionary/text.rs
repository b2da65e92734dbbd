//! Text field decoding
//!
//! Phrases are UTF-16 (little-endian unless a byte order mark says
//! otherwise); group names are single-byte Latin-1. A few control characters
//! stand in for typographic punctuation and are replaced after decoding.

use crate::error::{Error, Result};

/// Control characters used as punctuation, and their replacements
pub const TEXT_SUBSTITUTIONS: [(char, char); 3] = [
    ('\u{19}', '\''),
    ('\u{1C}', '\u{201C}'),
    ('\u{1D}', '\u{201D}'),
];

/// Decode a UTF-16 phrase field and strip its null/space padding.
///
/// `offset` is only used for error reporting.
///
/// # Errors
///
/// Returns [`Error::InvalidText`] for an odd byte count or an unpaired surrogate.
pub fn decode_utf16_field(bytes: &[u8], offset: u64) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(Error::InvalidText {
            offset,
            reason: format!("odd byte length {}", bytes.len()),
        });
    }

    let big_endian = bytes.starts_with(&[0xFE, 0xFF]);
    let body = if big_endian || bytes.starts_with(&[0xFF, 0xFE]) {
        &bytes[2..]
    } else {
        bytes
    };

    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|pair| {
            let pair = [pair[0], pair[1]];
            if big_endian {
                u16::from_be_bytes(pair)
            } else {
                u16::from_le_bytes(pair)
            }
        })
        .collect();

    let text = String::from_utf16(&units).map_err(|e| Error::InvalidText {
        offset,
        reason: e.to_string(),
    })?;

    Ok(strip_padding(&text).to_string())
}

/// Decode a bounded Latin-1 field and strip its null/space padding.
pub fn decode_latin1_field(bytes: &[u8]) -> String {
    strip_padding(&latin1_to_string(bytes)).to_string()
}

/// Map each byte to the code point of the same value.
pub fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Replace the punctuation stand-ins listed in [`TEXT_SUBSTITUTIONS`].
pub fn apply_substitutions(text: &str) -> String {
    text.chars()
        .map(|c| {
            TEXT_SUBSTITUTIONS
                .iter()
                .find(|(find, _)| *find == c)
                .map_or(c, |&(_, replace)| replace)
        })
        .collect()
}

fn strip_padding(text: &str) -> &str {
    text.trim_matches(|c: char| c == '\0' || c == ' ')
}
