//! Phrase and group name extraction

use std::io::Cursor;

use super::text::{apply_substitutions, decode_latin1_field, decode_utf16_field, latin1_to_string};
use super::{PhraseEntry, PhraseRecord};
use crate::error::{Error, Result};

/// Decode one entry per record, in table order.
///
/// Each phrase is `length * 2 + 2` bytes of UTF-16 at `begin_offset + start`.
/// The group name runs from the end of the phrase to where the next record's
/// phrase begins; the last record has no successor, so its group name is
/// null-terminated instead.
///
/// A phrase that is not valid UTF-16 is emitted as an empty string.
///
/// # Errors
///
/// Returns [`Error::Truncated`] if the last group name has no null terminator.
pub fn extract_phrases(
    data: &[u8],
    begin_offset: u64,
    records: &[PhraseRecord],
) -> Result<Vec<PhraseEntry>> {
    let mut cursor = Cursor::new(data);
    let mut entries = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let begin = begin_offset + u64::from(record.start);
        let phrase_end = records
            .get(index + 1)
            .map(|next| begin_offset + u64::from(next.start));

        cursor.set_position(begin);

        let phrase_len = u64::from(record.length) * 2 + 2;
        let phrase = match decode_utf16_field(read_clamped(&mut cursor, phrase_len), begin) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Phrase {} unreadable, leaving it empty: {}", index, e);
                String::new()
            }
        };

        let group_name = match phrase_end {
            Some(end) => {
                let len = end.saturating_sub(cursor.position());
                decode_latin1_field(read_clamped(&mut cursor, len))
            }
            None => read_null_terminated(&mut cursor)?,
        };

        entries.push(PhraseEntry {
            group_name: apply_substitutions(&group_name),
            phrase: apply_substitutions(&phrase),
        });
    }

    Ok(entries)
}

/// Read up to `len` bytes, stopping at the end of the buffer.
fn read_clamped<'a>(cursor: &mut Cursor<&'a [u8]>, len: u64) -> &'a [u8] {
    let data: &'a [u8] = *cursor.get_ref();
    let position = cursor.position();
    let available = (data.len() as u64).saturating_sub(position);
    let take = len.min(available);
    if take == 0 {
        return &[];
    }

    cursor.set_position(position + take);
    &data[position as usize..(position + take) as usize]
}

/// Read single-byte characters up to (not including) the next null byte.
fn read_null_terminated(cursor: &mut Cursor<&[u8]>) -> Result<String> {
    let data: &[u8] = *cursor.get_ref();
    let position = cursor.position();
    let rest = data.get(position as usize..).unwrap_or_default();

    let Some(len) = rest.iter().position(|&b| b == 0) else {
        return Err(Error::Truncated {
            context: "unterminated group name",
        });
    };

    cursor.set_position(position + len as u64 + 1);
    Ok(latin1_to_string(&rest[..len]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: u64 = 8;

    /// Lay out `(phrase, group)` pairs from `BASE`, returning the buffer and records.
    fn phrase_area(pairs: &[(&str, &str)]) -> (Vec<u8>, Vec<PhraseRecord>) {
        let mut buf = vec![0xCCu8; BASE as usize];
        let mut records = Vec::new();
        for (phrase, group) in pairs {
            let start = (buf.len() as u64 - BASE) as u32;
            let units = phrase.encode_utf16().count() as u32;
            buf.extend(phrase.encode_utf16().flat_map(u16::to_le_bytes));
            buf.extend_from_slice(&[0, 0]);
            buf.extend_from_slice(group.as_bytes());
            buf.push(0);
            records.push(PhraseRecord::new(start, units, start + units));
        }
        (buf, records)
    }

    fn entry(group_name: &str, phrase: &str) -> PhraseEntry {
        PhraseEntry {
            group_name: group_name.to_string(),
            phrase: phrase.to_string(),
        }
    }

    #[test]
    fn test_extracts_pairs_in_order() {
        let (buf, records) = phrase_area(&[
            ("Let\u{19}s go", "Intro"),
            ("\u{1C}Encore\u{1D}", "Crowd"),
            ("Goodnight", "Outro"),
        ]);
        let entries = extract_phrases(&buf, BASE, &records).unwrap();
        assert_eq!(
            entries,
            vec![
                entry("Intro", "Let's go"),
                entry("Crowd", "\u{201C}Encore\u{201D}"),
                entry("Outro", "Goodnight"),
            ]
        );
    }

    #[test]
    fn test_last_group_name_stops_at_first_null() {
        let (mut buf, records) = phrase_area(&[("One", "First"), ("Two", "Last")]);
        buf.extend_from_slice(b"trailing\0");
        let entries = extract_phrases(&buf, BASE, &records).unwrap();
        assert_eq!(entries[1], entry("Last", "Two"));
    }

    #[test]
    fn test_last_group_name_is_not_stripped() {
        let (buf, records) = phrase_area(&[("Solo", " Spaced ")]);
        let entries = extract_phrases(&buf, BASE, &records).unwrap();
        assert_eq!(entries[0].group_name, " Spaced ");
    }

    #[test]
    fn test_unterminated_last_group_name_is_truncated() {
        let (mut buf, records) = phrase_area(&[("One", "First"), ("Two", "Last")]);
        buf.pop();
        assert!(matches!(
            extract_phrases(&buf, BASE, &records),
            Err(Error::Truncated { .. })
        ));
    }

    #[test]
    fn test_invalid_phrase_is_emptied_and_extraction_continues() {
        let (mut buf, records) = phrase_area(&[("One", "First"), ("Two", "Last")]);
        // Unpaired high surrogate in place of the first 'O'
        let first = BASE as usize;
        buf[first..first + 2].copy_from_slice(&0xD800u16.to_le_bytes());

        let entries = extract_phrases(&buf, BASE, &records).unwrap();
        assert_eq!(entries, vec![entry("First", ""), entry("Last", "Two")]);
    }

    #[test]
    fn test_group_name_empty_when_phrase_overruns_next_start() {
        // Record 0 claims 10 units but record 1 starts 10 bytes later
        let mut buf = vec![0u8; BASE as usize];
        buf.extend(std::iter::repeat_n(b'x', 64));
        buf.push(0);
        let records = vec![PhraseRecord::new(0, 5, 10), PhraseRecord::new(10, 3, 16)];

        let entries = extract_phrases(&buf, BASE, &records).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].group_name, "");
    }

    #[test]
    fn test_phrase_past_end_of_buffer_is_empty() {
        let buf = vec![0u8; 16];
        let records = vec![PhraseRecord::new(100, 2, 104), PhraseRecord::new(0, 0, 0)];
        let entries = extract_phrases(&buf, 0, &records).unwrap();
        assert_eq!(entries[0], entry("", ""));
    }
}
