//! Phrase record table

use std::io::{Cursor, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use super::{LAST_RECORD_PADDING, PhraseRecord, RECORD_ID_SIZE, RECORD_PADDING, TABLE_HEADER_SIZE};
use crate::error::{Error, Result};

/// Bytes occupied by one record including its trailing padding
const RECORD_STRIDE: usize = 12 + RECORD_ID_SIZE as usize + RECORD_PADDING as usize;

/// Read the `count - 1` records that follow the phrase count.
///
/// The cursor must sit just after the count field, as left by
/// [`scan_layout`](super::scan_layout).
///
/// # Errors
///
/// Returns [`Error::Truncated`] if the buffer ends inside the table.
pub fn read_records(cursor: &mut Cursor<&[u8]>, count: u32) -> Result<Vec<PhraseRecord>> {
    let total = count.saturating_sub(1) as usize;

    cursor.seek(SeekFrom::Current(TABLE_HEADER_SIZE))?;

    // Never trust the stored count for the allocation
    let remaining = (cursor.get_ref().len() as u64).saturating_sub(cursor.position()) as usize;
    let mut records = Vec::with_capacity(total.min(remaining / RECORD_STRIDE + 1));

    for index in 0..total {
        let start = read_field(cursor)?;
        let size = read_field(cursor)?;
        let end = read_field(cursor)?;

        let padding = if index + 1 == total {
            LAST_RECORD_PADDING
        } else {
            RECORD_PADDING
        };
        cursor.seek(SeekFrom::Current(RECORD_ID_SIZE + padding))?;

        records.push(PhraseRecord::new(start, size, end));
    }

    tracing::debug!("Read {} phrase records", records.len());
    Ok(records)
}

fn read_field(cursor: &mut Cursor<&[u8]>) -> Result<u32> {
    cursor
        .read_u32::<LittleEndian>()
        .map_err(|e| Error::from_read(e, "phrase record table"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(rows: &[(u32, u32, u32)]) -> Vec<u8> {
        let mut buf = vec![0xEEu8; TABLE_HEADER_SIZE as usize];
        for (i, &(start, size, end)) in rows.iter().enumerate() {
            buf.extend_from_slice(&start.to_le_bytes());
            buf.extend_from_slice(&size.to_le_bytes());
            buf.extend_from_slice(&end.to_le_bytes());
            buf.extend_from_slice(&[0xDD; RECORD_ID_SIZE as usize]);
            let padding = if i + 1 == rows.len() { LAST_RECORD_PADDING } else { RECORD_PADDING };
            buf.extend(std::iter::repeat_n(0u8, padding as usize));
        }
        buf
    }

    #[test]
    fn test_reads_count_minus_one_records() {
        let buf = table(&[(0, 5, 10), (10, 3, 16)]);
        let mut cursor = Cursor::new(buf.as_slice());
        let records = read_records(&mut cursor, 3).unwrap();

        assert_eq!(
            records,
            vec![PhraseRecord::new(0, 5, 10), PhraseRecord::new(10, 3, 16)]
        );
        assert_eq!(records[1].length, 6);
        // Last record carries only four bytes of padding
        assert_eq!(cursor.position(), buf.len() as u64);
    }

    #[test]
    fn test_zero_and_one_count_read_nothing() {
        let buf = table(&[]);
        assert!(read_records(&mut Cursor::new(buf.as_slice()), 0).unwrap().is_empty());
        assert!(read_records(&mut Cursor::new(buf.as_slice()), 1).unwrap().is_empty());
    }

    #[test]
    fn test_short_table_is_truncated() {
        let mut buf = table(&[(0, 5, 10), (10, 3, 16)]);
        buf.truncate(buf.len() - 20);
        assert!(matches!(
            read_records(&mut Cursor::new(buf.as_slice()), 3),
            Err(Error::Truncated { .. })
        ));
    }

    #[test]
    fn test_huge_count_fails_without_allocating() {
        let buf = table(&[(0, 5, 10)]);
        assert!(matches!(
            read_records(&mut Cursor::new(buf.as_slice()), u32::MAX),
            Err(Error::Truncated { .. })
        ));
    }
}
