//! Container decompression
//!
//! A `.pc` dictionary is a fixed 400-byte header followed by a single zlib
//! stream. The header is not interpreted.

use flate2::{Decompress, FlushDecompress, Status};

use crate::error::{Error, Result};

/// Size of the opaque header preceding the zlib stream
pub const CONTAINER_HEADER_SIZE: usize = 400;

/// Minimum output growth per inflate step
const INFLATE_CHUNK: usize = 64 * 1024;

/// Strip the container header and inflate the remainder.
///
/// # Errors
/// Returns [`Error::Corrupt`] if the input is shorter than the header or the
/// zlib stream is invalid, truncated, or fails its checksum.
pub fn inflate_container(raw: &[u8]) -> Result<Vec<u8>> {
    let Some(compressed) = raw.get(CONTAINER_HEADER_SIZE..) else {
        return Err(Error::Corrupt {
            message: format!(
                "container is {} bytes, header alone is {CONTAINER_HEADER_SIZE}",
                raw.len()
            ),
        });
    };

    let mut inflater = Decompress::new(true);
    let mut decompressed = Vec::with_capacity(compressed.len().saturating_mul(4));

    loop {
        if decompressed.len() == decompressed.capacity() {
            decompressed.reserve(compressed.len().max(INFLATE_CHUNK));
        }

        let before_in = inflater.total_in();
        let before_out = inflater.total_out();
        let remaining = &compressed[before_in as usize..];

        let status = inflater
            .decompress_vec(remaining, &mut decompressed, FlushDecompress::None)
            .map_err(|e| Error::Corrupt {
                message: format!("failed to decompress zlib data: {e}"),
            })?;

        match status {
            Status::StreamEnd => break,
            Status::Ok | Status::BufError => {
                // Output space was available, so no progress means the input ran out
                if inflater.total_in() == before_in && inflater.total_out() == before_out {
                    return Err(Error::Corrupt {
                        message: "zlib stream is truncated".to_string(),
                    });
                }
            }
        }
    }

    tracing::debug!(
        "Inflated {} compressed bytes to {} bytes",
        compressed.len(),
        decompressed.len()
    );

    Ok(decompressed)
}
