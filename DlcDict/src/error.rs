//! Error types for `dlcdict`

use thiserror::Error;

/// The error type for dictionary decoding operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Container Errors ====================
    /// The container is too short or its compressed payload could not be inflated.
    #[error("corrupt container: {message}")]
    Corrupt {
        /// Description of what failed.
        message: String,
    },

    /// No `STAB` marker was found after the size fields.
    #[error("unable to find beginning of dictionary data (no STAB signature)")]
    SignatureNotFound,

    /// The dictionary size never recurred after the `STAB` marker.
    #[error("unable to find size/phrase count (dictionary size {dict_size} does not recur)")]
    SizeFieldNotFound {
        /// The dictionary size that was being searched for.
        dict_size: u32,
    },

    /// A read ran past the end of the decompressed buffer.
    #[error("unexpected end of data while reading {context}")]
    Truncated {
        /// What was being read.
        context: &'static str,
    },

    // ==================== Text Errors ====================
    /// A phrase field is not valid UTF-16.
    #[error("invalid UTF-16 phrase at offset {offset:#x}: {reason}")]
    InvalidText {
        /// Absolute offset of the phrase field in the decompressed buffer.
        offset: u64,
        /// Why decoding failed.
        reason: String,
    },
}

impl Error {
    /// Map an IO error raised while reading the decompressed buffer.
    ///
    /// Running off the end becomes [`Error::Truncated`]; anything else stays IO.
    pub(crate) fn from_read(err: std::io::Error, context: &'static str) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Error::Truncated { context }
        } else {
            Error::Io(err)
        }
    }
}

/// A specialized Result type for `dlcdict` operations.
pub type Result<T> = std::result::Result<T, Error>;
