//! Error types for range coding and dictionary operations.
//!
//! This module provides the [`LzmaError`] type which covers all possible
//! errors that can occur in the range coder and the decoder dictionary.
//!
//! ## Error Categories
//!
//! | Category | Errors | Description |
//! |----------|--------|-------------|
//! | Configuration | [`InvalidCapacity`], [`LimitTooSmall`] | Bad construction parameters |
//! | Corrupt input | [`InvalidLeadingByte`], [`CodeOverflow`], [`InvalidDistance`], [`InvalidMatchLen`] | Stream cannot be decoded |
//! | Backpressure | [`LimitExceeded`], [`NoRoom`], [`BufferTooSmall`] | Recoverable resource conditions |
//! | I/O | [`Io`] | Underlying stream errors |
//!
//! Configuration errors are detected eagerly at construction and require
//! reconfiguring. Corrupt-input errors are terminal for the stream; no
//! resynchronization is attempted. Backpressure conditions are expected
//! during normal operation: the caller drains or splits and retries.
//!
//! ## Example
//!
//! ```rust,ignore
//! use lzma_stream::{DecoderDict, LzmaError};
//!
//! match dict.write_byte(b) {
//!     Ok(()) => {}
//!     Err(LzmaError::NoRoom) => drain_and_retry(&mut dict, b)?,
//!     Err(e) => return Err(e),
//! }
//! ```
//!
//! [`InvalidCapacity`]: LzmaError::InvalidCapacity
//! [`LimitTooSmall`]: LzmaError::LimitTooSmall
//! [`InvalidLeadingByte`]: LzmaError::InvalidLeadingByte
//! [`CodeOverflow`]: LzmaError::CodeOverflow
//! [`InvalidDistance`]: LzmaError::InvalidDistance
//! [`InvalidMatchLen`]: LzmaError::InvalidMatchLen
//! [`LimitExceeded`]: LzmaError::LimitExceeded
//! [`NoRoom`]: LzmaError::NoRoom
//! [`BufferTooSmall`]: LzmaError::BufferTooSmall
//! [`Io`]: LzmaError::Io

use std::fmt;
use std::io;

/// Error type for range coding and dictionary operations.
///
/// Covers construction, encoding, decoding and window maintenance. It
/// implements [`std::error::Error`] for integration with the Rust error
/// handling ecosystem.
#[derive(Debug)]
pub enum LzmaError {
    /// The dictionary capacities are invalid.
    ///
    /// Construction requires `dict_cap > 0` and `buf_cap >= dict_cap`.
    InvalidCapacity {
        /// Requested logical history capacity.
        dict_cap: usize,
        /// Requested physical buffer capacity.
        buf_cap: usize,
    },

    /// The configured byte limit is too small.
    ///
    /// The flush trailer alone needs 5 bytes, so any limit below 5 can
    /// never produce a decodable stream.
    LimitTooSmall(u64),

    /// The first byte of the range-coded stream is not `0x00`.
    ///
    /// A compliant encoder always emits a zero leading byte; anything
    /// else means the input is not a range-coded stream or is corrupt.
    InvalidLeadingByte(u8),

    /// The decode window exceeded the coding interval after init.
    ///
    /// `code >= nrange` can only be produced by corrupt input.
    CodeOverflow,

    /// A match references data outside the recorded history.
    InvalidDistance {
        /// The requested backward distance.
        distance: usize,
        /// Valid history depth at the time of the request.
        history: usize,
    },

    /// A match was requested with a non-positive length.
    InvalidMatchLen(usize),

    /// The configured byte limit has been reached.
    ///
    /// This is a backpressure signal, not corruption: an outer chunking
    /// layer can split output into size-bounded segments and continue
    /// with a fresh coder.
    LimitExceeded,

    /// The dictionary buffer is full.
    ///
    /// Another backpressure signal: the consumer must drain buffered
    /// bytes via `read` before the write can be retried.
    NoRoom,

    /// Fewer bytes are buffered than a `peek` requested.
    BufferTooSmall {
        /// Number of bytes requested.
        needed: usize,
        /// Number of bytes currently buffered.
        have: usize,
    },

    /// An I/O error occurred on the underlying stream.
    ///
    /// Wraps [`std::io::Error`]; premature end of input during decoding
    /// surfaces here as [`io::ErrorKind::UnexpectedEof`].
    Io(io::Error),
}

impl fmt::Display for LzmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { dict_cap, buf_cap } => {
                write!(
                    f,
                    "invalid dictionary capacity: dict_cap {} buf_cap {}",
                    dict_cap, buf_cap
                )
            }
            Self::LimitTooSmall(limit) => {
                write!(f, "byte limit {} is below the 5-byte minimum", limit)
            }
            Self::InvalidLeadingByte(b) => {
                write!(f, "leading stream byte 0x{:02x} is not zero", b)
            }
            Self::CodeOverflow => write!(f, "decoder code exceeds coding interval"),
            Self::InvalidDistance { distance, history } => {
                write!(
                    f,
                    "match distance {} exceeds history depth {}",
                    distance, history
                )
            }
            Self::InvalidMatchLen(len) => write!(f, "invalid match length {}", len),
            Self::LimitExceeded => write!(f, "configured byte limit reached"),
            Self::NoRoom => write!(f, "no room in dictionary buffer"),
            Self::BufferTooSmall { needed, have } => {
                write!(f, "buffer too small: need {} bytes, have {}", needed, have)
            }
            Self::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for LzmaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LzmaError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, LzmaError>;
