//! ZX Spectrum TAP tape image reader and writer.
//!
//! TAP is the simplest Spectrum tape format: sequential blocks of data,
//! each preceded by a 2-byte little-endian length word. Each block contains
//! a flag byte, data bytes, and a checksum byte (XOR of flag + data).
//!
//! A typical program consists of two blocks:
//!   1. Header block (flag $00, 17 bytes of metadata)
//!   2. Data block (flag $FF, the actual program/data)
//!
//! Real-world TAP images are frequently padded or slightly malformed, so
//! the reader is deliberately lenient: zero-length blocks are accepted as
//! markers, and checksums are stored but not verified during parsing.
//! Callers that care can check [`TapBlock::checksum_ok`] afterwards.

use std::fmt;

mod block;
mod cursor;
mod header;
mod tap;

pub use block::{FLAG_DATA, FLAG_HEADER, TapBlock, encode_block};
pub use cursor::ByteCursor;
pub use header::{HEADER_LEN, HEADER_TYPE_CODE, TapHeader};
pub use tap::{NamedCodeBlock, TapFile};

/// Errors produced by the TAP codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapError {
    /// A read ran past the end of the buffer.
    OutOfBounds {
        /// Cursor position when the read was attempted.
        offset: usize,
        /// Number of bytes the read needed.
        wanted: usize,
        /// Number of bytes that remained.
        available: usize,
    },
    /// A header payload was not exactly [`HEADER_LEN`] bytes.
    MalformedHeader(usize),
    /// A block payload was too large for the u16 length word.
    PayloadTooLarge(usize),
}

impl fmt::Display for TapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                offset,
                wanted,
                available,
            } => write!(
                f,
                "read past end of buffer at offset {offset}: wanted {wanted} bytes, {available} remain"
            ),
            Self::MalformedHeader(len) => write!(
                f,
                "header payload must be {HEADER_LEN} bytes, got {len}"
            ),
            Self::PayloadTooLarge(len) => write!(
                f,
                "block payload of {len} bytes does not fit the u16 length word"
            ),
        }
    }
}

impl std::error::Error for TapError {}
