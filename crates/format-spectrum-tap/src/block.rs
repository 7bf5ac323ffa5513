//! Individual TAP blocks: decoding, encoding, and the XOR checksum.

use crate::{ByteCursor, TapError};

/// Flag byte marking a header block.
pub const FLAG_HEADER: u8 = 0x00;

/// Flag byte marking a data (code) block.
pub const FLAG_DATA: u8 = 0xFF;

/// Largest payload that fits the u16 length word (length = payload + 2).
const MAX_PAYLOAD: usize = 0xFFFF - 2;

/// A single block from a TAP file.
///
/// The length word counts the flag byte, the payload, and the checksum.
/// A length of zero is legal on tape and carries nothing at all; such
/// blocks show up as padding or end markers in real images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapBlock {
    /// Zero-length block: just the two length bytes, nothing else.
    Empty,
    /// Standard block: flag byte, payload, trailing checksum.
    Standard {
        /// Flag byte: $00 = header, $FF = data.
        flag: u8,
        /// Block payload (excludes the flag and checksum bytes).
        data: Vec<u8>,
        /// Checksum byte as stored on tape. Not verified during decode.
        checksum: u8,
    },
}

impl TapBlock {
    /// Decode one block at the cursor.
    ///
    /// No checksum verification is performed; real tape images are often
    /// dumped with bad checksums and the Spectrum ROM loader is the only
    /// authority on whether that matters.
    ///
    /// # Errors
    ///
    /// Returns [`TapError::OutOfBounds`] if the length word or the block
    /// body is truncated.
    pub fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, TapError> {
        let len = cursor.read_u16_le()? as usize;
        if len == 0 {
            return Ok(Self::Empty);
        }

        let body = cursor.read_bytes(len)?;
        let flag = body[0];
        let checksum = body[len - 1];
        // A length-1 block is a bare flag byte doubling as its own checksum.
        let data = if len >= 2 {
            body[1..len - 1].to_vec()
        } else {
            Vec::new()
        };

        Ok(Self::Standard {
            flag,
            data,
            checksum,
        })
    }

    /// The flag byte, or `None` for an empty block.
    #[must_use]
    pub fn flag(&self) -> Option<u8> {
        match self {
            Self::Empty => None,
            Self::Standard { flag, .. } => Some(*flag),
        }
    }

    /// The payload bytes, or `None` for an empty block.
    #[must_use]
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            Self::Empty => None,
            Self::Standard { data, .. } => Some(data),
        }
    }

    /// Whether this is a header block (flag $00).
    #[must_use]
    pub fn is_header(&self) -> bool {
        self.flag() == Some(FLAG_HEADER)
    }

    /// Whether this is a data block (flag $FF).
    #[must_use]
    pub fn is_data(&self) -> bool {
        self.flag() == Some(FLAG_DATA)
    }

    /// Verify the stored checksum against the XOR of flag and payload.
    ///
    /// Empty blocks carry no checksum and always pass.
    #[must_use]
    pub fn checksum_ok(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Standard {
                flag,
                data,
                checksum,
            } => xor_checksum(*flag, data) == *checksum,
        }
    }
}

/// Encode one block: length word, flag, payload, XOR checksum.
///
/// # Errors
///
/// Returns [`TapError::PayloadTooLarge`] if the payload cannot fit the
/// u16 length word.
pub fn encode_block(flag: u8, payload: &[u8]) -> Result<Vec<u8>, TapError> {
    if payload.len() > MAX_PAYLOAD {
        return Err(TapError::PayloadTooLarge(payload.len()));
    }

    let len = (payload.len() + 2) as u16;
    let mut out = Vec::with_capacity(payload.len() + 4);
    out.push(len as u8);
    out.push((len >> 8) as u8);
    out.push(flag);
    out.extend_from_slice(payload);
    out.push(xor_checksum(flag, payload));
    Ok(out)
}

/// XOR of the flag byte and every payload byte.
fn xor_checksum(flag: u8, payload: &[u8]) -> u8 {
    payload.iter().fold(flag, |acc, &b| acc ^ b)
}
