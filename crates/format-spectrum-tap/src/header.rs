//! The 17-byte header record carried by flag-$00 blocks.
//!
//! Layout: type byte, 10-byte space-padded filename, then three
//! little-endian words whose meaning depends on the type. For CODE
//! headers (type 3) the first word is the data length, the second the
//! load address, and the third is conventionally 32768.

use crate::{ByteCursor, TapError};

/// Header payload length on tape.
pub const HEADER_LEN: usize = 17;

/// Header type for machine-code (CODE) blocks.
pub const HEADER_TYPE_CODE: u8 = 3;

/// Secondary parameter emitted for CODE headers.
const CODE_PARAM2: u16 = 32768;

/// Decoded header record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapHeader {
    /// Type byte: 0 = Program, 1/2 = arrays, 3 = CODE.
    pub header_type: u8,
    /// Filename with trailing padding removed.
    pub filename: String,
    /// Length of the data block this header announces.
    pub data_length: u16,
    /// First parameter (load address for CODE headers).
    pub param1: u16,
    /// Second parameter (32768 for CODE headers written by this tool).
    pub param2: u16,
}

impl TapHeader {
    /// Build a CODE header for a block of `data_length` bytes loading at
    /// `load_address`.
    #[must_use]
    pub fn code(filename: &str, data_length: u16, load_address: u16) -> Self {
        Self {
            header_type: HEADER_TYPE_CODE,
            filename: filename.to_string(),
            data_length,
            param1: load_address,
            param2: CODE_PARAM2,
        }
    }

    /// Decode a header from a block payload.
    ///
    /// # Errors
    ///
    /// Returns [`TapError::MalformedHeader`] if the payload is not exactly
    /// [`HEADER_LEN`] bytes.
    pub fn decode(payload: &[u8]) -> Result<Self, TapError> {
        if payload.len() != HEADER_LEN {
            return Err(TapError::MalformedHeader(payload.len()));
        }

        let mut cursor = ByteCursor::new(payload);
        let header_type = cursor.read_u8()?;
        let name_bytes = cursor.read_bytes(10)?;
        let data_length = cursor.read_u16_le()?;
        let param1 = cursor.read_u16_le()?;
        let param2 = cursor.read_u16_le()?;

        Ok(Self {
            header_type,
            filename: decode_filename(&name_bytes),
            data_length,
            param1,
            param2,
        })
    }

    /// Encode this header as a 17-byte block payload.
    ///
    /// The filename is right-padded with spaces to 10 bytes, or truncated
    /// if longer.
    #[must_use]
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0] = self.header_type;

        let name = self.filename.as_bytes();
        for (i, slot) in out[1..11].iter_mut().enumerate() {
            *slot = *name.get(i).unwrap_or(&b' ');
        }

        out[11] = self.data_length as u8;
        out[12] = (self.data_length >> 8) as u8;
        out[13] = self.param1 as u8;
        out[14] = (self.param1 >> 8) as u8;
        out[15] = self.param2 as u8;
        out[16] = (self.param2 >> 8) as u8;
        out
    }
}

/// ASCII-decode the 10-byte filename field, dropping trailing spaces and
/// control bytes.
fn decode_filename(bytes: &[u8]) -> String {
    let end = bytes
        .iter()
        .rposition(|&b| b > 0x20 && b < 0x7F)
        .map_or(0, |i| i + 1);
    bytes[..end].iter().map(|&b| char::from(b)).collect()
}
