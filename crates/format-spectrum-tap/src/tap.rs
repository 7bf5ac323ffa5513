//! Whole-file TAP parsing and assembly.

use crate::{ByteCursor, FLAG_DATA, FLAG_HEADER, TapBlock, TapError, TapHeader, encode_block};

/// A parsed TAP file containing sequential blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapFile {
    /// The blocks in the TAP file, in order.
    pub blocks: Vec<TapBlock>,
}

/// A header/data block pair extracted from a TAP file: one loadable
/// named file as the Spectrum ROM sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedCodeBlock {
    /// Filename from the header block.
    pub name: String,
    /// Payload of the data block that follows the header.
    pub data: Vec<u8>,
}

impl TapFile {
    /// Parse a TAP file from raw bytes.
    ///
    /// Every iteration of the loop consumes at least the 2-byte length
    /// word, so parsing always terminates.
    ///
    /// # Errors
    ///
    /// Returns [`TapError::OutOfBounds`] if a length word or block body
    /// is truncated.
    pub fn parse(data: &[u8]) -> Result<Self, TapError> {
        let mut cursor = ByteCursor::new(data);
        let mut blocks = Vec::new();
        while !cursor.is_at_end() {
            blocks.push(TapBlock::decode(&mut cursor)?);
        }
        Ok(Self { blocks })
    }

    /// Assemble a TAP file holding a single named CODE file: one header
    /// block (flag $00) followed by one data block (flag $FF).
    ///
    /// # Errors
    ///
    /// Returns [`TapError::PayloadTooLarge`] if either payload exceeds
    /// the u16 length word.
    pub fn build(header: &TapHeader, data: &[u8]) -> Result<Vec<u8>, TapError> {
        let mut out = encode_block(FLAG_HEADER, &header.encode())?;
        out.extend(encode_block(FLAG_DATA, data)?);
        Ok(out)
    }

    /// Extract every header block immediately followed by a data block.
    ///
    /// This is the pairing convention for named files on tape. Blocks
    /// outside the pattern are skipped, as are flag-$00 blocks whose
    /// payload does not decode as a 17-byte header.
    #[must_use]
    pub fn named_code_blocks(&self) -> Vec<NamedCodeBlock> {
        let mut out = Vec::new();
        for pair in self.blocks.windows(2) {
            if !pair[0].is_header() || !pair[1].is_data() {
                continue;
            }
            let Some(header_payload) = pair[0].payload() else {
                continue;
            };
            let Ok(header) = TapHeader::decode(header_payload) else {
                continue;
            };
            let Some(data) = pair[1].payload() else {
                continue;
            };
            out.push(NamedCodeBlock {
                name: header.filename,
                data: data.to_vec(),
            });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: raw bytes for one block with a correct checksum.
    fn raw_block(flag: u8, data: &[u8]) -> Vec<u8> {
        encode_block(flag, data).expect("test payload fits")
    }

    /// Helper: a 17-byte CODE header payload.
    fn header_payload(name: &str, data_length: u16, load: u16) -> [u8; 17] {
        TapHeader::code(name, data_length, load).encode()
    }

    #[test]
    fn parse_empty_file() {
        let tap = TapFile::parse(&[]).expect("empty file is valid");
        assert!(tap.blocks.is_empty());
    }

    #[test]
    fn parse_two_blocks() {
        let mut data = raw_block(0x00, &[0x11, 0x22]);
        data.extend(raw_block(0xFF, &[0xAA, 0xBB, 0xCC]));

        let tap = TapFile::parse(&data).expect("two blocks should parse");
        assert_eq!(tap.blocks.len(), 2);
        assert_eq!(tap.blocks[0].flag(), Some(0x00));
        assert_eq!(tap.blocks[0].payload(), Some(&[0x11, 0x22][..]));
        assert_eq!(tap.blocks[1].flag(), Some(0xFF));
        assert_eq!(tap.blocks[1].payload(), Some(&[0xAA, 0xBB, 0xCC][..]));
    }

    #[test]
    fn parse_sole_empty_block() {
        let tap = TapFile::parse(&[0x00, 0x00]).expect("empty block tolerated");
        assert_eq!(tap.blocks, vec![TapBlock::Empty]);
    }

    #[test]
    fn parse_bad_checksum_is_not_an_error() {
        let mut data = raw_block(0xFF, &[1, 2, 3]);
        let last = data.len() - 1;
        data[last] ^= 0xFF;

        let tap = TapFile::parse(&data).expect("bad checksum still parses");
        assert!(!tap.blocks[0].checksum_ok());
    }

    #[test]
    fn parse_truncated_length_word() {
        assert!(TapFile::parse(&[0x05]).is_err());
    }

    #[test]
    fn parse_truncated_block_body() {
        assert!(TapFile::parse(&[0x05, 0x00, 0x00, 0x01, 0x02]).is_err());
    }

    #[test]
    fn build_emits_header_then_data() {
        let header = TapHeader::code("sprites", 3, 50000);
        let bytes = TapFile::build(&header, &[7, 8, 9]).expect("fits");

        let tap = TapFile::parse(&bytes).expect("own output parses");
        assert_eq!(tap.blocks.len(), 2);
        assert!(tap.blocks[0].is_header());
        assert!(tap.blocks[1].is_data());
        assert!(tap.blocks.iter().all(TapBlock::checksum_ok));

        let pairs = tap.named_code_blocks();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].name, "sprites");
        assert_eq!(pairs[0].data, &[7, 8, 9]);
    }

    #[test]
    fn named_code_blocks_skips_unpaired() {
        // data, header+data, lone header, empty
        let mut data = raw_block(0xFF, &[1]);
        data.extend(raw_block(0x00, &header_payload("good", 1, 30000)));
        data.extend(raw_block(0xFF, &[2]));
        data.extend(raw_block(0x00, &header_payload("lone", 1, 30000)));
        data.extend([0x00, 0x00]);

        let tap = TapFile::parse(&data).expect("parses");
        let pairs = tap.named_code_blocks();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].name, "good");
    }

    #[test]
    fn named_code_blocks_skips_malformed_header() {
        // Flag $00 block with a payload that is not 17 bytes.
        let mut data = raw_block(0x00, &[1, 2, 3]);
        data.extend(raw_block(0xFF, &[4, 5]));

        let tap = TapFile::parse(&data).expect("parses");
        assert!(tap.named_code_blocks().is_empty());
    }
}
