//! Sequential byte reader over a borrowed buffer.

use crate::TapError;

/// Forward-only cursor over a byte slice.
///
/// All reads advance the position; there is no seeking. Reads that would
/// run past the end of the buffer fail with [`TapError::OutOfBounds`] and
/// leave the position unchanged.
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of `data`.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current position, in bytes from the start of the buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether the cursor has consumed the whole buffer.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Number of bytes left to read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Read one byte.
    pub fn read_u8(&mut self) -> Result<u8, TapError> {
        self.check(1)?;
        let v = self.data[self.pos];
        self.pos += 1;
        Ok(v)
    }

    /// Read a little-endian 16-bit word.
    pub fn read_u16_le(&mut self) -> Result<u16, TapError> {
        self.check(2)?;
        let v = u16::from(self.data[self.pos]) | (u16::from(self.data[self.pos + 1]) << 8);
        self.pos += 2;
        Ok(v)
    }

    /// Read `n` bytes into a fresh vector.
    ///
    /// The bytes are copied rather than borrowed so the result stays valid
    /// independently of the source buffer.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, TapError> {
        self.check(n)?;
        let v = self.data[self.pos..self.pos + n].to_vec();
        self.pos += n;
        Ok(v)
    }

    fn check(&self, wanted: usize) -> Result<(), TapError> {
        let available = self.remaining();
        if wanted > available {
            return Err(TapError::OutOfBounds {
                offset: self.pos,
                wanted,
                available,
            });
        }
        Ok(())
    }
}
