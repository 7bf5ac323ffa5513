//! Memory layout: record sizes and the backward start-address derivation.

use std::fmt;

use crate::Sprite;

/// Fixed end-of-memory ceiling for sprite data on the target machine.
pub const END_ADDRESS: u16 = 56575;

/// Maximum number of records in a set (ids are 1-based u8).
pub const MAX_SPRITES: usize = 255;

/// Derived placement for a sprite set: computed fresh for every encode,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Total size of all records in bytes.
    pub total_bytes: usize,
    /// Absolute load address of the first record.
    pub start_address: u16,
}

/// The set does not fit below [`END_ADDRESS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    /// Total size the set would need.
    pub total_bytes: usize,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sprite data is too large ({} bytes) to fit into memory below {END_ADDRESS}",
            self.total_bytes
        )
    }
}

impl std::error::Error for CapacityError {}

/// On-tape size of one record: 5 header bytes, 8 bitmap bytes and 1
/// attribute byte per character cell.
#[must_use]
pub fn record_size(width: u8, height: u8) -> usize {
    5 + 9 * usize::from(width) * usize::from(height)
}

/// Compute the total size and start address for a sprite set.
///
/// The set loads flush against [`END_ADDRESS`], so the start address is
/// derived backward from the total size.
///
/// # Errors
///
/// Returns [`CapacityError`] if the set cannot fit below the ceiling.
pub fn compute_layout(sprites: &[Sprite]) -> Result<Layout, CapacityError> {
    let total_bytes: usize = sprites
        .iter()
        .map(|s| record_size(s.width(), s.height()))
        .sum();

    let Some(start) = usize::from(END_ADDRESS).checked_sub(total_bytes) else {
        return Err(CapacityError { total_bytes });
    };

    Ok(Layout {
        total_bytes,
        start_address: start as u16,
    })
}
