//! TAP export pipeline: layout, pack, wrap, name.

use std::fmt;

use format_laser_sprites::{CapacityError, Sprite, build_sprites, compute_layout};
use format_spectrum_tap::{TapError, TapFile, TapHeader};

/// A fully assembled TAP export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapExport {
    /// Suggested output filename, `<name>_<startAddress>.tap`.
    pub filename: String,
    /// Absolute load address of the first sprite record.
    pub start_address: u16,
    /// The complete TAP image (header block + data block).
    pub bytes: Vec<u8>,
    /// Laser Basic command that loads and registers the set.
    pub loader_command: String,
}

/// Errors from the export pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// There are no sprites to export.
    EmptySet,
    /// The set does not fit below the memory ceiling.
    Capacity(CapacityError),
    /// The packed payload could not be wrapped in a TAP block.
    Tap(TapError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySet => write!(f, "nothing to export: the sprite set is empty"),
            Self::Capacity(e) => write!(f, "{e}"),
            Self::Tap(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<CapacityError> for ExportError {
    fn from(e: CapacityError) -> Self {
        Self::Capacity(e)
    }
}

impl From<TapError> for ExportError {
    fn from(e: TapError) -> Self {
        Self::Tap(e)
    }
}

/// Pack a sprite set into a loadable TAP image.
///
/// Computes the memory layout (validating capacity), packs the records
/// with their next-address chain, and wraps the payload in a CODE
/// header/data block pair. The header filename is `name` (padded or
/// truncated to 10 bytes on tape); the suggested output filename embeds
/// the start address so the artist knows where the set will land.
pub fn export_tap(sprites: &[Sprite], name: &str) -> Result<TapExport, ExportError> {
    if sprites.is_empty() {
        return Err(ExportError::EmptySet);
    }

    let layout = compute_layout(sprites)?;
    let payload = build_sprites(sprites, layout.start_address);

    let header = TapHeader::code(name, payload.len() as u16, layout.start_address);
    let bytes = TapFile::build(&header, &payload)?;

    let start = layout.start_address;
    let base = name.trim().split(' ').next().unwrap_or(name);
    Ok(TapExport {
        filename: format!("{base}_{start}.tap"),
        start_address: start,
        bytes,
        loader_command: format!(
            "CLEAR {}: LOAD \"{name}\" CODE {start}: .POKE 62464, {start}",
            start.saturating_sub(1)
        ),
    })
}
