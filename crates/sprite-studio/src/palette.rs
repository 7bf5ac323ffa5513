//! ZX Spectrum 16-colour palette.
//!
//! 3-bit RGB with a BRIGHT modifier: non-bright colours use a lower
//! intensity (0xD7) while bright colours use full intensity (0xFF).
//! Black appears twice.

/// ARGB32 palette: 16 entries (8 normal + 8 bright).
///
/// Index layout: `bright_bit << 3 | colour_3bit`
///
/// Colours: black, blue, red, magenta, green, cyan, yellow, white.
pub const PALETTE: [u32; 16] = [
    // Normal (bright = 0)
    0xFF00_0000, // 0: Black
    0xFF00_00D7, // 1: Blue
    0xFFD7_0000, // 2: Red
    0xFFD7_00D7, // 3: Magenta
    0xFF00_D700, // 4: Green
    0xFF00_D7D7, // 5: Cyan
    0xFFD7_D700, // 6: Yellow
    0xFFD7_D7D7, // 7: White
    // Bright (bright = 1)
    0xFF00_0000, // 8: Black (same as normal)
    0xFF00_00FF, // 9: Bright Blue
    0xFFFF_0000, // 10: Bright Red
    0xFFFF_00FF, // 11: Bright Magenta
    0xFF00_FF00, // 12: Bright Green
    0xFF00_FFFF, // 13: Bright Cyan
    0xFFFF_FF00, // 14: Bright Yellow
    0xFFFF_FFFF, // 15: Bright White
];
