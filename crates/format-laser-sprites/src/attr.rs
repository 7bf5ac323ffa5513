//! Attribute byte helpers.
//!
//! One attribute byte per character cell, laid out FBPPPIII: flash,
//! bright, 3-bit paper colour, 3-bit ink colour — the display hardware's
//! convention.

/// FLASH bit: ink and paper swap every 16 frames.
pub const FLASH: u8 = 0x80;

/// BRIGHT bit: full-intensity colours.
pub const BRIGHT: u8 = 0x40;

/// Ink colour index (0–7).
#[must_use]
pub fn ink(attr: u8) -> u8 {
    attr & 0x07
}

/// Paper colour index (0–7).
#[must_use]
pub fn paper(attr: u8) -> u8 {
    (attr >> 3) & 0x07
}

/// Whether the BRIGHT bit is set.
#[must_use]
pub fn bright(attr: u8) -> bool {
    attr & BRIGHT != 0
}

/// Whether the FLASH bit is set.
#[must_use]
pub fn flash(attr: u8) -> bool {
    attr & FLASH != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_fields() {
        // White paper (7), black ink (0), no bright, no flash.
        assert_eq!(ink(56), 0);
        assert_eq!(paper(56), 7);
        assert!(!bright(56));
        assert!(!flash(56));

        // Flash + bright + cyan paper (5) + red ink (2).
        let a = FLASH | BRIGHT | (5 << 3) | 2;
        assert_eq!(ink(a), 2);
        assert_eq!(paper(a), 5);
        assert!(bright(a));
        assert!(flash(a));
    }
}
