//! The in-memory sprite: a 1-bit bitmap plus per-cell attributes.

/// Pixels per character cell side.
pub const CELL_SIZE: usize = 8;

/// Attribute for a fresh cell: white paper, black ink.
const DEFAULT_ATTR: u8 = 56;

/// One sprite: `width`×`height` character cells of bitmap and attribute
/// data.
///
/// The bitmap is stored row-major as one byte per pixel (0 or 1),
/// `height * 8` rows of `width * 8` columns, with (0, 0) the top-left
/// pixel. Attributes are row-major, one byte per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u8,
    height: u8,
    pixels: Vec<u8>,
    attrs: Vec<u8>,
}

impl Sprite {
    /// Create a blank sprite: all pixels clear, all cells [`DEFAULT_ATTR`].
    ///
    /// Zero dimensions are clamped to 1; a zero-sized sprite cannot be
    /// represented on tape.
    #[must_use]
    pub fn new(width: u8, height: u8) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let cells = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            pixels: vec![0; cells * CELL_SIZE * CELL_SIZE],
            attrs: vec![DEFAULT_ATTR; cells],
        }
    }

    /// Width in character cells.
    #[must_use]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height in character cells.
    #[must_use]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Width in pixels.
    #[must_use]
    pub fn width_px(&self) -> usize {
        usize::from(self.width) * CELL_SIZE
    }

    /// Height in pixels.
    #[must_use]
    pub fn height_px(&self) -> usize {
        usize::from(self.height) * CELL_SIZE
    }

    /// Pixel value at (x, y): 0 or 1. Out-of-range coordinates read 0.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        if x >= self.width_px() || y >= self.height_px() {
            return 0;
        }
        self.pixels[y * self.width_px() + x]
    }

    /// Set the pixel at (x, y). Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, value: u8) {
        if x >= self.width_px() || y >= self.height_px() {
            return;
        }
        let idx = y * self.width_px() + x;
        self.pixels[idx] = u8::from(value != 0);
    }

    /// Attribute byte for the cell at (cx, cy). Out-of-range reads
    /// [`DEFAULT_ATTR`].
    #[must_use]
    pub fn attr(&self, cx: usize, cy: usize) -> u8 {
        if cx >= usize::from(self.width) || cy >= usize::from(self.height) {
            return DEFAULT_ATTR;
        }
        self.attrs[cy * usize::from(self.width) + cx]
    }

    /// Set the attribute byte for the cell at (cx, cy). Out-of-range
    /// coordinates are ignored.
    pub fn set_attr(&mut self, cx: usize, cy: usize, attr: u8) {
        if cx >= usize::from(self.width) || cy >= usize::from(self.height) {
            return;
        }
        let idx = cy * usize::from(self.width) + cx;
        self.attrs[idx] = attr;
    }
}
