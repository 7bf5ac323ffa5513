//! Sprite preview rendering: attribute-aware ARGB32 output and PNG export.

use std::error::Error;
use std::fs;
use std::path::Path;

use format_laser_sprites::{CELL_SIZE, Sprite, attr};

use crate::palette::PALETTE;

/// Render a sprite to an ARGB32 buffer, `width_px() * height_px()`
/// pixels, row-major.
///
/// Each character cell draws set pixels in its ink colour on its paper
/// colour, with BRIGHT selecting the high-intensity palette half. When
/// `flash_inverted` is true, cells with the FLASH bit swap ink and
/// paper — the state the display alternates into every 16 frames.
#[must_use]
pub fn render_sprite(sprite: &Sprite, flash_inverted: bool) -> Vec<u32> {
    let width_px = sprite.width_px();
    let height_px = sprite.height_px();
    let mut fb = vec![0u32; width_px * height_px];

    for cy in 0..usize::from(sprite.height()) {
        for cx in 0..usize::from(sprite.width()) {
            let a = sprite.attr(cx, cy);
            let bright_offset = if attr::bright(a) { 8 } else { 0 };
            let mut ink = PALETTE[usize::from(attr::ink(a)) + bright_offset];
            let mut paper = PALETTE[usize::from(attr::paper(a)) + bright_offset];
            if attr::flash(a) && flash_inverted {
                std::mem::swap(&mut ink, &mut paper);
            }

            for y in 0..CELL_SIZE {
                for x in 0..CELL_SIZE {
                    let px = cx * CELL_SIZE + x;
                    let py = cy * CELL_SIZE + y;
                    let set = sprite.pixel(px, py) != 0;
                    fb[py * width_px + px] = if set { ink } else { paper };
                }
            }
        }
    }

    fb
}

/// Save a sprite preview as a PNG at an integer scale factor.
///
/// The framebuffer is ARGB32; this converts to RGBA bytes for the PNG
/// encoder.
pub fn save_preview(sprite: &Sprite, path: &Path, scale: u32) -> Result<(), Box<dyn Error>> {
    let scale = scale.max(1) as usize;
    let fb = render_sprite(sprite, false);
    let src_w = sprite.width_px();
    let src_h = sprite.height_px();
    let out_w = src_w * scale;
    let out_h = src_h * scale;

    let file = fs::File::create(path)?;
    let w = std::io::BufWriter::new(file);
    let mut encoder = png::Encoder::new(w, out_w as u32, out_h as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;

    // Convert ARGB32 → RGBA bytes, replicating each source pixel
    // scale×scale times.
    let mut rgba = Vec::with_capacity(out_w * out_h * 4);
    for y in 0..out_h {
        for x in 0..out_w {
            let pixel = fb[(y / scale) * src_w + x / scale];
            rgba.push(((pixel >> 16) & 0xFF) as u8);
            rgba.push(((pixel >> 8) & 0xFF) as u8);
            rgba.push((pixel & 0xFF) as u8);
            rgba.push(0xFF); // Alpha
        }
    }

    writer.write_image_data(&rgba)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_sprite_renders_paper() {
        // Default attribute 56: white paper, black ink, not bright.
        let sprite = Sprite::new(1, 1);
        let fb = render_sprite(&sprite, false);
        assert_eq!(fb.len(), 64);
        assert!(fb.iter().all(|&p| p == PALETTE[7]));
    }

    #[test]
    fn set_pixel_renders_ink() {
        let mut sprite = Sprite::new(1, 1);
        sprite.set_pixel(2, 3, 1);
        let fb = render_sprite(&sprite, false);
        assert_eq!(fb[3 * 8 + 2], PALETTE[0]); // black ink
        assert_eq!(fb[0], PALETTE[7]); // white paper elsewhere
    }

    #[test]
    fn bright_selects_high_palette() {
        let mut sprite = Sprite::new(1, 1);
        sprite.set_attr(0, 0, attr::BRIGHT | (2 << 3) | 1); // bright, red paper, blue ink
        let fb = render_sprite(&sprite, false);
        assert_eq!(fb[0], PALETTE[8 + 2]);
    }

    #[test]
    fn flash_swaps_ink_and_paper() {
        let mut sprite = Sprite::new(1, 1);
        sprite.set_attr(0, 0, attr::FLASH | (6 << 3) | 1); // flash, yellow paper, blue ink
        sprite.set_pixel(0, 0, 1);

        let normal = render_sprite(&sprite, false);
        assert_eq!(normal[0], PALETTE[1]);

        let inverted = render_sprite(&sprite, true);
        assert_eq!(inverted[0], PALETTE[6]);
    }

    #[test]
    fn non_flash_cells_ignore_inversion() {
        let sprite = Sprite::new(1, 1);
        assert_eq!(render_sprite(&sprite, false), render_sprite(&sprite, true));
    }
}
