//! Packing and unpacking of sprite records.

use crate::layout::record_size;
use crate::sprite::{CELL_SIZE, Sprite};

/// Unpack a run of sprite records.
///
/// Scanning is lenient: it stops (without error) at the first sign the
/// data has run out — a zero id byte, fewer than 5 bytes left, a zero
/// width or height, or a record whose declared size overruns the buffer.
/// Complete records decoded before the stop are kept. Real sets are
/// often padded with zeros up to their load ceiling, so a clean stop is
/// the normal case, not a failure.
#[must_use]
pub fn parse_sprites(data: &[u8]) -> Vec<Sprite> {
    let mut sprites = Vec::new();
    let mut offset = 0;

    while offset < data.len() {
        if data[offset] == 0 || offset + 5 > data.len() {
            break;
        }
        let width = data[offset + 3];
        let height = data[offset + 4];
        if width == 0 || height == 0 {
            break;
        }
        let size = record_size(width, height);
        if offset + size > data.len() {
            break;
        }

        sprites.push(unpack_record(&data[offset..offset + size], width, height));
        offset += size;
    }

    sprites
}

/// Pack a sprite set into one contiguous buffer, chaining records by
/// absolute address.
///
/// Record `i` carries id `i + 1` and the address of record `i + 1`
/// (start address plus the sizes of records 0..=i); the last record's
/// next-address is 0. The caller validates capacity beforehand via
/// [`crate::compute_layout`] — with at most 255 records below the
/// memory ceiling, ids and addresses cannot overflow their fields.
#[must_use]
pub fn build_sprites(sprites: &[Sprite], start_address: u16) -> Vec<u8> {
    let total: usize = sprites
        .iter()
        .map(|s| record_size(s.width(), s.height()))
        .sum();
    let mut out = vec![0u8; total];

    let mut offset = 0;
    let mut address = usize::from(start_address);

    for (i, sprite) in sprites.iter().enumerate() {
        let size = record_size(sprite.width(), sprite.height());
        let next = if i == sprites.len() - 1 {
            0
        } else {
            address + size
        };

        out[offset] = (i + 1) as u8;
        out[offset + 1] = next as u8;
        out[offset + 2] = (next >> 8) as u8;
        out[offset + 3] = sprite.width();
        out[offset + 4] = sprite.height();
        pack_record(&mut out[offset + 5..offset + size], sprite);

        offset += size;
        address += size;
    }

    out
}

/// Unpack one record's bitmap and attribute bytes. `record` spans the
/// whole record including its 5-byte header.
fn unpack_record(record: &[u8], width: u8, height: u8) -> Sprite {
    let mut sprite = Sprite::new(width, height);
    let width = usize::from(width);
    let height = usize::from(height);

    // Bitmap: height*8 rows of width bytes, bit 7 = leftmost pixel.
    let pixel_base = 5;
    for y in 0..height * CELL_SIZE {
        for cx in 0..width {
            let byte = record[pixel_base + y * width + cx];
            for bit in 0..CELL_SIZE {
                let set = byte & (1 << (7 - bit)) != 0;
                sprite.set_pixel(cx * CELL_SIZE + bit, y, u8::from(set));
            }
        }
    }

    // Attributes: height rows of width bytes, verbatim.
    let attr_base = pixel_base + width * height * CELL_SIZE;
    for cy in 0..height {
        for cx in 0..width {
            sprite.set_attr(cx, cy, record[attr_base + cy * width + cx]);
        }
    }

    sprite
}

/// Pack one sprite's bitmap and attribute bytes into `body` (the record
/// minus its 5-byte header).
fn pack_record(body: &mut [u8], sprite: &Sprite) {
    let width = usize::from(sprite.width());
    let height = usize::from(sprite.height());

    for y in 0..height * CELL_SIZE {
        for cx in 0..width {
            let mut byte = 0u8;
            for bit in 0..CELL_SIZE {
                if sprite.pixel(cx * CELL_SIZE + bit, y) != 0 {
                    byte |= 1 << (7 - bit);
                }
            }
            body[y * width + cx] = byte;
        }
    }

    let attr_base = width * height * CELL_SIZE;
    for cy in 0..height {
        for cx in 0..width {
            body[attr_base + cy * width + cx] = sprite.attr(cx, cy);
        }
    }
}
