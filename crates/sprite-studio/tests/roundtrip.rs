//! Integration tests for the full pipeline: edit a sprite set, export it
//! as a TAP image, parse that image back, and verify nothing was lost.

use format_laser_sprites::{END_ADDRESS, attr, parse_sprites, record_size};
use format_spectrum_tap::{TapFile, TapHeader};
use sprite_studio::{SpriteSet, export_tap, render_sprite};

/// Build a small set the way an editing session would: add, draw, recolour.
fn edited_set() -> SpriteSet {
    let mut set = SpriteSet::new();

    set.add();
    {
        let sprite = set.selected_mut().expect("selected");
        // Diagonal stroke across the top-left cell.
        for i in 0..8 {
            sprite.set_pixel(i, i, 1);
        }
        sprite.set_attr(0, 0, attr::BRIGHT | (1 << 3) | 6); // yellow on blue
    }

    set.add();
    set.resize_selected(3, 1);
    {
        let sprite = set.selected_mut().expect("selected");
        for x in 0..sprite.width_px() {
            sprite.set_pixel(x, 3, 1);
        }
        sprite.set_attr(2, 0, attr::FLASH | 7);
    }

    set
}

#[test]
fn export_and_reload_preserves_the_set() {
    let set = edited_set();
    let export = export_tap(set.sprites(), "heroes").expect("fits");

    let tap = TapFile::parse(&export.bytes).expect("own output parses");
    let pairs = tap.named_code_blocks();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].name, "heroes");

    let reloaded = SpriteSet::from_sprites(parse_sprites(&pairs[0].data));
    assert_eq!(reloaded.sprites(), set.sprites());
    assert_eq!(reloaded.selected_index(), Some(0));
}

#[test]
fn export_layout_matches_header() {
    let set = edited_set();
    let total: usize = set
        .sprites()
        .iter()
        .map(|s| record_size(s.width(), s.height()))
        .sum();

    let export = export_tap(set.sprites(), "heroes").expect("fits");
    assert_eq!(export.start_address, END_ADDRESS - total as u16);

    let tap = TapFile::parse(&export.bytes).expect("parses");
    let header = TapHeader::decode(tap.blocks[0].payload().expect("header")).expect("17 bytes");
    assert_eq!(usize::from(header.data_length), total);
    assert_eq!(header.param1, export.start_address);
    assert_eq!(header.filename, "heroes");
}

#[test]
fn checksums_of_exported_blocks_are_valid() {
    let export = export_tap(edited_set().sprites(), "heroes").expect("fits");
    let tap = TapFile::parse(&export.bytes).expect("parses");
    assert!(tap.blocks.iter().all(format_spectrum_tap::TapBlock::checksum_ok));
}

#[test]
fn previews_render_after_reload() {
    let export = export_tap(edited_set().sprites(), "heroes").expect("fits");
    let tap = TapFile::parse(&export.bytes).expect("parses");
    let sprites = parse_sprites(&tap.named_code_blocks()[0].data);

    for sprite in &sprites {
        let fb = render_sprite(sprite, false);
        assert_eq!(fb.len(), sprite.width_px() * sprite.height_px());
        // Every pixel resolves to an opaque palette colour.
        assert!(fb.iter().all(|&p| p >> 24 == 0xFF));
    }
}
