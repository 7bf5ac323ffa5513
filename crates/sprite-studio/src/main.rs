//! Sprite-studio command-line tool.
//!
//! Inspects sprite TAP files, exports PNG previews, and repacks sprite
//! sets against the Laser Basic memory ceiling.

use std::path::{Path, PathBuf};
use std::process;

use format_laser_sprites::{parse_sprites, record_size};
use format_spectrum_tap::{TapBlock, TapFile};
use sprite_studio::{SpriteSet, export_tap, save_preview};

struct CliArgs {
    tap_path: Option<PathBuf>,
    block_name: Option<String>,
    png_dir: Option<PathBuf>,
    scale: u32,
    repack_name: Option<String>,
    out_dir: PathBuf,
    new_count: usize,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        tap_path: None,
        block_name: None,
        png_dir: None,
        scale: 4,
        repack_name: None,
        out_dir: PathBuf::from("."),
        new_count: 0,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--tap" => {
                i += 1;
                cli.tap_path = args.get(i).map(PathBuf::from);
            }
            "--block" => {
                i += 1;
                cli.block_name = args.get(i).cloned();
            }
            "--png-dir" => {
                i += 1;
                cli.png_dir = args.get(i).map(PathBuf::from);
            }
            "--scale" => {
                i += 1;
                if let Some(s) = args.get(i) {
                    cli.scale = s.parse().unwrap_or(4);
                }
            }
            "--repack" => {
                i += 1;
                cli.repack_name = args.get(i).cloned();
            }
            "--out" => {
                i += 1;
                if let Some(s) = args.get(i) {
                    cli.out_dir = PathBuf::from(s);
                }
            }
            "--new" => {
                i += 1;
                if let Some(s) = args.get(i) {
                    cli.new_count = s.parse().unwrap_or(0);
                }
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn print_usage() {
    eprintln!("Usage: sprite-studio [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --tap FILE      TAP file to inspect");
    eprintln!("  --block NAME    Named code block to open (default: first)");
    eprintln!("  --png-dir DIR   Export one PNG preview per sprite into DIR");
    eprintln!("  --scale N       PNG scale factor (default 4)");
    eprintln!("  --repack NAME   Repack the sprite set as NAME_<start>.tap");
    eprintln!("  --out DIR       Output directory for repacked TAP (default .)");
    eprintln!("  --new N         Start from N blank 2x2 sprites instead of a TAP");
    eprintln!();
    eprintln!("With only --tap, lists the blocks found in the file.");
}

fn main() {
    let cli = parse_args();

    let sprites = match (&cli.tap_path, cli.new_count) {
        (Some(path), _) => match load_sprites(path, cli.block_name.as_deref()) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        (None, n) if n > 0 => {
            let mut set = SpriteSet::new();
            for _ in 0..n {
                if !set.add() {
                    eprintln!("Maximum sprites (255) reached; truncating to 255");
                    break;
                }
            }
            set.sprites().to_vec()
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    };

    if sprites.is_empty() {
        eprintln!("No sprites to work with");
        process::exit(1);
    }

    for (i, sprite) in sprites.iter().enumerate() {
        println!(
            "sprite {:3}: {}x{} cells ({}x{} px), {} bytes",
            i + 1,
            sprite.width(),
            sprite.height(),
            sprite.width_px(),
            sprite.height_px(),
            record_size(sprite.width(), sprite.height())
        );
    }

    if let Some(dir) = &cli.png_dir {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Error creating {}: {e}", dir.display());
            process::exit(1);
        }
        for (i, sprite) in sprites.iter().enumerate() {
            let path = dir.join(format!("sprite_{:03}.png", i + 1));
            if let Err(e) = save_preview(sprite, &path, cli.scale) {
                eprintln!("Error writing {}: {e}", path.display());
                process::exit(1);
            }
        }
        eprintln!("Wrote {} previews to {}", sprites.len(), dir.display());
    }

    if let Some(name) = &cli.repack_name {
        match export_tap(&sprites, name) {
            Ok(export) => {
                let path = cli.out_dir.join(&export.filename);
                if let Err(e) = std::fs::write(&path, &export.bytes) {
                    eprintln!("Error writing {}: {e}", path.display());
                    process::exit(1);
                }
                eprintln!(
                    "Wrote {} ({} bytes, loads at {})",
                    path.display(),
                    export.bytes.len(),
                    export.start_address
                );
                println!("{}", export.loader_command);
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }
}

/// Load sprites from a TAP file, picking a named code block.
fn load_sprites(
    path: &Path,
    block_name: Option<&str>,
) -> Result<Vec<format_laser_sprites::Sprite>, String> {
    let data = std::fs::read(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let tap = TapFile::parse(&data).map_err(|e| format!("{}: {e}", path.display()))?;

    let pairs = tap.named_code_blocks();
    if pairs.is_empty() {
        describe_blocks(&tap);
        return Err("no header/data block pairs found".to_string());
    }

    let pair = match block_name {
        Some(name) => pairs
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| format!("no block named '{name}' (available: {})", names(&pairs)))?,
        None => {
            eprintln!("Blocks: {}", names(&pairs));
            &pairs[0]
        }
    };

    eprintln!("Opening block '{}' ({} bytes)", pair.name, pair.data.len());
    let sprites = parse_sprites(&pair.data);
    if sprites.is_empty() {
        return Err(format!("block '{}' holds no sprite records", pair.name));
    }
    Ok(sprites)
}

fn names(pairs: &[format_spectrum_tap::NamedCodeBlock]) -> String {
    pairs
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print a block-by-block summary of a TAP file.
fn describe_blocks(tap: &TapFile) {
    for (i, block) in tap.blocks.iter().enumerate() {
        match block {
            TapBlock::Empty => eprintln!("block {i}: empty (zero length)"),
            TapBlock::Standard { flag, data, .. } => {
                let kind = match *flag {
                    0x00 => "header",
                    0xFF => "data",
                    _ => "other",
                };
                let check = if block.checksum_ok() { "ok" } else { "BAD" };
                eprintln!(
                    "block {i}: flag ${flag:02X} ({kind}), {} bytes, checksum {check}",
                    data.len()
                );
            }
        }
    }
}
