//! Laser Basic sprite-set workbench.
//!
//! Ties the TAP container codec and the sprite record codec together
//! into the operations a sprite artist needs: manage an ordered set of
//! sprites, render previews, and export the set as a loadable TAP file
//! placed flush against the Laser Basic memory ceiling.

mod export;
mod palette;
mod render;
mod sprite_set;

pub use export::{ExportError, TapExport, export_tap};
pub use palette::PALETTE;
pub use render::{render_sprite, save_preview};
pub use sprite_set::SpriteSet;
