//! Laser Basic linked sprite-set format reader and writer.
//!
//! A sprite set is a flat run of records with no overall header. Each
//! record carries a 1-based id, the absolute memory address of the next
//! record (0 for the last), the dimensions in 8×8 character cells, then
//! the bitmap and attribute data:
//!
//! ```text
//! id:u8 | next:u16le | width:u8 | height:u8
//! height*8 rows of width pixel bytes (bit 7 = leftmost pixel)
//! height rows of width attribute bytes
//! ```
//!
//! Record size is therefore `5 + 9 * width * height` bytes. The set is
//! loaded immediately below a fixed memory ceiling, and the next-address
//! chain lets the interpreter walk the records in place without an index.

pub mod attr;
mod codec;
mod layout;
mod sprite;

pub use codec::{build_sprites, parse_sprites};
pub use layout::{CapacityError, END_ADDRESS, Layout, MAX_SPRITES, compute_layout, record_size};
pub use sprite::{CELL_SIZE, Sprite};
