//! Compression adapter for tiles.
//!
//! Tiles are usually stored either raw, zlib framed or gzip framed. [`detect`] sniffs the framing from the
//! leading magic bytes and [`decompress`] returns the inflated bytes, or the input unchanged when it is not
//! compressed.
//!
//! ```rust
//! use mvtinfo_core::{Blob, compression::{TileCompression, decompress, detect}};
//!
//! let raw = Blob::from(&[0x1a, 0x00]);
//! assert_eq!(detect(&raw), TileCompression::Uncompressed);
//! assert_eq!(decompress(&raw)?, raw);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod functions;
mod method_gzip;
mod method_zlib;
mod tile_compression;

pub use functions::*;
pub use method_gzip::*;
pub use method_zlib::*;
pub use tile_compression::*;
