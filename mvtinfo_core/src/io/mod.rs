//! This module re-exports the value readers used to decode protobuf encoded tiles.
//!
//! # Overview
//!
//! [`ValueReader`] provides varint, zig-zag, fixed-width and length-delimited reads on top of any seekable
//! source. [`ValueReaderSlice`] implements it for in-memory byte slices, which is all a tile needs once it
//! has been decompressed.

mod value_reader;
mod value_reader_slice;

pub use value_reader::*;
pub use value_reader_slice::*;
