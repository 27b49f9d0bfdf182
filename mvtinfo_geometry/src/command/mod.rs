//! Geometry command stream decoding.
//!
//! A feature's geometry is a flat list of `u32`s. A *command integer* carries the command id in its low
//! three bits and a repeat count in the remaining bits; MoveTo and LineTo repetitions are each followed by
//! one zig-zag encoded coordinate pair, ClosePath takes no parameters.
//!
//! See <https://github.com/mapbox/vector-tile-spec/blob/master/2.1/README.md#43-geometry-encoding>.

mod command_integer;
mod decoded_geometry;
mod decoder;
mod error;

pub use command_integer::*;
pub use decoded_geometry::*;
pub use decoder::*;
pub use error::*;
