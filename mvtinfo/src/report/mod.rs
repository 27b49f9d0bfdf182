//! Text reports about a parsed tile.
//!
//! Both reports start with the compression line and write to any [`std::io::Write`], so the binary
//! passes a locked stdout and the tests a `Vec<u8>`.

mod dump;
mod summary;

pub use dump::write_dump;
pub use summary::write_summary;

use mvtinfo_core::compression::TileCompression;
use std::io::{Result, Write};

pub fn compression_message(compression: TileCompression) -> &'static str {
	match compression {
		TileCompression::Uncompressed => "appears not to be compressed",
		TileCompression::Zlib => "zlib compressed",
		TileCompression::Gzip => "gzip compressed",
	}
}

fn write_compression(out: &mut impl Write, compression: TileCompression) -> Result<()> {
	writeln!(out, "message: {}", compression_message(compression))
}
