//! This module defines the `TileCompression` enum describing how the bytes of a tile are framed.

use std::fmt::Display;

/// Enum representing the compression framings a tile can arrive in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TileCompression {
	Uncompressed,
	Zlib,
	Gzip,
}

impl TileCompression {
	pub fn as_str(&self) -> &str {
		match self {
			TileCompression::Uncompressed => "none",
			TileCompression::Zlib => "zlib",
			TileCompression::Gzip => "gzip",
		}
	}

	/// Detects the framing of `data` from its leading magic bytes.
	///
	/// A zlib stream starts with `0x78` followed by one of the four standard FLG bytes, a gzip stream starts
	/// with `0x1f 0x8b`. Everything else is treated as uncompressed.
	#[must_use]
	pub fn from_magic_bytes(data: &[u8]) -> TileCompression {
		match data {
			[0x78, 0x01 | 0x5E | 0x9C | 0xDA, ..] => TileCompression::Zlib,
			[0x1F, 0x8B, ..] => TileCompression::Gzip,
			_ => TileCompression::Uncompressed,
		}
	}
}

impl Display for TileCompression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
