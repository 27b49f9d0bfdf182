use super::{TileCompression, decompress_gzip, decompress_zlib};
use crate::Blob;
use anyhow::{Context, Result};
use log::debug;

/// Detects whether `blob` is raw, zlib framed or gzip framed.
#[must_use]
pub fn detect(blob: &Blob) -> TileCompression {
	TileCompression::from_magic_bytes(blob.as_slice())
}

/// Decompresses `blob` according to its detected framing.
///
/// Uncompressed input is returned unchanged.
///
/// # Errors
///
/// * If the input looks compressed but cannot be inflated.
pub fn decompress(blob: &Blob) -> Result<Blob> {
	let compression = detect(blob);
	debug!("detected compression '{compression}' for {} bytes", blob.len());
	decompress_as(blob, compression)
}

/// Decompresses `blob` assuming the given framing.
///
/// # Errors
///
/// * If decompression fails.
pub fn decompress_as(blob: &Blob, compression: TileCompression) -> Result<Blob> {
	match compression {
		TileCompression::Uncompressed => Ok(blob.clone()),
		TileCompression::Zlib => decompress_zlib(blob).context("Failed to inflate zlib compressed tile"),
		TileCompression::Gzip => decompress_gzip(blob).context("Failed to inflate gzip compressed tile"),
	}
}
