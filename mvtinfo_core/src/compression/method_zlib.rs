use crate::Blob;
use anyhow::{Context, Result};
use flate2::bufread::ZlibDecoder;
use std::io::Read;

/// Decompresses data that was compressed using zlib (deflate with a zlib header and adler32 trailer).
///
/// # Errors
///
/// * If the zlib decompression process fails.
pub fn decompress_zlib(blob: &Blob) -> Result<Blob> {
	let mut decoder = ZlibDecoder::new(blob.as_slice());
	let mut decompressed_data = Vec::new();
	decoder
		.read_to_end(&mut decompressed_data)
		.context("Failed to decompress data using zlib")?;
	Ok(Blob::from(decompressed_data))
}
