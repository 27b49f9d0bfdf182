use crate::Blob;
use anyhow::{Context, Result};
use flate2::bufread::GzDecoder;
use std::io::Read;

/// Decompresses data that was compressed using Gzip.
///
/// # Errors
///
/// * If the Gzip decompression process fails.
pub fn decompress_gzip(blob: &Blob) -> Result<Blob> {
	let mut decoder = GzDecoder::new(blob.as_slice());
	let mut decompressed_data = Vec::new();
	decoder
		.read_to_end(&mut decompressed_data)
		.context("Failed to decompress data using Gzip")?;
	Ok(Blob::from(decompressed_data))
}
