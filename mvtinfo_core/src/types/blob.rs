//! The raw bytes of a tile, as read from disk or after decompression.
//!
//! ```rust
//! use mvtinfo_core::Blob;
//!
//! let blob = Blob::from(&[0x1f, 0x8b, 0x08]);
//! assert_eq!(blob.len(), 3);
//! assert_eq!(format!("{blob:?}"), "Blob(3): 1f 8b 08");
//! ```

use anyhow::{Context, Result};
use std::fmt::Debug;
use std::path::Path;

/// Owned tile bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_ref()
	}

	/// Bytes as lowercase hex pairs separated by spaces.
	#[must_use]
	pub fn as_hex(&self) -> String {
		self
			.0
			.iter()
			.map(|byte| format!("{byte:02x}"))
			.collect::<Vec<_>>()
			.join(" ")
	}

	#[must_use]
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Reads the whole file at `path`.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be opened or read.
	pub fn load_from_file(path: &Path) -> Result<Self> {
		let bytes = std::fs::read(path).with_context(|| format!("could not open: {path:?}"))?;
		Ok(Blob::from(bytes))
	}
}

impl From<Vec<u8>> for Blob {
	fn from(item: Vec<u8>) -> Self {
		Blob(item)
	}
}

impl From<&[u8]> for Blob {
	fn from(item: &[u8]) -> Self {
		Blob(item.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Blob {
	fn from(item: &[u8; N]) -> Self {
		Blob(item.to_vec())
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Blob({}): {}", self.0.len(), self.as_hex())
	}
}

impl Default for Blob {
	fn default() -> Self {
		Self::new_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_bytes() {
		let bytes: &[u8] = &[0x1a, 0x00, 0x0a];
		let blob = Blob::from(bytes);
		assert_eq!(blob.len(), 3);
		assert!(!blob.is_empty());
		assert_eq!(blob.as_slice(), bytes);
		assert_eq!(Blob::from(bytes.to_vec()), blob);
	}

	#[test]
	fn empty() {
		assert!(Blob::new_empty().is_empty());
		assert!(Blob::default().is_empty());
		assert_eq!(Blob::default().as_hex(), "");
	}

	#[test]
	fn load_from_file() -> Result<()> {
		let path = std::env::temp_dir().join(format!("mvtinfo-blob-{}.bin", std::process::id()));
		std::fs::write(&path, [0x78, 0x9c])?;
		let blob = Blob::load_from_file(&path);
		std::fs::remove_file(&path)?;
		assert_eq!(blob?.as_hex(), "78 9c");
		Ok(())
	}

	#[test]
	fn load_from_missing_file_fails() {
		let error = Blob::load_from_file(Path::new("/this/path/does/not/exist.pbf")).unwrap_err();
		assert!(error.to_string().starts_with("could not open"));
	}
}
