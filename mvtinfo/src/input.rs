use anyhow::{Context, Result, bail};
use log::debug;
use mvtinfo_core::{
	Blob,
	compression::{TileCompression, decompress_as, detect},
};
use mvtinfo_geometry::{VectorTile, VectorTileLayer};
use std::path::Path;

/// A parsed tile together with the compression its bytes were stored with.
#[derive(Clone, Debug, PartialEq)]
pub struct TileInput {
	pub compression: TileCompression,
	pub tile: VectorTile,
}

impl TileInput {
	/// Reads, decompresses and parses the tile at `path`.
	pub fn load(path: &Path) -> Result<TileInput> {
		let blob = Blob::load_from_file(path)?;
		debug!("read {} bytes from {path:?}", blob.len());
		TileInput::from_blob(&blob)
	}

	pub fn from_blob(blob: &Blob) -> Result<TileInput> {
		let compression = detect(blob);
		let data = decompress_as(blob, compression)?;
		let tile = VectorTile::from_blob(&data).with_context(|| match compression {
			TileCompression::Uncompressed => "failed to parse protobuf".to_string(),
			_ => format!("failed to parse {compression} compressed protobuf"),
		})?;
		Ok(TileInput { compression, tile })
	}

	/// All layers, or only the layer called `name`.
	pub fn select_layers(&self, name: Option<&str>) -> Result<Vec<&VectorTileLayer>> {
		let Some(name) = name else {
			return Ok(self.tile.layers.iter().collect());
		};
		match self.tile.find_layer(name) {
			Some(layer) => Ok(vec![layer]),
			None => bail!("layer '{name}' not found"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const TILE: &[u8] = &[
		0x1A, 0x07, 0x0A, 0x05, b'w', b'a', b't', b'e', b'r', // layer "water"
		0x1A, 0x07, 0x0A, 0x05, b'r', b'o', b'a', b'd', b's', // layer "roads"
	];

	#[test]
	fn from_raw_blob() -> Result<()> {
		let input = TileInput::from_blob(&Blob::from(TILE))?;
		assert_eq!(input.compression, TileCompression::Uncompressed);
		assert_eq!(input.tile.layers.len(), 2);
		Ok(())
	}

	#[test]
	fn select_layers() -> Result<()> {
		let input = TileInput::from_blob(&Blob::from(TILE))?;
		assert_eq!(input.select_layers(None)?.len(), 2);
		assert_eq!(input.select_layers(Some("roads"))?[0].name, "roads");
		assert_eq!(
			input.select_layers(Some("buildings")).unwrap_err().to_string(),
			"layer 'buildings' not found"
		);
		Ok(())
	}

	#[test]
	fn broken_protobuf() {
		let error = TileInput::from_blob(&Blob::from(&[0x1A, 0x07, 0x0A])).unwrap_err();
		assert_eq!(error.to_string(), "failed to parse protobuf");
	}

	#[test]
	fn broken_zlib() {
		let error = TileInput::from_blob(&Blob::from(&[0x78, 0x9C, 0xFF, 0xFF])).unwrap_err();
		assert_eq!(error.to_string(), "Failed to inflate zlib compressed tile");
	}

	#[test]
	fn missing_file() {
		let error = TileInput::load(Path::new("does/not/exist.mvt")).unwrap_err();
		assert!(error.to_string().starts_with("could not open: "));
	}
}
