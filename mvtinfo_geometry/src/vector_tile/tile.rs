use super::layer::VectorTileLayer;
use anyhow::{Context, Result, bail};
use log::{debug, trace};
use mvtinfo_core::{Blob, io::*};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorTile {
	pub layers: Vec<VectorTileLayer>,
}

impl VectorTile {
	pub fn new(layers: Vec<VectorTileLayer>) -> VectorTile {
		VectorTile { layers }
	}

	/// Parses an uncompressed protobuf tile.
	pub fn from_blob(blob: &Blob) -> Result<VectorTile> {
		let mut reader = ValueReaderSlice::new_le(blob.as_slice());

		let mut tile = VectorTile::default();
		while reader.has_remaining() {
			match reader.read_pbf_key().context("Failed to read PBF key")? {
				(3, 2) => {
					let index = tile.layers.len();
					tile.layers.push(
						VectorTileLayer::read(
							reader
								.get_pbf_sub_reader()
								.context("Failed to get PBF sub-reader")?
								.as_mut(),
						)
						.with_context(|| format!("Failed to read layer {index}"))?,
					);
				}
				(3, w) => bail!("Unexpected wire type ({w}) for a layer"),
				(f, w) => {
					trace!("skipping unknown tile field {f} (wire type {w})");
					reader.skip_pbf_field(w).context("Failed to skip unknown tile field")?;
				}
			}
		}

		debug!("parsed tile with {} layers", tile.layers.len());
		Ok(tile)
	}

	pub fn find_layer(&self, name: &str) -> Option<&VectorTileLayer> {
		self.layers.iter().find(|layer| layer.name == name)
	}
}
