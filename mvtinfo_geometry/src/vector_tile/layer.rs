//! Vector Tile **Layer** reading.
//!
//! The encoding follows the MVT schema:
//!  * field 1: `name` (string)
//!  * field 2: repeated `feature` (embedded message)
//!  * field 3: repeated `keys` (string)
//!  * field 4: repeated `values` (embedded message)
//!  * field 5: `extent` (varint, default 4096)
//!  * field 15: `version` (varint, default 1)

use super::{
	feature::VectorTileFeature,
	property_manager::{PropertyManager, TagError},
	value::TileValue,
};
use anyhow::{Context, Result, anyhow, bail};
use byteorder::LE;
use log::trace;
use mvtinfo_core::io::ValueReader;

/// A single vector-tile layer with features, key/value dictionaries, extent, and version.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorTileLayer {
	/// Tile coordinate extent the geometry is quantized to (default 4096).
	pub extent: u32,
	/// The layer's features in wire order.
	pub features: Vec<VectorTileFeature>,
	/// Layer name (MVT field 1).
	pub name: String,
	/// Key and value dictionaries referenced by the features' tag ids.
	pub property_manager: PropertyManager,
	/// MVT layer version (default 1).
	pub version: u32,
}

impl VectorTileLayer {
	#[must_use]
	pub fn new(name: String, extent: u32, version: u32) -> VectorTileLayer {
		VectorTileLayer {
			extent,
			features: vec![],
			name,
			property_manager: PropertyManager::default(),
			version,
		}
	}

	/// Reads a `VectorTileLayer` from a protobuf stream using the MVT wire format.
	///
	/// Unknown fields are skipped. Returns an error on malformed input or a missing name.
	pub fn read(reader: &mut dyn ValueReader<'_, LE>) -> Result<VectorTileLayer> {
		let mut extent = 4096;
		let mut features: Vec<VectorTileFeature> = Vec::new();
		let mut name = None;
		let mut property_manager = PropertyManager::new();
		let mut version = 1;

		while reader.has_remaining() {
			match reader.read_pbf_key().context("Failed to read PBF key")? {
				(1, 2) => name = Some(reader.read_pbf_string().context("Failed to read layer name")?),
				(2, 2) => {
					let index = features.len();
					features.push(
						VectorTileFeature::read(
							reader
								.get_pbf_sub_reader()
								.context("Failed to get PBF sub-reader for feature")?
								.as_mut(),
						)
						.with_context(|| format!("Failed to read feature {index}"))?,
					);
				}
				(3, 2) => {
					property_manager.add_key(reader.read_pbf_string().context("Failed to read property key")?);
				}
				(4, 2) => {
					property_manager.add_val(
						TileValue::read(
							reader
								.get_pbf_sub_reader()
								.context("Failed to get PBF sub-reader for property value")?
								.as_mut(),
						)
						.context("Failed to read property value")?,
					);
				}
				(5, 0) => extent = u32::try_from(reader.read_varint().context("Failed to read extent")?)?,
				(15, 0) => version = u32::try_from(reader.read_varint().context("Failed to read version")?)?,
				(1..=5 | 15, w) => bail!("Unexpected wire type ({w}) for a layer field"),
				(f, w) => {
					trace!("skipping unknown layer field {f} (wire type {w})");
					reader.skip_pbf_field(w).context("Failed to skip unknown layer field")?;
				}
			}
		}

		Ok(VectorTileLayer {
			extent,
			features,
			name: name
				.ok_or(anyhow!("Layer name is required"))
				.context("Failed to get layer name")?,
			property_manager,
			version,
		})
	}

	pub fn keys(&self) -> &[String] {
		&self.property_manager.key
	}

	pub fn values(&self) -> &[Option<TileValue>] {
		&self.property_manager.val
	}

	/// Decodes vector-tile `tag_ids` into `(key, value)` pairs using this layer's dictionaries.
	pub fn decode_tag_ids(&self, tag_ids: &[u32]) -> Result<Vec<(&str, Option<&TileValue>)>, TagError> {
		self.property_manager.decode_tag_ids(tag_ids)
	}
}

#[cfg(test)]
mod tests {
	use super::super::geometry_type::GeomType;
	use super::*;
	use mvtinfo_core::io::ValueReaderSlice;
	use pretty_assertions::assert_eq;

	#[test]
	fn test_read_vector_tile_layer() -> Result<()> {
		let data = vec![
			0x0A, 0x05, b'h', b'e', b'l', b'l', b'o', // name: "hello"
			0x12, 0x0A, 0x08, 0x01, 0x12, 0x02, 0x00, 0x00, 0x18, 0x01, 0x22, 0x00, // feature
			0x1A, 0x03, b'k', b'e', b'y', // property key: "key"
			0x22, 0x04, 0x0A, 0x02, b'v', b'l', // property value: "vl"
			0x22, 0x00, // property value: null
			0x28, 0x80, 0x20, // extent: 4096
			0x78, 0x02, // version: 2
		];
		let mut reader = ValueReaderSlice::new_le(&data);
		let layer = VectorTileLayer::read(&mut reader)?;

		assert_eq!(layer.name, "hello");
		assert_eq!(layer.features.len(), 1);
		assert_eq!(layer.features[0].id, Some(1));
		assert_eq!(layer.features[0].tag_ids, vec![0, 0]);
		assert_eq!(layer.features[0].geom_type, GeomType::Point);
		assert!(layer.features[0].geometry.is_empty());
		assert_eq!(layer.keys(), &["key".to_string()]);
		assert_eq!(layer.values(), &[Some(TileValue::String("vl".to_string())), None]);
		assert_eq!(layer.extent, 4096);
		assert_eq!(layer.version, 2);
		Ok(())
	}

	#[test]
	fn test_defaults() -> Result<()> {
		let data = vec![0x0A, 0x01, b'a'];
		let layer = VectorTileLayer::read(&mut ValueReaderSlice::new_le(&data))?;
		assert_eq!(layer, VectorTileLayer::new("a".to_string(), 4096, 1));
		Ok(())
	}

	#[test]
	fn test_missing_name() {
		let data = vec![0x28, 0x80, 0x20];
		let error = VectorTileLayer::read(&mut ValueReaderSlice::new_le(&data)).unwrap_err();
		assert_eq!(error.to_string(), "Failed to get layer name");
	}

	#[test]
	fn test_decode_tag_ids() {
		let mut layer = VectorTileLayer::new("hello".to_string(), 4096, 1);
		layer.property_manager = PropertyManager::from_slices(&["key"], &["value"]);
		let value = TileValue::String("value".to_string());
		assert_eq!(layer.decode_tag_ids(&[0, 0]), Ok(vec![("key", Some(&value))]));
		assert!(layer.decode_tag_ids(&[0, 1]).is_err());
	}
}
