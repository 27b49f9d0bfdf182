use super::geometry_type::GeomType;
use anyhow::{Context, Result, bail};
use byteorder::LE;
use log::trace;
use mvtinfo_core::io::ValueReader;

/// A single feature as stored in a layer: optional id, tag ids, geometry type and the raw geometry
/// command stream.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorTileFeature {
	pub id: Option<u64>,
	pub tag_ids: Vec<u32>,
	pub geom_type: GeomType,
	pub geometry: Vec<u32>,
}

impl VectorTileFeature {
	/// Decodes a `VectorTileFeature` from a protobuf message.
	///
	/// Repeated fields are accepted both packed and unpacked.
	pub fn read(reader: &mut dyn ValueReader<'_, LE>) -> Result<VectorTileFeature> {
		let mut f = VectorTileFeature::default();

		while reader.has_remaining() {
			match reader.read_pbf_key().context("Failed to read PBF key")? {
				(1, 0) => f.id = Some(reader.read_varint().context("Failed to read feature ID")?),
				(2, 2) => f
					.tag_ids
					.extend(reader.read_pbf_packed_uint32().context("Failed to read tag IDs")?),
				(2, 0) => f.tag_ids.push(read_u32(reader).context("Failed to read tag ID")?),
				(3, 0) => f.geom_type = GeomType::from(reader.read_varint().context("Failed to read geometry type")?),
				(4, 2) => f
					.geometry
					.extend(reader.read_pbf_packed_uint32().context("Failed to read geometry data")?),
				(4, 0) => f.geometry.push(read_u32(reader).context("Failed to read geometry integer")?),
				(1..=4, w) => bail!("Unexpected wire type ({w}) for a feature field"),
				(field, w) => {
					trace!("skipping unknown feature field {field} (wire type {w})");
					reader.skip_pbf_field(w).context("Failed to skip unknown feature field")?;
				}
			}
		}

		Ok(f)
	}
}

fn read_u32(reader: &mut dyn ValueReader<'_, LE>) -> Result<u32> {
	Ok(u32::try_from(reader.read_varint()?)?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use mvtinfo_core::io::ValueReaderSlice;
	use pretty_assertions::assert_eq;

	#[test]
	fn read_packed_feature() -> Result<()> {
		let data = [
			0x08, 0x2A, // id: 42
			0x12, 0x02, 0x00, 0x01, // tags: [0, 1]
			0x18, 0x03, // type: Polygon
			0x22, 0x04, 0x09, 0x00, 0x00, 0x0F, // geometry: [9, 0, 0, 15]
		];
		let feature = VectorTileFeature::read(&mut ValueReaderSlice::new_le(&data))?;
		assert_eq!(
			feature,
			VectorTileFeature {
				id: Some(42),
				tag_ids: vec![0, 1],
				geom_type: GeomType::Polygon,
				geometry: vec![9, 0, 0, 15],
			}
		);
		Ok(())
	}

	#[test]
	fn read_unpacked_feature() -> Result<()> {
		let data = [
			0x10, 0x03, 0x10, 0x04, // tags: 3, 4
			0x20, 0x09, 0x20, 0x02, 0x20, 0x04, // geometry: 9, 2, 4
		];
		let feature = VectorTileFeature::read(&mut ValueReaderSlice::new_le(&data))?;
		assert_eq!(feature.id, None);
		assert_eq!(feature.geom_type, GeomType::Unknown);
		assert_eq!(feature.tag_ids, vec![3, 4]);
		assert_eq!(feature.geometry, vec![9, 2, 4]);
		Ok(())
	}

	#[test]
	fn skips_unknown_fields() -> Result<()> {
		let data = [
			0x2A, 0x02, 0xFF, 0xFF, // field 5, length-delimited
			0x18, 0x01, // type: Point
		];
		let feature = VectorTileFeature::read(&mut ValueReaderSlice::new_le(&data))?;
		assert_eq!(feature.geom_type, GeomType::Point);
		Ok(())
	}

	#[test]
	fn rejects_wrong_wire_type() {
		// field 3 announced as fixed32
		let data = [0x1D, 0x00, 0x00, 0x00, 0x00];
		assert!(VectorTileFeature::read(&mut ValueReaderSlice::new_le(&data)).is_err());
	}

	#[test]
	fn rejects_truncated_geometry() {
		let data = [0x22, 0x04, 0x09, 0x00];
		assert!(VectorTileFeature::read(&mut ValueReaderSlice::new_le(&data)).is_err());
	}
}
