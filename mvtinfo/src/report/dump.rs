use super::write_compression;
use itertools::Itertools;
use mvtinfo_core::compression::TileCompression;
use mvtinfo_geometry::{TileValue, VectorTileLayer};
use std::io::{Result, Write};

fn format_value(value: Option<&TileValue>) -> String {
	value.map_or_else(|| "null".to_string(), ToString::to_string)
}

/// Writes every layer's dictionaries and the raw tags and geometry integers of every feature.
pub fn write_dump(out: &mut impl Write, compression: TileCompression, layers: &[&VectorTileLayer]) -> Result<()> {
	write_compression(out, compression)?;

	for layer in layers {
		writeln!(out, "layer: {}", layer.name)?;
		writeln!(out, "  version: {}", layer.version)?;
		writeln!(out, "  extent: {}", layer.extent)?;
		writeln!(out, "  keys: {}", layer.property_manager.iter_key().join(","))?;
		writeln!(
			out,
			"  values: {}",
			layer.property_manager.iter_val().map(format_value).join(",")
		)?;

		for feature in &layer.features {
			writeln!(out, "  feature: {}", feature.id.unwrap_or_default())?;
			writeln!(out, "    type: {}", feature.geom_type)?;
			writeln!(out, "    tags: {}", feature.tag_ids.iter().join(","))?;
			writeln!(out, "    geometries: {}", feature.geometry.iter().join(","))?;
		}
		writeln!(out)?;
	}

	Ok(())
}
