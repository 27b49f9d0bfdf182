use super::write_compression;
use anyhow::Result;
use mvtinfo_core::compression::TileCompression;
use mvtinfo_geometry::{ErrorPolicy, LayerStatistics, VectorTileLayer, decode_layer_geometry};
use std::io::Write;

/// Writes the layer overview with the geometry summary block of every layer.
///
/// Layers are written as they are decoded, so with [`ErrorPolicy::Abort`] the layers before a
/// failing one are already in `out` when the error is returned.
pub fn write_summary(
	out: &mut impl Write,
	compression: TileCompression,
	layers: &[&VectorTileLayer],
	policy: ErrorPolicy,
) -> Result<()> {
	write_compression(out, compression)?;
	writeln!(out, "layers: {}", layers.len())?;

	for layer in layers {
		writeln!(out, "{}:", layer.name)?;
		writeln!(out, "  version: {}", layer.version)?;
		writeln!(out, "  extent: {}", layer.extent)?;
		writeln!(out, "  features: {}", layer.features.len())?;
		writeln!(out, "  keys: {}", layer.keys().len())?;
		writeln!(out, "  values: {}", layer.values().len())?;

		let stats = decode_layer_geometry(layer, policy)?;
		write_geometry_summary(out, &stats)?;
	}

	Ok(())
}

fn write_geometry_summary(out: &mut impl Write, stats: &LayerStatistics) -> std::io::Result<()> {
	writeln!(out, "  geometry summary:")?;
	writeln!(out, "    total: {}", stats.total_repeated)?;
	writeln!(out, "    commands: {}", stats.num_commands)?;
	writeln!(out, "    move_to: {}", stats.num_move_to)?;
	writeln!(out, "    line_to: {}", stats.num_line_to)?;
	writeln!(out, "    close: {}", stats.num_close)?;
	writeln!(out, "    degenerate polygons: {}", stats.num_degenerate)?;
	writeln!(out, "    empty geoms: {}", stats.num_empty)?;
	if stats.skipped_features > 0 {
		writeln!(out, "    skipped features: {}", stats.skipped_features)?;
	}
	for error in &stats.errors {
		writeln!(out, "    skipped: {error}: {}", error.kind)?;
	}
	Ok(())
}
