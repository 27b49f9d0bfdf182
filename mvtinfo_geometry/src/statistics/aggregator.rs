use super::{
	error::{FeatureError, LayerDecodeError},
	layer_statistics::{ErrorPolicy, LayerStatistics},
};
use crate::{
	command::{GeometryCounters, decode_feature_geometry},
	vector_tile::{VectorTile, VectorTileFeature, VectorTileLayer},
};
use log::{debug, warn};

fn decode_feature(layer: &VectorTileLayer, feature: &VectorTileFeature) -> Result<GeometryCounters, FeatureError> {
	layer.decode_tag_ids(&feature.tag_ids)?;
	Ok(decode_feature_geometry(feature)?.counters)
}

/// Decodes every feature of `layer` and sums up their geometry counters.
///
/// With [`ErrorPolicy::Abort`] the first failing feature ends the call and none of its counters
/// are kept. With [`ErrorPolicy::Skip`] failing features are counted in `skipped_features` and
/// their errors collected in `errors`.
pub fn decode_layer_geometry(layer: &VectorTileLayer, policy: ErrorPolicy) -> Result<LayerStatistics, LayerDecodeError> {
	let mut stats = LayerStatistics::new();

	for (feature_index, feature) in layer.features.iter().enumerate() {
		match decode_feature(layer, feature) {
			Ok(counters) => stats.add(&counters),
			Err(kind) => {
				let error = LayerDecodeError {
					layer: layer.name.clone(),
					feature_index,
					kind,
				};
				match policy {
					ErrorPolicy::Abort => return Err(error),
					ErrorPolicy::Skip => {
						warn!("skipping feature: {error}: {}", error.kind);
						stats.skip(error);
					}
				}
			}
		}
	}

	debug!(
		"layer '{}': {} features, {} commands, {} skipped",
		layer.name,
		layer.features.len(),
		stats.num_commands,
		stats.skipped_features
	);
	Ok(stats)
}

/// Runs [`decode_layer_geometry`] over every layer of `tile`, in layer order.
pub fn decode_tile_geometry(tile: &VectorTile, policy: ErrorPolicy) -> Result<Vec<LayerStatistics>, LayerDecodeError> {
	tile
		.layers
		.iter()
		.map(|layer| decode_layer_geometry(layer, policy))
		.collect()
}
