//! Decoding and statistics for the geometry encoding of Mapbox vector tiles.
//!
//! - [`vector_tile`]: reads tiles, layers, features and property values from protobuf bytes.
//! - [`command`]: decodes a feature's geometry command stream into paths and counters.
//! - [`statistics`]: folds per-feature results into per-layer totals.

pub mod command;
pub mod statistics;
pub mod vector_tile;

pub use command::{DecodedGeometry, GeometryCounters, GeometryError, Path, decode_feature_geometry, decode_geometry};
pub use statistics::{
	ErrorPolicy, FeatureError, LayerDecodeError, LayerStatistics, decode_layer_geometry, decode_tile_geometry,
};
pub use vector_tile::{GeomType, TagError, TileValue, VectorTile, VectorTileFeature, VectorTileLayer};
