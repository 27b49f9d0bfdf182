//! Vector Tile (MVT) reading.
//!
//! This module implements the read side of the Mapbox Vector Tile protobuf schema. It is organized into
//! several submodules:
//!
//! - [`feature`]: per-feature id, tag ids, geometry type and raw geometry command stream.
//! - [`geometry_type`]: enum for the wire-level geometry type.
//! - [`layer`]: a single tile layer with key/value dictionaries and features.
//! - [`property_manager`]: the key and value dictionaries of a layer and tag id resolution.
//! - [`tile`]: the top-level container that holds multiple layers.
//! - [`value`]: typed property values.
//!
//! Everything produced here is an immutable view for the geometry decoder and the report emitter.

mod feature;
mod geometry_type;
mod layer;
mod property_manager;
mod tile;
mod value;

pub use feature::VectorTileFeature;
pub use geometry_type::GeomType;
pub use layer::VectorTileLayer;
pub use property_manager::{PropertyManager, TagError};
pub use tile::VectorTile;
pub use value::TileValue;
