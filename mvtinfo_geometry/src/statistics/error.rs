use crate::{command::GeometryError, vector_tile::TagError};
use thiserror::Error;

/// Why a single feature could not be decoded.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FeatureError {
	#[error(transparent)]
	Geometry(#[from] GeometryError),
	#[error("invalid tags: {0}")]
	InvalidTags(#[from] TagError),
}

/// A feature-level failure, located by layer name and feature index.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("failed to decode feature {feature_index} of layer '{layer}'")]
pub struct LayerDecodeError {
	pub layer: String,
	pub feature_index: usize,
	#[source]
	pub kind: FeatureError,
}
