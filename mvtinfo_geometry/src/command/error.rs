use thiserror::Error;

/// Errors that stop the decoding of a single feature's geometry.
///
/// `offset` is the index into the command stream where decoding failed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
	#[error("unknown command id {id} at offset {offset}")]
	UnknownCommand { id: u32, offset: usize },
	#[error("truncated coordinate pair at offset {offset}")]
	TruncatedStream { offset: usize },
}
