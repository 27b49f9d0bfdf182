//! Contains the shared value types.

mod blob;
pub use blob::*;
