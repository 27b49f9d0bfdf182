//! Per-layer aggregation of decoded geometry counters.
//!
//! [`decode_layer_geometry`] decodes every feature of a layer and folds the counters into a
//! [`LayerStatistics`]. What happens to a failing feature is controlled by [`ErrorPolicy`].

mod aggregator;
mod error;
mod layer_statistics;

pub use aggregator::{decode_layer_geometry, decode_tile_geometry};
pub use error::{FeatureError, LayerDecodeError};
pub use layer_statistics::{ErrorPolicy, LayerStatistics};
