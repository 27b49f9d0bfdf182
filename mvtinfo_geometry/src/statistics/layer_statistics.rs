use super::error::LayerDecodeError;
use crate::command::GeometryCounters;

/// What to do with a feature whose geometry or tags fail to decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
	/// Stop at the first failing feature and return its error.
	#[default]
	Abort,
	/// Leave the failing feature out of the counters, record the error and continue.
	Skip,
}

/// Geometry counters accumulated over the features of one layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayerStatistics {
	pub total_repeated: u64,
	pub num_commands: u64,
	pub num_move_to: u64,
	pub num_line_to: u64,
	pub num_close: u64,
	pub num_empty: u64,
	pub num_degenerate: u64,
	pub skipped_features: u64,
	/// Errors of skipped features, in feature order.
	pub errors: Vec<LayerDecodeError>,
}

impl LayerStatistics {
	pub fn new() -> LayerStatistics {
		LayerStatistics::default()
	}

	/// Folds the counters of one successfully decoded feature.
	pub fn add(&mut self, counters: &GeometryCounters) {
		self.total_repeated += counters.total;
		self.num_commands += counters.commands;
		self.num_move_to += counters.move_to;
		self.num_line_to += counters.line_to;
		self.num_close += counters.close;
		self.num_empty += counters.empty;
		self.num_degenerate += counters.degenerate;
	}

	pub fn skip(&mut self, error: LayerDecodeError) {
		self.skipped_features += 1;
		self.errors.push(error);
	}
}
