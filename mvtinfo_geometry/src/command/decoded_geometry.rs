use crate::vector_tile::GeomType;

/// Counters collected while decoding one command stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeometryCounters {
	/// Number of integers in the stream.
	pub total: u64,
	/// Number of command integers, including those with a zero repeat count.
	pub commands: u64,
	pub move_to: u64,
	pub line_to: u64,
	pub close: u64,
	/// Command integers with a zero repeat count.
	pub empty: u64,
	/// ClosePath repetitions that closed a ring of two or fewer points.
	pub degenerate: u64,
}

/// A connected sequence of coordinate deltas started by a MoveTo.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
	/// Zig-zag decoded `[dx, dy]` deltas, relative to the previous point of the feature.
	pub deltas: Vec<[i32; 2]>,
	pub closed: bool,
	/// Set when the path was closed with too few points to form a ring.
	pub degenerate: bool,
}

impl Path {
	pub(crate) fn start(delta: [i32; 2]) -> Path {
		Path {
			deltas: vec![delta],
			closed: false,
			degenerate: false,
		}
	}
}

/// The result of decoding one feature's geometry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodedGeometry {
	/// Declared geometry type; informational only.
	pub geom_type: GeomType,
	pub paths: Vec<Path>,
	pub counters: GeometryCounters,
}

impl DecodedGeometry {
	pub fn is_empty(&self) -> bool {
		self.paths.is_empty()
	}

	pub fn point_count(&self) -> usize {
		self.paths.iter().map(|path| path.deltas.len()).sum()
	}

	/// Absolute coordinates of every path, accumulating the deltas across the whole feature.
	pub fn to_coordinates(&self) -> Vec<Vec<[i64; 2]>> {
		let mut cursor = [0i64, 0i64];
		self
			.paths
			.iter()
			.map(|path| {
				path
					.deltas
					.iter()
					.map(|[dx, dy]| {
						cursor[0] += i64::from(*dx);
						cursor[1] += i64::from(*dy);
						cursor
					})
					.collect()
			})
			.collect()
	}
}
