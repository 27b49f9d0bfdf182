use super::{
	command_integer::{Command, CommandInteger, ParameterInteger},
	decoded_geometry::{DecodedGeometry, GeometryCounters, Path},
	error::GeometryError,
};
use crate::vector_tile::{GeomType, VectorTileFeature};
use log::trace;

/// Rings with this many points or fewer are degenerate when closed.
const MAX_DEGENERATE_RING_POINTS: u64 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
	AwaitingCommand,
	ConsumingMoveTo { remaining: u32 },
	ConsumingLineTo { remaining: u32 },
	ConsumingClosePath { remaining: u32 },
}

impl State {
	fn consuming(command: Command, remaining: u32) -> State {
		match command {
			Command::MoveTo => State::ConsumingMoveTo { remaining },
			Command::LineTo => State::ConsumingLineTo { remaining },
			Command::ClosePath => State::ConsumingClosePath { remaining },
		}
	}

	/// State after one repetition of `command` has been consumed.
	fn after_repetition(command: Command, remaining: u32) -> State {
		match remaining - 1 {
			0 => State::AwaitingCommand,
			rest => State::consuming(command, rest),
		}
	}
}

struct GeometryDecoder<'a> {
	stream: &'a [u32],
	cursor: usize,
	ring_points: u64,
	paths: Vec<Path>,
	counters: GeometryCounters,
}

impl<'a> GeometryDecoder<'a> {
	fn new(stream: &'a [u32]) -> GeometryDecoder<'a> {
		GeometryDecoder {
			stream,
			cursor: 0,
			ring_points: 0,
			paths: Vec::new(),
			counters: GeometryCounters {
				total: stream.len() as u64,
				..GeometryCounters::default()
			},
		}
	}

	fn run(mut self, geom_type: GeomType) -> Result<DecodedGeometry, GeometryError> {
		let mut state = State::AwaitingCommand;
		loop {
			state = match state {
				State::AwaitingCommand => match self.read_command()? {
					Some(next) => next,
					None => break,
				},
				State::ConsumingMoveTo { remaining } => {
					let delta = self.read_pair(Command::MoveTo)?;
					self.counters.move_to += 1;
					self.ring_points += 1;
					self.paths.push(Path::start(delta));
					State::after_repetition(Command::MoveTo, remaining)
				}
				State::ConsumingLineTo { remaining } => {
					let delta = self.read_pair(Command::LineTo)?;
					self.counters.line_to += 1;
					self.ring_points += 1;
					match self.paths.last_mut() {
						Some(path) if !path.closed => path.deltas.push(delta),
						_ => self.paths.push(Path::start(delta)),
					}
					State::after_repetition(Command::LineTo, remaining)
				}
				State::ConsumingClosePath { remaining } => {
					self.close_ring();
					State::after_repetition(Command::ClosePath, remaining)
				}
			};
		}

		Ok(DecodedGeometry {
			geom_type,
			paths: self.paths,
			counters: self.counters,
		})
	}

	/// Reads the command integer that starts a round. Returns `None` at the end of the stream.
	fn read_command(&mut self) -> Result<Option<State>, GeometryError> {
		let offset = self.cursor;
		let Some(&value) = self.stream.get(offset) else {
			return Ok(None);
		};
		self.cursor += 1;

		let integer = CommandInteger(value);
		let command = integer.command().ok_or(GeometryError::UnknownCommand {
			id: integer.id(),
			offset,
		})?;
		self.counters.commands += 1;

		if command == Command::MoveTo {
			self.ring_points = 0;
		}

		let count = integer.count();
		trace!("command {command:?} x{count} at offset {offset}");
		if count == 0 {
			self.counters.empty += 1;
			return Ok(Some(State::AwaitingCommand));
		}
		Ok(Some(State::consuming(command, count)))
	}

	fn read_pair(&mut self, command: Command) -> Result<[i32; 2], GeometryError> {
		let offset = self.cursor;
		let end = offset + command.parameter_count();
		let Some(&[x, y]) = self.stream.get(offset..end) else {
			return Err(GeometryError::TruncatedStream { offset });
		};
		self.cursor = end;
		Ok([ParameterInteger(x).value(), ParameterInteger(y).value()])
	}

	fn close_ring(&mut self) {
		self.counters.close += 1;
		let degenerate = self.ring_points <= MAX_DEGENERATE_RING_POINTS;
		if degenerate {
			trace!("degenerate ring with {} points", self.ring_points);
			self.counters.degenerate += 1;
		}
		if let Some(path) = self.paths.last_mut() {
			if !path.closed {
				path.closed = true;
				path.degenerate = degenerate;
			}
		}
	}
}

/// Decodes a geometry command stream into paths and counters.
///
/// The declared `geom_type` is carried into the result but does not restrict which commands are
/// accepted. Decoding stops at the first unknown command id or at a coordinate pair that runs
/// past the end of the stream.
pub fn decode_geometry(stream: &[u32], geom_type: GeomType) -> Result<DecodedGeometry, GeometryError> {
	GeometryDecoder::new(stream).run(geom_type)
}

/// Decodes the geometry of a single feature.
pub fn decode_feature_geometry(feature: &VectorTileFeature) -> Result<DecodedGeometry, GeometryError> {
	decode_geometry(&feature.geometry, feature.geom_type)
}
