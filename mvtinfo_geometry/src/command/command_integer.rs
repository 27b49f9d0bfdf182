const COMMAND_ID_BITS: u32 = 3;
const COMMAND_ID_MASK: u32 = (1 << COMMAND_ID_BITS) - 1;

pub const CMD_MOVE_TO: u32 = 1;
pub const CMD_LINE_TO: u32 = 2;
/// Wide close-path constant used by some encoders; only its low three bits are significant.
const SEG_CLOSE: u32 = 0x40 | 0x0f;
pub const CMD_CLOSE_PATH: u32 = SEG_CLOSE & COMMAND_ID_MASK;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
	MoveTo,
	LineTo,
	ClosePath,
}

impl Command {
	/// Number of parameter integers consumed by each repetition.
	pub fn parameter_count(&self) -> usize {
		match self {
			Command::MoveTo | Command::LineTo => 2,
			Command::ClosePath => 0,
		}
	}
}

/// A command integer: command id in the low three bits, repeat count above.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandInteger(pub u32);

impl CommandInteger {
	pub fn id(&self) -> u32 {
		self.0 & COMMAND_ID_MASK
	}

	pub fn count(&self) -> u32 {
		self.0 >> COMMAND_ID_BITS
	}

	/// Returns the command, or `None` for an id the encoding does not define.
	pub fn command(&self) -> Option<Command> {
		match self.id() {
			CMD_MOVE_TO => Some(Command::MoveTo),
			CMD_LINE_TO => Some(Command::LineTo),
			CMD_CLOSE_PATH => Some(Command::ClosePath),
			_ => None,
		}
	}
}

/// A zig-zag encoded parameter integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterInteger(pub u32);

impl ParameterInteger {
	pub fn value(&self) -> i32 {
		((self.0 >> 1) as i32) ^ -((self.0 & 1) as i32)
	}
}
