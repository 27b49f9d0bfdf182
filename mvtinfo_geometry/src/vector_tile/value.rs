//! Typed property values of a vector tile layer.
//!
//! The schema models a value as a message with seven optional fields of which exactly one is expected to
//! be set. [`TileValue`] keeps that as an enum with one variant per field, so every consumer has to handle
//! all seven alternatives. A value message without any field is represented as `None` by the layer's
//! value dictionary.

use anyhow::{Context, Result, bail};
use byteorder::LE;
use log::trace;
use mvtinfo_core::io::ValueReader;
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq)]
pub enum TileValue {
	String(String),
	Float(f32),
	Double(f64),
	Int(i64),
	UInt(u64),
	SInt(i64),
	Bool(bool),
}

impl TileValue {
	/// Reads a value message. Returns `Ok(None)` if the message sets none of the seven fields.
	///
	/// If a message sets several fields, the last one wins, as in any protobuf `oneof`.
	pub fn read(reader: &mut dyn ValueReader<'_, LE>) -> Result<Option<TileValue>> {
		// source: https://protobuf.dev/programming-guides/encoding/

		use TileValue::*;
		let mut value: Option<TileValue> = None;

		while reader.has_remaining() {
			match reader.read_pbf_key().context("Failed to read PBF key")? {
				(1, 2) => value = Some(String(reader.read_pbf_string().context("Failed to read string value")?)),
				(2, 5) => value = Some(Float(reader.read_f32().context("Failed to read f32 value")?)),
				(3, 1) => value = Some(Double(reader.read_f64().context("Failed to read f64 value")?)),
				(4, 0) => {
					value = Some(Int(
						reader.read_varint().context("Failed to read varint for int value")? as i64,
					));
				}
				(5, 0) => value = Some(UInt(reader.read_varint().context("Failed to read varint for uint value")?)),
				(6, 0) => value = Some(SInt(reader.read_svarint().context("Failed to read svarint value")?)),
				(7, 0) => {
					value = Some(Bool(
						reader.read_varint().context("Failed to read varint for bool value")? != 0,
					));
				}
				(1..=7, w) => bail!("Unexpected wire type ({w}) for a value field"),
				(f, w) => {
					trace!("skipping unknown value field {f} (wire type {w})");
					reader.skip_pbf_field(w).context("Failed to skip unknown value field")?;
				}
			}
		}

		Ok(value)
	}
}

impl Display for TileValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			TileValue::String(v) => write!(f, "{v}"),
			TileValue::Float(v) => write!(f, "{v}"),
			TileValue::Double(v) => write!(f, "{v}"),
			TileValue::Int(v) => write!(f, "{v}"),
			TileValue::UInt(v) => write!(f, "{v}"),
			TileValue::SInt(v) => write!(f, "{v}"),
			TileValue::Bool(v) => write!(f, "{v}"),
		}
	}
}
