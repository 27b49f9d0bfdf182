// This module defines the `ValueReader` trait for reading protobuf encoded values.
//
// # Overview
//
// The `ValueReader` trait provides an interface for reading varints, zig-zag encoded integers, fixed-width
// numbers, strings and length-delimited protobuf fields. Implementations handle the byte order and provide
// sub-readers for embedded messages, so nested messages (tile → layer → feature) can be decoded with one
// reader per nesting level.

use anyhow::{Context, Result, bail, ensure};
use byteorder::{ByteOrder, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};

/// A simple alias for types implementing both `Seek` and `Read`, used for convenience.
pub trait SeekRead: Seek + Read {}

/// Protobuf wire type of a varint field.
pub const WIRE_VARINT: u8 = 0;
/// Protobuf wire type of a 64-bit fixed field.
pub const WIRE_FIXED64: u8 = 1;
/// Protobuf wire type of a length-delimited field.
pub const WIRE_LEN: u8 = 2;
/// Protobuf wire type of a 32-bit fixed field.
pub const WIRE_FIXED32: u8 = 5;

/// A trait for reading values from various sources with support for different byte orders.
pub trait ValueReader<'a, E: ByteOrder + 'a> {
	/// Returns the underlying reader to access raw bytes.
	fn get_reader(&mut self) -> &mut dyn SeekRead;

	/// Returns the total length of the readable data.
	fn len(&self) -> u64;

	/// Returns the current position within the readable data.
	fn position(&mut self) -> u64;

	/// Sets the current position within the readable data.
	///
	/// # Errors
	/// Returns an error if seeking to the specified position fails.
	fn set_position(&mut self, position: u64) -> Result<()>;

	/// Checks if there is no data to read.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the number of bytes remaining to be read.
	fn remaining(&mut self) -> u64 {
		self.len() - self.position()
	}

	/// Checks if there are any bytes remaining to be read.
	fn has_remaining(&mut self) -> bool {
		self.remaining() > 0
	}

	/// Reads a variable-length unsigned integer (varint) from the data.
	///
	/// # Errors
	/// Returns an error if reading fails or the varint is too long (more than 70 bits).
	fn read_varint(&mut self) -> Result<u64> {
		let mut value = 0;
		let mut shift = 0;
		loop {
			let byte = self.get_reader().read_u8()?;
			value |= (u64::from(byte) & 0x7F) << shift;
			if byte & 0x80 == 0 {
				break;
			}
			shift += 7;
			if shift >= 70 {
				bail!("Varint too long");
			}
		}
		Ok(value)
	}

	/// Reads a variable-length signed integer (zigzag-encoded varint) from the data.
	///
	/// # Errors
	/// Returns an error if reading the underlying varint fails.
	fn read_svarint(&mut self) -> Result<i64> {
		let sint_value = self.read_varint()? as i64;
		Ok((sint_value >> 1) ^ -(sint_value & 1))
	}

	/// Reads a 32-bit floating point number from the data.
	fn read_f32(&mut self) -> Result<f32> {
		Ok(self.get_reader().read_f32::<E>()?)
	}

	/// Reads a 64-bit floating point number from the data.
	fn read_f64(&mut self) -> Result<f64> {
		Ok(self.get_reader().read_f64::<E>()?)
	}

	/// Reads an unsigned 8-bit integer from the data.
	fn read_u8(&mut self) -> Result<u8> {
		Ok(self.get_reader().read_u8()?)
	}

	/// Reads a UTF-8 encoded string of the specified length.
	///
	/// # Errors
	/// Returns an error if reading fails or if the bytes are not valid UTF-8.
	fn read_string(&mut self, length: u64) -> Result<String> {
		ensure!(length <= self.remaining(), "String length exceeds remaining data");
		let mut vec = vec![0u8; length as usize];
		self.get_reader().read_exact(&mut vec)?;
		Ok(String::from_utf8(vec)?)
	}

	/// Advances the position by `length` bytes without reading them.
	///
	/// # Errors
	/// Returns an error if fewer than `length` bytes remain.
	fn skip(&mut self, length: u64) -> Result<()> {
		ensure!(length <= self.remaining(), "Cannot skip past the end of the data");
		self.get_reader().seek(SeekFrom::Current(length as i64))?;
		Ok(())
	}

	/// Reads a Protocol Buffers key consisting of a field number and wire type.
	///
	/// # Returns
	/// A tuple `(field_number, wire_type)`.
	fn read_pbf_key(&mut self) -> Result<(u32, u8)> {
		let value = self.read_varint().context("Failed to read varint for PBF key")?;
		Ok(((value >> 3) as u32, (value & 0x07) as u8))
	}

	/// Skips the value of a field with the given wire type.
	///
	/// Used for fields a reader does not know, e.g. extensions of the vector tile schema.
	///
	/// # Errors
	/// Returns an error for the deprecated group wire types and for unknown wire types.
	fn skip_pbf_field(&mut self, wire_type: u8) -> Result<()> {
		match wire_type {
			WIRE_VARINT => {
				self.read_varint().context("Failed to skip varint field")?;
			}
			WIRE_FIXED64 => self.skip(8).context("Failed to skip 64-bit field")?,
			WIRE_LEN => {
				let length = self.read_varint().context("Failed to read length of skipped field")?;
				self.skip(length).context("Failed to skip length-delimited field")?;
			}
			WIRE_FIXED32 => self.skip(4).context("Failed to skip 32-bit field")?,
			w => bail!("Unsupported wire type ({w})"),
		}
		Ok(())
	}

	/// Returns a sub-reader limited to the given length.
	///
	/// # Errors
	/// Returns an error if creating the sub-reader fails.
	fn get_sub_reader<'b>(&'b mut self, length: u64) -> Result<Box<dyn ValueReader<'b, E> + 'b>>
	where
		E: 'b;

	/// Returns a sub-reader for a Protocol Buffers embedded message.
	///
	/// Reads the length as a varint, then returns a sub-reader limited to that length.
	fn get_pbf_sub_reader<'b>(&'b mut self) -> Result<Box<dyn ValueReader<'b, E> + 'b>>
	where
		E: 'b,
	{
		let length = self
			.read_varint()
			.context("Failed to read varint for sub-reader length")?;
		self.get_sub_reader(length).context("Failed to get sub-reader")
	}

	/// Reads a packed repeated field of unsigned 32-bit integers from a Protocol Buffers message.
	///
	/// # Errors
	/// Returns an error if reading the sub-reader or any varint fails, or if a value exceeds `u32`.
	fn read_pbf_packed_uint32(&mut self) -> Result<Vec<u32>> {
		let mut reader = self
			.get_pbf_sub_reader()
			.context("Failed to get PBF sub-reader for packed uint32")?;
		let mut values = Vec::new();
		while reader.has_remaining() {
			let value = reader
				.read_varint()
				.context("Failed to read varint for packed uint32")?;
			values.push(u32::try_from(value).context("Packed value exceeds uint32")?);
		}
		drop(reader);
		Ok(values)
	}

	/// Reads a Protocol Buffers string field.
	fn read_pbf_string(&mut self) -> Result<String> {
		let length = self.read_varint().context("Failed to read varint for string length")?;
		self.read_string(length).context("Failed to read PBF string")
	}
}
