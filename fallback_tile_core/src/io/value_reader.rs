//! The [`ValueReader`] trait: protobuf primitives from a seekable source.
//!
//! Length-delimited fields are consumed through sub-readers so that nested messages
//! can be decoded with the same trait object without copying.

use crate::Blob;
use anyhow::{Context, Result, bail};
use byteorder::{ByteOrder, ReadBytesExt};
use std::io::{Read, Seek};

pub trait SeekRead: Seek + Read {}

pub trait ValueReader<'a, E: ByteOrder + 'a> {
	fn get_reader(&mut self) -> &mut dyn SeekRead;

	fn len(&self) -> u64;

	fn position(&mut self) -> u64;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn remaining(&mut self) -> u64 {
		self.len() - self.position()
	}

	fn has_remaining(&mut self) -> bool {
		self.remaining() > 0
	}

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

	fn read_svarint(&mut self) -> Result<i64> {
		let value = self.read_varint()? as i64;
		Ok((value >> 1) ^ -(value & 1))
	}

	fn read_f32(&mut self) -> Result<f32> {
		Ok(self.get_reader().read_f32::<E>()?)
	}

	fn read_f64(&mut self) -> Result<f64> {
		Ok(self.get_reader().read_f64::<E>()?)
	}

	fn read_blob(&mut self, length: u64) -> Result<Blob> {
		if length > self.remaining() {
			bail!("Blob length {length} exceeds remaining data");
		}
		let mut blob = Blob::new_sized(length as usize);
		self.get_reader().read_exact(blob.as_mut_slice())?;
		Ok(blob)
	}

	fn read_string(&mut self, length: u64) -> Result<String> {
		Ok(String::from_utf8(self.read_blob(length)?.into_vec())?)
	}

	/// Reads a field key and splits it into `(field_number, wire_type)`.
	fn read_pbf_key(&mut self) -> Result<(u32, u8)> {
		let value = self.read_varint().context("Failed to read varint for PBF key")?;
		Ok(((value >> 3) as u32, (value & 0x07) as u8))
	}

	/// Returns a reader over the next `length` bytes and advances past them.
	fn get_sub_reader<'b>(&'b mut self, length: u64) -> Result<Box<dyn ValueReader<'b, E> + 'b>>
	where
		E: 'b;

	/// Reads a length prefix and returns a reader over the following message.
	fn get_pbf_sub_reader<'b>(&'b mut self) -> Result<Box<dyn ValueReader<'b, E> + 'b>>
	where
		E: 'b,
	{
		let length = self
			.read_varint()
			.context("Failed to read varint for sub-reader length")?;
		self.get_sub_reader(length).context("Failed to get sub-reader")
	}

	fn read_pbf_packed_uint32(&mut self) -> Result<Vec<u32>> {
		let mut reader = self
			.get_pbf_sub_reader()
			.context("Failed to get PBF sub-reader for packed uint32")?;
		let mut values = Vec::new();
		while reader.has_remaining() {
			let value = reader
				.read_varint()
				.context("Failed to read varint for packed uint32")?;
			values.push(u32::try_from(value).context("Packed uint32 value out of range")?);
		}
		drop(reader);
		Ok(values)
	}

	fn read_pbf_string(&mut self) -> Result<String> {
		let length = self.read_varint().context("Failed to read varint for string length")?;
		self.read_string(length).context("Failed to read PBF string")
	}

	fn read_pbf_blob(&mut self) -> Result<Blob> {
		let length = self.read_varint().context("Failed to read varint for blob length")?;
		self.read_blob(length).context("Failed to read PBF blob")
	}
}
