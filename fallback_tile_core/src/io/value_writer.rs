//! The [`ValueWriter`] trait: protobuf primitives on top of any [`std::io::Write`].

use super::ValueWriterBlob;
use crate::Blob;
use anyhow::{Context, Result};
use byteorder::{ByteOrder, WriteBytesExt};
use std::io::Write;

/// Protobuf wire types used by the vector tile format.
pub const WIRE_VARINT: u8 = 0;
pub const WIRE_FIXED64: u8 = 1;
pub const WIRE_LEN: u8 = 2;
pub const WIRE_FIXED32: u8 = 5;

/// Writes protobuf values to a destination.
///
/// Implementors only provide access to the underlying writer and the current position;
/// everything else is derived. `E` selects the byte order of fixed-width numbers.
pub trait ValueWriter<E: ByteOrder> {
	fn get_writer(&mut self) -> &mut dyn Write;

	/// Current write offset from the start of the destination.
	fn position(&mut self) -> Result<u64>;

	fn is_empty(&mut self) -> Result<bool> {
		Ok(self.position()? == 0)
	}

	/// Writes an unsigned LEB128 varint.
	fn write_varint(&mut self, mut value: u64) -> Result<()> {
		while value >= 0x80 {
			self.get_writer().write_all(&[((value & 0x7F) as u8) | 0x80])?;
			value >>= 7;
		}
		self.get_writer().write_all(&[value as u8])?;
		Ok(())
	}

	/// Writes a zigzag-encoded signed varint.
	fn write_svarint(&mut self, value: i64) -> Result<()> {
		self.write_varint(((value << 1) ^ (value >> 63)) as u64)
	}

	fn write_f32(&mut self, value: f32) -> Result<()> {
		Ok(self.get_writer().write_f32::<E>(value)?)
	}

	fn write_f64(&mut self, value: f64) -> Result<()> {
		Ok(self.get_writer().write_f64::<E>(value)?)
	}

	fn write_blob(&mut self, blob: &Blob) -> Result<()> {
		self.get_writer().write_all(blob.as_slice())?;
		Ok(())
	}

	fn write_string(&mut self, text: &str) -> Result<()> {
		self.get_writer().write_all(text.as_bytes())?;
		Ok(())
	}

	/// Writes a field key: `(field_number << 3) | wire_type`.
	fn write_pbf_key(&mut self, field_number: u32, wire_type: u8) -> Result<()> {
		self
			.write_varint((u64::from(field_number) << 3) | u64::from(wire_type))
			.context("Failed to write PBF key")
	}

	/// Writes a packed repeated `uint32` field body (length prefix followed by varints).
	fn write_pbf_packed_uint32(&mut self, data: &[u32]) -> Result<()> {
		let mut writer = ValueWriterBlob::new_le();
		for &value in data {
			writer
				.write_varint(u64::from(value))
				.context("Failed to write varint for packed uint32")?;
		}
		self
			.write_pbf_blob(&writer.into_blob())
			.context("Failed to write packed uint32 blob")
	}

	/// Writes a length-delimited byte field body.
	fn write_pbf_blob(&mut self, blob: &Blob) -> Result<()> {
		self
			.write_varint(blob.len())
			.context("Failed to write varint for blob length")?;
		self.write_blob(blob).context("Failed to write PBF blob")
	}

	/// Writes a length-delimited UTF-8 string field body.
	fn write_pbf_string(&mut self, text: &str) -> Result<()> {
		self
			.write_varint(text.len() as u64)
			.context("Failed to write varint for string length")?;
		self.write_string(text).context("Failed to write PBF string")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use byteorder::LittleEndian;
	use rstest::rstest;
	use std::io::Cursor;

	struct MockValueWriter {
		cursor: Cursor<Vec<u8>>,
	}

	impl MockValueWriter {
		fn new() -> Self {
			Self {
				cursor: Cursor::new(Vec::new()),
			}
		}

		fn into_inner(self) -> Vec<u8> {
			self.cursor.into_inner()
		}
	}

	impl ValueWriter<LittleEndian> for MockValueWriter {
		fn get_writer(&mut self) -> &mut dyn Write {
			&mut self.cursor
		}

		fn position(&mut self) -> Result<u64> {
			Ok(self.cursor.position())
		}
	}

	#[rstest]
	#[case(0, vec![0x00])]
	#[case(1, vec![0x01])]
	#[case(127, vec![0x7F])]
	#[case(128, vec![0x80, 0x01])]
	#[case(300, vec![0xAC, 0x02])]
	#[case(4096, vec![0x80, 0x20])]
	fn write_varint(#[case] value: u64, #[case] expected: Vec<u8>) -> Result<()> {
		let mut writer = MockValueWriter::new();
		writer.write_varint(value)?;
		assert_eq!(writer.into_inner(), expected);
		Ok(())
	}

	#[rstest]
	#[case(0, vec![0])]
	#[case(-1, vec![1])]
	#[case(1, vec![2])]
	#[case(-75, vec![149, 1])]
	#[case(4096, vec![0x80, 0x40])]
	fn write_svarint(#[case] value: i64, #[case] expected: Vec<u8>) -> Result<()> {
		let mut writer = MockValueWriter::new();
		writer.write_svarint(value)?;
		assert_eq!(writer.into_inner(), expected);
		Ok(())
	}

	#[test]
	fn write_floats() -> Result<()> {
		let mut writer = MockValueWriter::new();
		writer.write_f32(1.0)?;
		writer.write_f64(1.0)?;
		assert_eq!(
			writer.into_inner(),
			vec![0x00, 0x00, 0x80, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x3F]
		);
		Ok(())
	}

	#[test]
	fn is_empty_tracks_position() -> Result<()> {
		let mut writer = MockValueWriter::new();
		assert!(writer.is_empty()?);
		writer.write_string("x")?;
		assert!(!writer.is_empty()?);
		Ok(())
	}

	#[test]
	fn write_pbf_key() -> Result<()> {
		let mut writer = MockValueWriter::new();
		writer.write_pbf_key(1, WIRE_VARINT)?;
		writer.write_pbf_key(3, WIRE_LEN)?;
		writer.write_pbf_key(15, WIRE_VARINT)?;
		assert_eq!(writer.into_inner(), vec![0x08, 0x1A, 0x78]);
		Ok(())
	}

	#[test]
	fn write_pbf_packed_uint32() -> Result<()> {
		let mut writer = MockValueWriter::new();
		writer.write_pbf_packed_uint32(&[100, 150, 300])?;
		assert_eq!(writer.into_inner(), vec![5, 100, 150, 1, 172, 2]);
		Ok(())
	}

	#[test]
	fn write_pbf_string_and_blob() -> Result<()> {
		let mut writer = MockValueWriter::new();
		writer.write_pbf_string("hello")?;
		writer.write_pbf_blob(&Blob::from(&[0x01, 0x02]))?;
		assert_eq!(
			writer.into_inner(),
			vec![0x05, b'h', b'e', b'l', b'l', b'o', 0x02, 0x01, 0x02]
		);
		Ok(())
	}
}
