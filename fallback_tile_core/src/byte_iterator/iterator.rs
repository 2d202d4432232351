//! A byte-level iterator over a reader source.
//!
//! [`ByteIterator`] supports peeking at the next byte without consuming it. It keeps a ring
//! buffer of recently read bytes, so errors can show where parsing failed.

use anyhow::{Error, Result, anyhow};
use std::io::Read;

const DEBUG_RING_BUFFER_SIZE: usize = 16;
const BUFFER_SIZE: usize = 4096;

pub struct ByteIterator<'a> {
	buffer: [u8; BUFFER_SIZE],
	buffer_len: usize,
	buffer_pos: usize,
	source: Box<dyn Read + 'a>,
	peeked_byte: Option<u8>,
	position: usize,
	debug_buffer: [u8; DEBUG_RING_BUFFER_SIZE],
}

impl<'a> ByteIterator<'a> {
	pub fn from_reader(reader: impl Read + 'a) -> Self {
		let mut instance = ByteIterator {
			buffer: [0; BUFFER_SIZE],
			buffer_len: 0,
			buffer_pos: 0,
			source: Box::new(reader),
			peeked_byte: None,
			position: 0,
			debug_buffer: [0; DEBUG_RING_BUFFER_SIZE],
		};
		instance.fill_buffer();
		instance.advance();
		instance
	}

	/// Iterates over the bytes of a string slice.
	#[must_use]
	pub fn from_text(text: &'a str) -> Self {
		Self::from_reader(text.as_bytes())
	}

	fn fill_buffer(&mut self) {
		self.buffer_len = self.source.read(&mut self.buffer).unwrap_or(0);
		self.buffer_pos = 0;
	}

	fn next_byte(&mut self) -> Option<u8> {
		if self.buffer_pos >= self.buffer_len {
			self.fill_buffer();
			if self.buffer_len == 0 {
				return None;
			}
		}
		let byte = self.buffer[self.buffer_pos];
		self.buffer_pos += 1;
		Some(byte)
	}

	/// Builds an error that names the current position and the recently read input.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let position = self.position.saturating_sub(1);
		let (start_index, length) = if self.position < DEBUG_RING_BUFFER_SIZE {
			(0, position)
		} else {
			(self.position % DEBUG_RING_BUFFER_SIZE, DEBUG_RING_BUFFER_SIZE - 1)
		};

		let snapshot: Vec<u8> = self
			.debug_buffer
			.iter()
			.cycle()
			.skip(start_index)
			.take(length)
			.copied()
			.collect();

		let mut debug_output = String::from_utf8_lossy(&snapshot).into_owned();
		if self.peeked_byte.is_none() {
			debug_output.push_str("<EOF>");
		}
		anyhow!("{msg} at position {position}: {debug_output}")
	}

	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.peeked_byte
	}

	pub fn advance(&mut self) {
		self.peeked_byte = self.next_byte();
		if let Some(byte) = self.peeked_byte {
			let index = self.position % DEBUG_RING_BUFFER_SIZE;
			self.debug_buffer[index] = byte;
		}
		self.position += 1;
	}

	pub fn consume(&mut self) -> Option<u8> {
		let current_byte = self.peeked_byte;
		self.advance();
		current_byte
	}

	pub fn expect_next_byte(&mut self) -> Result<u8> {
		if let Some(current_byte) = self.peeked_byte {
			self.advance();
			Ok(current_byte)
		} else {
			Err(self.format_error("unexpected end"))
		}
	}

	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peeked_byte.ok_or_else(|| self.format_error("unexpected end"))
	}

	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// Returns `true` once every byte has been consumed.
	#[must_use]
	pub fn is_done(&self) -> bool {
		self.peeked_byte.is_none()
	}
}
