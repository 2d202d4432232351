//! This module provides the [`Blob`] struct, a wrapper around [`Vec<u8>`] used for every encoded payload.
//!
//! # Examples
//!
//! ```rust
//! use fallback_tile_core::Blob;
//!
//! let blob = Blob::from(&[0x1a, 0x05]);
//! assert_eq!(blob.len(), 2);
//! assert_eq!(blob.as_hex(), "1a 05");
//! assert_eq!(format!("{blob:?}"), "Blob(2): 1a 05");
//! ```

use anyhow::{Context, Result};
use log::debug;
use std::fmt::Debug;
use std::path::Path;

/// An owned byte buffer.
///
/// Encoders return a `Blob`, writers consume one. `Debug` renders the length and the hex bytes,
/// which is also the textual output format of the tile builder.
#[derive(Clone, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Creates an empty `Blob`.
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Creates a zero-filled `Blob` of the given length.
	#[must_use]
	pub fn new_sized(length: usize) -> Blob {
		Blob(vec![0; length])
	}

	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_slice()
	}

	pub fn as_mut_slice(&mut self) -> &mut [u8] {
		self.0.as_mut_slice()
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Returns the bytes as lowercase hex pairs separated by single spaces.
	#[must_use]
	pub fn as_hex(&self) -> String {
		self
			.0
			.iter()
			.map(|byte| format!("{byte:02x}"))
			.collect::<Vec<_>>()
			.join(" ")
	}

	#[must_use]
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Writes the bytes to `path`, creating the file or truncating an existing one.
	///
	/// The parent directory must already exist.
	pub fn save_to_file(&self, path: &Path) -> Result<()> {
		std::fs::write(path, &self.0).with_context(|| format!("Failed to write file \"{}\"", path.display()))?;
		debug!("wrote {} bytes to {path:?}", self.0.len());
		Ok(())
	}

	/// Reads the whole file at `path` into a new `Blob`.
	pub fn load_from_file(path: &Path) -> Result<Self> {
		let data = std::fs::read(path).with_context(|| format!("Failed to read file \"{}\"", path.display()))?;
		Ok(Blob::from(data))
	}
}

impl From<Vec<u8>> for Blob {
	fn from(item: Vec<u8>) -> Self {
		Blob(item)
	}
}

impl From<&Vec<u8>> for Blob {
	fn from(item: &Vec<u8>) -> Self {
		Blob(item.clone())
	}
}

impl From<&[u8]> for Blob {
	fn from(item: &[u8]) -> Self {
		Blob(item.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Blob {
	fn from(item: &[u8; N]) -> Self {
		Blob(item.to_vec())
	}
}

impl From<&str> for Blob {
	fn from(item: &str) -> Self {
		Blob(item.as_bytes().to_vec())
	}
}

impl From<String> for Blob {
	fn from(item: String) -> Self {
		Blob(item.into_bytes())
	}
}

/// Prints the byte length and the hexadecimal representation of the bytes.
impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Blob({}): {}", self.0.len(), self.as_hex())
	}
}

impl Default for Blob {
	fn default() -> Self {
		Self::new_empty()
	}
}
