//! Small parsing helpers built on top of [`ByteIterator`](super::iterator::ByteIterator).
//!
//! - `parse_word` for ASCII keywords such as geometry tags
//! - `expect_byte` for single punctuation bytes
//! - `parse_number_as_string` and `parse_number_as<T>` for decimal numbers with optional exponent
//!
//! Every helper skips leading whitespace, consumes only as much as needed and leaves the
//! iterator positioned at the next token.

use super::iterator::ByteIterator;
use anyhow::{Context, Error, Result};
use std::str::FromStr;

/// Reads a run of ASCII letters and returns it upper-cased.
///
/// # Example
/// ```
/// # use fallback_tile_core::byte_iterator::{ByteIterator, parse_word};
/// let mut it = ByteIterator::from_text("  LineString(");
/// assert_eq!(parse_word(&mut it).unwrap(), "LINESTRING");
/// assert_eq!(it.peek(), Some(b'('));
/// ```
pub fn parse_word(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	let mut word = String::new();
	while let Some(byte) = iter.peek() {
		if !byte.is_ascii_alphabetic() {
			break;
		}
		word.push(byte.to_ascii_uppercase() as char);
		iter.advance();
	}
	if word.is_empty() {
		return Err(iter.format_error("expected a keyword"));
	}
	Ok(word)
}

/// Skips whitespace and consumes `expected`, failing on any other byte.
pub fn expect_byte(iter: &mut ByteIterator, expected: u8) -> Result<()> {
	iter.skip_whitespace();
	match iter.expect_next_byte()? {
		b if b == expected => Ok(()),
		b => Err(iter.format_error(&format!(
			"expected '{}', but got '{}'",
			expected as char, b as char
		))),
	}
}

/// Parses a number and returns its textual representation.
///
/// Accepts an optional sign, integer digits, an optional fraction and an optional exponent
/// (`e`/`E` with optional sign). The integer digits may be left out when a fraction follows,
/// as in `.5`.
///
/// # Example
/// ```
/// # use fallback_tile_core::byte_iterator::{ByteIterator, parse_number_as_string};
/// let mut it = ByteIterator::from_text("-12.5e+2 7");
/// assert_eq!(parse_number_as_string(&mut it).unwrap(), "-12.5e+2");
/// ```
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	let mut number = Vec::with_capacity(16);

	if let Some(b'+' | b'-') = iter.peek() {
		number.push(iter.expect_next_byte()?);
	}

	let mut has_digits = false;
	while let Some(b'0'..=b'9') = iter.peek() {
		has_digits = true;
		number.push(iter.expect_next_byte()?);
	}

	if let Some(b'.') = iter.peek() {
		number.push(iter.expect_next_byte()?);
		let mut fractional_digits = false;
		while let Some(b'0'..=b'9') = iter.peek() {
			fractional_digits = true;
			number.push(iter.expect_next_byte()?);
		}
		if !fractional_digits {
			return Err(iter.format_error("expected digits after decimal point"));
		}
		if let Some(b'.') = iter.peek() {
			return Err(iter.format_error("unexpected '.' in number"));
		}
	} else if !has_digits {
		return Err(iter.format_error("expected digits in number"));
	}

	if let Some(b'e' | b'E') = iter.peek() {
		number.push(iter.expect_next_byte()?);
		if let Some(b'+' | b'-') = iter.peek() {
			number.push(iter.expect_next_byte()?);
		}
		let mut exponent_digits = false;
		while let Some(b'0'..=b'9') = iter.peek() {
			exponent_digits = true;
			number.push(iter.expect_next_byte()?);
		}
		if !exponent_digits {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	String::from_utf8(number).map_err(Error::from)
}

/// Parses a number and converts it via `R: FromStr`.
pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	let text = parse_number_as_string(iter).context("while parsing a number")?;
	text
		.parse::<R>()
		.map_err(|_| iter.format_error(&format!("invalid number '{text}'")))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn word_is_uppercased() -> Result<()> {
		let mut it = ByteIterator::from_text("multiPolygon (");
		assert_eq!(parse_word(&mut it)?, "MULTIPOLYGON");
		Ok(())
	}

	#[test]
	fn word_missing() {
		let mut it = ByteIterator::from_text("  (1 2)");
		assert_eq!(
			parse_word(&mut it).unwrap_err().to_string(),
			"expected a keyword at position 2:   "
		);
	}

	#[test]
	fn expect_byte_skips_whitespace() -> Result<()> {
		let mut it = ByteIterator::from_text("  ( ,");
		expect_byte(&mut it, b'(')?;
		expect_byte(&mut it, b',')?;
		assert!(it.is_done());
		Ok(())
	}

	#[test]
	fn expect_byte_mismatch() {
		let mut it = ByteIterator::from_text(")");
		assert!(
			expect_byte(&mut it, b'(')
				.unwrap_err()
				.to_string()
				.starts_with("expected '(', but got ')'")
		);
	}

	#[rstest]
	#[case("0", "0")]
	#[case("4096 ", "4096")]
	#[case("-1570,", "-1570")]
	#[case("+3.25)", "+3.25")]
	#[case("1e3", "1e3")]
	#[case("2.5E-1", "2.5E-1")]
	#[case(".5 ", ".5")]
	#[case("-.25,", "-.25")]
	fn number_as_string(#[case] input: &str, #[case] expected: &str) -> Result<()> {
		let mut it = ByteIterator::from_text(input);
		assert_eq!(parse_number_as_string(&mut it)?, expected);
		Ok(())
	}

	#[rstest]
	#[case("-")]
	#[case(".")]
	#[case("-.e1")]
	#[case("1.")]
	#[case("1.2.3")]
	#[case("1e")]
	#[case("x")]
	fn number_invalid(#[case] input: &str) {
		let mut it = ByteIterator::from_text(input);
		assert!(parse_number_as_string(&mut it).is_err());
	}

	#[test]
	fn number_as_f64() -> Result<()> {
		let mut it = ByteIterator::from_text(" 128 3.5");
		assert_eq!(parse_number_as::<f64>(&mut it)?, 128.0);
		assert_eq!(parse_number_as::<f64>(&mut it)?, 3.5);
		let mut it = ByteIterator::from_text(".5 -.5");
		assert_eq!(parse_number_as::<f64>(&mut it)?, 0.5);
		assert_eq!(parse_number_as::<f64>(&mut it)?, -0.5);
		Ok(())
	}

	#[test]
	fn number_as_wrong_type() {
		let mut it = ByteIterator::from_text("-5");
		assert!(parse_number_as::<u32>(&mut it).is_err());
	}
}
