use crate::{
	Coordinates, Geometry, GeometryTrait, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry,
	MultiPolygonGeometry, PointGeometry, PolygonGeometry, RingGeometry,
};
use anyhow::{Context, Result};
use fallback_tile_core::byte_iterator::{ByteIterator, expect_byte, parse_number_as, parse_word};

/// Parses a WKT string into a verified [`Geometry`].
///
/// Keywords are case-insensitive and whitespace is free-form. Numbers may carry a fraction
/// (`.5` and `0.5` are both accepted) and an exponent. `EMPTY` geometries and
/// `Z`/`M` coordinates are rejected, as is anything after the geometry. Errors name the
/// byte position where parsing stopped.
///
/// # Example
/// ```
/// # use fallback_tile_geometry::{Geometry, parse_wkt};
/// let line = parse_wkt("LINESTRING(0 0, 4096 4096)").unwrap();
/// assert_eq!(line, Geometry::new_line_string(&[[0, 0], [4096, 4096]]));
/// ```
pub fn parse_wkt(wkt: &str) -> Result<Geometry> {
	let mut iter = ByteIterator::from_text(wkt);
	let geometry = parse_wkt_geometry(&mut iter)?;

	iter.skip_whitespace();
	if !iter.is_done() {
		return Err(iter.format_error("unexpected characters after geometry"));
	}

	geometry
		.verify()
		.with_context(|| format!("invalid {} in WKT \"{wkt}\"", geometry.type_name()))?;
	Ok(geometry)
}

fn parse_wkt_geometry(iter: &mut ByteIterator) -> Result<Geometry> {
	let tag = parse_word(iter).context("while reading the geometry type")?;
	check_no_modifier(iter, &tag)?;

	Ok(match tag.as_str() {
		"POINT" => Geometry::Point(parse_point(iter)?),
		"LINESTRING" => Geometry::LineString(LineStringGeometry(parse_coordinate_list(iter)?)),
		"POLYGON" => Geometry::Polygon(parse_polygon(iter)?),
		"MULTIPOINT" => Geometry::MultiPoint(MultiPointGeometry(parse_list(iter, parse_multi_point_entry)?)),
		"MULTILINESTRING" => Geometry::MultiLineString(MultiLineStringGeometry(parse_list(iter, |iter| {
			parse_coordinate_list(iter).map(LineStringGeometry)
		})?)),
		"MULTIPOLYGON" => Geometry::MultiPolygon(MultiPolygonGeometry(parse_list(iter, parse_polygon)?)),
		_ => return Err(iter.format_error(&format!("unknown geometry type '{tag}'"))),
	})
}

/// Rejects `EMPTY` and dimension modifiers between the tag and the opening parenthesis.
fn check_no_modifier(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	iter.skip_whitespace();
	if !iter.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
		return Ok(());
	}
	let word = parse_word(iter)?;
	Err(iter.format_error(&match word.as_str() {
		"EMPTY" => format!("{tag} EMPTY is not supported"),
		"Z" | "M" | "ZM" => format!("{word} coordinates are not supported"),
		_ => format!("unexpected keyword '{word}' after {tag}"),
	}))
}

/// Parses `( item, item, ... )`.
fn parse_list<T>(iter: &mut ByteIterator, mut parse_item: impl FnMut(&mut ByteIterator) -> Result<T>) -> Result<Vec<T>> {
	expect_byte(iter, b'(')?;
	let mut items = Vec::new();
	loop {
		items.push(parse_item(iter)?);
		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => continue,
			b')' => break,
			b => {
				return Err(iter.format_error(&format!("expected ',' or ')', but got '{}'", b as char)));
			}
		}
	}
	Ok(items)
}

fn parse_coordinates(iter: &mut ByteIterator) -> Result<Coordinates> {
	let x = parse_number_as::<f64>(iter)?;
	let y = parse_number_as::<f64>(iter)?;
	iter.skip_whitespace();
	if iter.peek().is_some_and(|b| b.is_ascii_digit() || b == b'-' || b == b'+') {
		return Err(iter.format_error("only two-dimensional coordinates are supported"));
	}
	Ok(Coordinates::new(x, y))
}

fn parse_coordinate_list(iter: &mut ByteIterator) -> Result<Vec<Coordinates>> {
	parse_list(iter, parse_coordinates)
}

fn parse_point(iter: &mut ByteIterator) -> Result<PointGeometry> {
	expect_byte(iter, b'(')?;
	let point = PointGeometry(parse_coordinates(iter)?);
	expect_byte(iter, b')')?;
	Ok(point)
}

fn parse_polygon(iter: &mut ByteIterator) -> Result<PolygonGeometry> {
	parse_list(iter, |iter| parse_coordinate_list(iter).map(RingGeometry)).map(PolygonGeometry)
}

/// Accepts both `MULTIPOINT (1 2, 3 4)` and `MULTIPOINT ((1 2), (3 4))`.
fn parse_multi_point_entry(iter: &mut ByteIterator) -> Result<PointGeometry> {
	iter.skip_whitespace();
	if iter.peek() == Some(b'(') {
		parse_point(iter)
	} else {
		parse_coordinates(iter).map(PointGeometry)
	}
}
