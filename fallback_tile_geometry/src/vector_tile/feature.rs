use super::{geometry_type::GeomType, layer::VectorTileLayer};
use crate::*;
use anyhow::{Context, Result, bail, ensure};
use byteorder::LE;
use fallback_tile_core::{
	Blob,
	io::{ValueReader, ValueReaderSlice, ValueWriter, ValueWriterBlob, WIRE_LEN, WIRE_VARINT},
};
use log::trace;

const COMMAND_MOVE_TO: u64 = 1;
const COMMAND_LINE_TO: u64 = 2;
const COMMAND_CLOSE_PATH: u64 = 7;

/// A feature as stored in a layer: tag ids into the layer tables plus encoded geometry commands.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorTileFeature {
	pub id: Option<u64>,
	pub tag_ids: Vec<u32>,
	pub geom_type: GeomType,
	pub geom_data: Blob,
}

impl Default for VectorTileFeature {
	fn default() -> Self {
		VectorTileFeature {
			id: None,
			tag_ids: Vec::new(),
			geom_type: GeomType::Unknown,
			geom_data: Blob::new_empty(),
		}
	}
}

impl VectorTileFeature {
	pub fn read(reader: &mut dyn ValueReader<'_, LE>) -> Result<VectorTileFeature> {
		let mut f = VectorTileFeature::default();

		while reader.has_remaining() {
			match reader.read_pbf_key().context("Failed to read PBF key")? {
				(1, WIRE_VARINT) => f.id = Some(reader.read_varint().context("Failed to read feature ID")?),
				(2, WIRE_LEN) => f.tag_ids = reader.read_pbf_packed_uint32().context("Failed to read tag IDs")?,
				(3, WIRE_VARINT) => {
					f.geom_type = GeomType::from(reader.read_varint().context("Failed to read geometry type")?);
				}
				(4, WIRE_LEN) => f.geom_data = reader.read_pbf_blob().context("Failed to read geometry data")?,
				(f, w) => bail!("Unexpected combination of field number ({f}) and wire type ({w})"),
			}
		}

		Ok(f)
	}

	pub fn to_blob(&self) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new_le();

		if let Some(id) = self.id {
			writer.write_pbf_key(1, WIRE_VARINT)?;
			writer.write_varint(id).context("Failed to write feature ID")?;
		}

		if !self.tag_ids.is_empty() {
			writer.write_pbf_key(2, WIRE_LEN)?;
			writer
				.write_pbf_packed_uint32(&self.tag_ids)
				.context("Failed to write tag IDs")?;
		}

		writer.write_pbf_key(3, WIRE_VARINT)?;
		writer
			.write_varint(self.geom_type.as_u64())
			.context("Failed to write geometry type")?;

		if !self.geom_data.is_empty() {
			writer.write_pbf_key(4, WIRE_LEN)?;
			writer
				.write_pbf_blob(&self.geom_data)
				.context("Failed to write geometry data")?;
		}

		Ok(writer.into_blob())
	}

	/// Decodes the geometry commands. The result is always a `Multi*` geometry.
	pub fn to_geometry(&self) -> Result<Geometry> {
		let parts = self.decode_parts().context("Failed to decode geometry commands")?;

		match self.geom_type {
			GeomType::Unknown => bail!("Unknown geometry type"),

			GeomType::MultiPoint => {
				ensure!(!parts.is_empty(), "(Multi)Points must not be empty");
				let mut points = MultiPointGeometry::new();
				for part in parts {
					let [coord] = part.as_slice() else {
						bail!("(Multi)Point entries must have exactly one entry");
					};
					points.push(PointGeometry::from(coord));
				}
				Ok(Geometry::MultiPoint(points))
			}

			GeomType::MultiLineString => {
				ensure!(!parts.is_empty(), "MultiLineStrings must have at least one entry");
				let lines = MultiLineStringGeometry::from(parts);
				lines.verify()?;
				Ok(Geometry::MultiLineString(lines))
			}

			GeomType::MultiPolygon => {
				ensure!(!parts.is_empty(), "Polygons must have at least one entry");
				let mut polygons = MultiPolygonGeometry::new();
				let mut current = PolygonGeometry::new();

				for part in parts {
					let ring = RingGeometry::from(part);
					ring.verify()?;

					if ring.is_clockwise() {
						if !current.is_empty() {
							polygons.push(current);
							current = PolygonGeometry::new();
						}
						current.push(ring);
					} else if ring.area() < 0.0 {
						if current.is_empty() {
							trace!("skipping inner ring without preceding outer ring");
						} else {
							current.push(ring);
						}
					} else {
						trace!("skipping ring with zero area");
					}
				}

				if !current.is_empty() {
					polygons.push(current);
				}

				Ok(Geometry::MultiPolygon(polygons))
			}
		}
	}

	/// Splits the command stream into point sequences; ClosePath repeats the first point.
	fn decode_parts(&self) -> Result<Vec<Vec<[f64; 2]>>> {
		let mut reader = ValueReaderSlice::new_le(self.geom_data.as_slice());

		let mut parts: Vec<Vec<[f64; 2]>> = Vec::new();
		let mut part: Vec<[f64; 2]> = Vec::new();
		let mut x = 0i64;
		let mut y = 0i64;

		while reader.has_remaining() {
			let value = reader.read_varint().context("Failed to read varint for geometry command")?;
			let command = value & 0x7;
			let count = value >> 3;

			match command {
				COMMAND_MOVE_TO | COMMAND_LINE_TO => {
					for _ in 0..count {
						if command == COMMAND_MOVE_TO && !part.is_empty() {
							parts.push(part);
							part = Vec::new();
						}
						x += reader.read_svarint().context("Failed to read x coordinate")?;
						y += reader.read_svarint().context("Failed to read y coordinate")?;
						part.push([x as f64, y as f64]);
					}
				}
				COMMAND_CLOSE_PATH => {
					let first = *part.first().context("ClosePath command found on an empty linestring")?;
					part.push(first);
				}
				_ => bail!("Unknown command {command}"),
			}
		}

		if !part.is_empty() {
			parts.push(part);
		}
		Ok(parts)
	}

	pub fn to_feature(&self, layer: &VectorTileLayer) -> Result<GeoFeature> {
		let mut feature = GeoFeature::new(self.to_geometry().context("Failed to convert to geometry")?);

		if let Some(id) = self.id {
			feature.set_id(id);
		}

		feature.properties = layer.decode_tag_ids(&self.tag_ids)?;

		Ok(feature)
	}

	/// Encodes a geometry as MVT commands.
	///
	/// Coordinates are rounded to the integer grid and points repeating their predecessor are
	/// dropped. Polygon rings are re-oriented so the exterior runs clockwise on screen and holes
	/// run counter-clockwise; the closing point of each ring is replaced by a ClosePath command.
	///
	/// Fails for lines that collapse to a single grid point and for exterior rings without area
	/// on the grid. Holes without area are left out.
	pub fn from_geometry(id: Option<u64>, tag_ids: Vec<u32>, geometry: Geometry) -> Result<VectorTileFeature> {
		let geom_type = GeomType::from(&geometry);
		let mut writer = ValueWriterBlob::new_le();
		let mut cursor = [0i64, 0i64];

		match geometry.into_multi() {
			Geometry::MultiPoint(points) => {
				write_command(&mut writer, COMMAND_MOVE_TO, points.len())?;
				for point in points.into_iter() {
					write_point(&mut writer, &mut cursor, point.as_coord().to_grid())?;
				}
			}
			Geometry::MultiLineString(lines) => {
				for (index, line) in lines.into_iter().enumerate() {
					let path = snap_to_grid(line.as_vec());
					ensure!(
						path.len() >= 2,
						"LineString #{index} collapses to a single point on the tile grid"
					);
					write_path(&mut writer, &mut cursor, &path)?;
				}
			}
			Geometry::MultiPolygon(polygons) => {
				for (polygon_index, polygon) in polygons.with_normalized_winding().into_iter().enumerate() {
					for (ring_index, ring) in polygon.into_iter().enumerate() {
						let is_exterior = ring_index == 0;
						let mut path = snap_to_grid(ring.as_vec());
						if path.len() > 1 && path.first() == path.last() {
							path.pop();
						}

						let area = grid_area(&path);
						if area == 0 {
							ensure!(
								!is_exterior,
								"exterior ring of Polygon #{polygon_index} has no area on the tile grid"
							);
							trace!("dropping hole #{ring_index} of Polygon #{polygon_index} without area");
							continue;
						}
						if (area > 0) != is_exterior {
							path.reverse();
						}

						write_path(&mut writer, &mut cursor, &path)?;
						write_command(&mut writer, COMMAND_CLOSE_PATH, 1)?;
					}
				}
			}
			geometry => bail!("{} is not a multi geometry", geometry.type_name()),
		}

		Ok(VectorTileFeature {
			id,
			tag_ids,
			geom_type,
			geom_data: writer.into_blob(),
		})
	}
}

/// Rounds to the tile grid and drops points equal to their predecessor.
fn snap_to_grid(path: &[Coordinates]) -> Vec<[i64; 2]> {
	let mut points: Vec<[i64; 2]> = path.iter().map(Coordinates::to_grid).collect();
	points.dedup();
	points
}

/// Ring area on the grid, with the same sign convention as [`GeometryTrait::area`].
fn grid_area(ring: &[[i64; 2]]) -> i128 {
	let mut sum = 0i128;
	if let Some(mut p2) = ring.last() {
		for p1 in ring {
			sum += (i128::from(p2[0]) - i128::from(p1[0])) * (i128::from(p1[1]) + i128::from(p2[1]));
			p2 = p1;
		}
	}
	sum
}

fn write_command(writer: &mut ValueWriterBlob<LE>, command: u64, count: usize) -> Result<()> {
	writer
		.write_varint(((count as u64) << 3) | command)
		.context("Failed to write geometry command")
}

fn write_point(writer: &mut ValueWriterBlob<LE>, cursor: &mut [i64; 2], [x, y]: [i64; 2]) -> Result<()> {
	writer.write_svarint(x - cursor[0])?;
	writer.write_svarint(y - cursor[1])?;
	*cursor = [x, y];
	Ok(())
}

/// MoveTo the first point, then one LineTo for the rest.
fn write_path(writer: &mut ValueWriterBlob<LE>, cursor: &mut [i64; 2], path: &[[i64; 2]]) -> Result<()> {
	let Some((first, rest)) = path.split_first() else {
		return Ok(());
	};
	write_command(writer, COMMAND_MOVE_TO, 1)?;
	write_point(writer, cursor, *first)?;
	if !rest.is_empty() {
		write_command(writer, COMMAND_LINE_TO, rest.len())?;
		for point in rest {
			write_point(writer, cursor, *point)?;
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn round_trip(geometry: Geometry) -> Result<Geometry> {
		VectorTileFeature::from_geometry(None, vec![], geometry)?.to_geometry()
	}

	#[test]
	fn point_round_trip() -> Result<()> {
		let geometry = Geometry::new_point([1, 2]);
		assert_eq!(round_trip(geometry.clone())?, geometry.into_multi());
		Ok(())
	}

	#[test]
	fn multi_point_round_trip() -> Result<()> {
		let geometry = Geometry::new_multi_point(&[[2, 3], [4, 5]]);
		assert_eq!(round_trip(geometry.clone())?, geometry);
		Ok(())
	}

	#[test]
	fn line_string_round_trip() -> Result<()> {
		let geometry = Geometry::new_line_string(&[[0, 1], [0, 3], [7, 3]]);
		assert_eq!(round_trip(geometry.clone())?, geometry.into_multi());
		Ok(())
	}

	#[test]
	fn polygon_with_hole_round_trip() -> Result<()> {
		let geometry = Geometry::new_polygon(&[
			vec![[0, 0], [3, 0], [3, 3], [0, 3], [0, 0]],
			vec![[1, 1], [1, 2], [2, 2], [1, 1]],
		]);
		assert_eq!(round_trip(geometry.clone())?, geometry.into_multi());
		Ok(())
	}

	#[test]
	fn multi_polygon_round_trip() -> Result<()> {
		let geometry = Geometry::new_multi_polygon(&[
			[[[0, 0], [3, 0], [3, 3], [0, 3], [0, 0]]],
			[[[5, 5], [8, 5], [8, 8], [5, 8], [5, 5]]],
		]);
		assert_eq!(round_trip(geometry.clone())?, geometry);
		Ok(())
	}

	#[test]
	fn line_string_commands() -> Result<()> {
		let feature = VectorTileFeature::from_geometry(None, vec![], Geometry::new_line_string(&[[2, 2], [2, 10], [10, 10]]))?;
		assert_eq!(feature.geom_type, GeomType::MultiLineString);
		// MoveTo(1) +2 +2, LineTo(2) +0 +8, +8 +0
		assert_eq!(feature.geom_data.into_vec(), vec![9, 4, 4, 18, 0, 16, 16, 0]);
		Ok(())
	}

	#[test]
	fn square_commands() -> Result<()> {
		let square = Geometry::new_polygon(&[[[0, 0], [4096, 0], [4096, 4096], [0, 4096], [0, 0]]]);
		let feature = VectorTileFeature::from_geometry(None, vec![], square)?;
		assert_eq!(feature.geom_type, GeomType::MultiPolygon);
		assert_eq!(
			feature.geom_data.into_vec(),
			vec![9, 0, 0, 26, 0x80, 0x40, 0, 0, 0x80, 0x40, 0xFF, 0x3F, 0, 15]
		);
		Ok(())
	}

	#[test]
	fn counter_clockwise_exterior_is_reoriented() -> Result<()> {
		let ccw = Geometry::new_polygon(&[[[0, 0], [0, 10], [10, 10], [10, 0], [0, 0]]]);
		let Geometry::MultiPolygon(decoded) = round_trip(ccw)? else {
			panic!("expected a multi polygon");
		};
		assert_eq!(decoded.len(), 1);
		assert!(decoded.0[0].0[0].is_clockwise());
		Ok(())
	}

	#[test]
	fn rounds_to_grid() -> Result<()> {
		let geometry = round_trip(Geometry::new_point([1.4, 2.6]))?;
		assert_eq!(geometry, Geometry::new_multi_point(&[[1, 3]]));
		Ok(())
	}

	#[test]
	fn repeated_line_points_are_dropped() -> Result<()> {
		let feature = VectorTileFeature::from_geometry(None, vec![], parse_wkt("LINESTRING(1 1, 1 1, 5 5)")?)?;
		// MoveTo(1) +1 +1, LineTo(1) +4 +4
		assert_eq!(feature.geom_data.as_slice(), &[9, 2, 2, 10, 8, 8]);
		assert_eq!(
			feature.to_geometry()?,
			Geometry::new_multi_line_string(&[[[1, 1], [5, 5]]])
		);
		Ok(())
	}

	#[test]
	fn points_merged_by_rounding_are_dropped() -> Result<()> {
		let feature = VectorTileFeature::from_geometry(None, vec![], parse_wkt("LINESTRING(0.2 0, 0.4 0, 3 0)")?)?;
		assert_eq!(feature.geom_data.as_slice(), &[9, 0, 0, 10, 6, 0]);
		Ok(())
	}

	#[rstest]
	#[case("LINESTRING(1 1, 1 1)")]
	#[case("LINESTRING(0.2 0, 0.4 0)")]
	#[case("MULTILINESTRING((0 0, 5 5), (2 2, 2 2, 2 2))")]
	fn collapsed_line_is_rejected(#[case] wkt: &str) -> Result<()> {
		let error = VectorTileFeature::from_geometry(None, vec![], parse_wkt(wkt)?).unwrap_err();
		assert!(
			error.to_string().ends_with("collapses to a single point on the tile grid"),
			"{error}"
		);
		Ok(())
	}

	#[test]
	fn line_to_never_stays_in_place() -> Result<()> {
		let wkt = "MULTIPOLYGON(((0 0, 4 0, 4 0, 4 4, 0 4, 0 0)), ((5 5, 5.2 5, 9 5, 9 9, 5 9, 5 5)))";
		let feature = VectorTileFeature::from_geometry(None, vec![], parse_wkt(wkt)?)?;
		let mut reader = ValueReaderSlice::new_le(feature.geom_data.as_slice());
		while reader.has_remaining() {
			let value = reader.read_varint()?;
			let command = value & 0x7;
			if command == COMMAND_CLOSE_PATH {
				continue;
			}
			for _ in 0..value >> 3 {
				let delta = (reader.read_svarint()?, reader.read_svarint()?);
				assert!(command == COMMAND_MOVE_TO || delta != (0, 0));
			}
		}
		Ok(())
	}

	#[rstest]
	#[case("POLYGON((0 0, 10 0, 20 0, 0 0))")]
	#[case("POLYGON((0 0, 0.2 0, 0.2 0.3, 0 0))")]
	#[case("MULTIPOLYGON(((0 0, 3 0, 3 3, 0 0)), ((5 5, 6 6, 7 7, 5 5)))")]
	fn flat_exterior_ring_is_rejected(#[case] wkt: &str) -> Result<()> {
		let error = VectorTileFeature::from_geometry(None, vec![], parse_wkt(wkt)?).unwrap_err();
		assert!(error.to_string().contains("has no area on the tile grid"), "{error}");
		Ok(())
	}

	#[test]
	fn flat_hole_is_dropped() -> Result<()> {
		let with_flat_hole = parse_wkt("POLYGON((0 0, 8 0, 8 8, 0 8, 0 0), (1 1, 2 2, 3 3, 1 1))")?;
		assert_eq!(
			round_trip(with_flat_hole)?,
			Geometry::new_multi_polygon(&[[[[0, 0], [8, 0], [8, 8], [0, 8], [0, 0]]]])
		);
		Ok(())
	}

	#[test]
	fn read_and_write() -> Result<()> {
		let feature = VectorTileFeature::from_geometry(Some(3), vec![0, 1], Geometry::new_point([5, 6]))?;
		let blob = feature.to_blob()?;
		assert_eq!(blob.as_slice(), &[0x08, 3, 0x12, 2, 0, 1, 0x18, 1, 0x22, 3, 9, 10, 12]);
		let decoded = VectorTileFeature::read(&mut ValueReaderSlice::new_le(blob.as_slice()))?;
		assert_eq!(decoded, feature);
		Ok(())
	}

	#[test]
	fn invalid_command_stream() {
		let feature = VectorTileFeature {
			geom_type: GeomType::MultiLineString,
			geom_data: Blob::from(vec![15]),
			..Default::default()
		};
		assert!(feature.to_geometry().is_err());

		let unknown = VectorTileFeature {
			geom_data: Blob::from(vec![9, 0, 0]),
			..Default::default()
		};
		assert_eq!(unknown.to_geometry().unwrap_err().to_string(), "Unknown geometry type");
	}
}
